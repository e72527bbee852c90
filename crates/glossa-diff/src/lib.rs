//! Diff engine for glossa.
//!
//! Compares translation resource trees and produces pruned result trees that
//! contain only the paths that differ. Every operation returns `None` when
//! there is nothing to report.
//!
//! # Key Functions
//!
//! - [`missing_keys`] -- Keys present in one tree but absent from the other
//! - [`content_diff`] -- Shared keys whose values differ, as `key` / `key_new` pairs
//! - [`untranslated`] / [`UntranslatedFilter`] -- Strings without target-script characters

pub mod content;
pub mod missing;
pub mod untranslated;

pub use content::{content_diff, NEW_VALUE_SUFFIX};
pub use missing::missing_keys;
pub use untranslated::{untranslated, UntranslatedFilter};
