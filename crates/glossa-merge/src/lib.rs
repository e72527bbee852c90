//! Merge engine for glossa.
//!
//! Overlays one translation tree onto another. Shared mappings are merged
//! key by key; every other value from the overlay replaces what the base
//! holds. There is no conflict detection: the overlay always wins.
//!
//! The usual overlay is the output of a diff or untranslated run that has
//! been reviewed and edited, merged back into the full document.

pub mod merge;

pub use merge::{merge, merge_into};
