//! Foundation types for glossa.
//!
//! Translation resource files are modelled as ordered trees of string keys
//! with scalar leaves. Every other glossa crate depends on `glossa-types`.
//!
//! # Key Types
//!
//! - [`Tree`] -- A document node: either a [`Mapping`] or a [`Leaf`]
//! - [`Mapping`] -- Insertion-ordered map from key to child tree
//! - [`Dictionary`] -- Allow-list of strings accepted without translation
//! - [`TargetScript`] -- Code point range marking a string as translated

pub mod dictionary;
pub mod error;
pub mod script;
pub mod tree;

#[cfg(any(test, feature = "proptest"))]
pub mod strategy;

pub use dictionary::Dictionary;
pub use error::TypeError;
pub use script::TargetScript;
pub use tree::{Leaf, Mapping, Tree};
