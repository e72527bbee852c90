//! Ordered document trees.
//!
//! A [`Tree`] is either a [`Mapping`] of named children or a [`Leaf`].
//! Sequences are leaves: they compare structurally and are never descended
//! into by the diff and merge algorithms.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Insertion-ordered map from key to child tree.
pub type Mapping = IndexMap<String, Tree>;

/// A node of a translation resource document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tree {
    /// A node with named, ordered children.
    Mapping(Mapping),
    /// A terminal value.
    Leaf(Leaf),
}

/// A terminal value: a scalar or an opaque sequence.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Leaf {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Tree>),
}

impl Tree {
    /// A mapping with no children.
    pub fn empty() -> Self {
        Tree::Mapping(Mapping::new())
    }

    /// A string leaf.
    pub fn string(s: impl Into<String>) -> Self {
        Tree::Leaf(Leaf::String(s.into()))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Tree::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Tree::Mapping(m) => Some(m),
            Tree::Leaf(_) => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Tree::Mapping(m) => Some(m),
            Tree::Leaf(_) => None,
        }
    }

    /// The string content, if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tree::Leaf(Leaf::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a direct child. Leaves have no children.
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Number of leaves reachable through mappings. A leaf counts as one,
    /// an empty mapping as zero.
    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Mapping(m) => m.values().map(Tree::leaf_count).sum(),
            Tree::Leaf(_) => 1,
        }
    }

    /// Turn this node into a mapping, discarding a leaf if present.
    pub fn make_mapping(&mut self) -> &mut Mapping {
        match self {
            Tree::Mapping(m) => m,
            Tree::Leaf(_) => {
                *self = Tree::empty();
                self.make_mapping()
            }
        }
    }
}

/// Return the mapping found by following `path` from `root`, creating
/// intermediate mappings where a key is absent or holds a leaf.
///
/// An empty path returns `root` itself.
pub fn nested_mut<'a, K: AsRef<str>>(root: &'a mut Mapping, path: &[K]) -> &'a mut Mapping {
    let mut current = root;
    for key in path {
        current = current
            .entry(key.as_ref().to_owned())
            .or_insert_with(Tree::empty)
            .make_mapping();
    }
    current
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Leaf::Null, Leaf::Null) => true,
            (Leaf::Bool(a), Leaf::Bool(b)) => a == b,
            (Leaf::Number(a), Leaf::Number(b)) => numbers_equal(a, b),
            (Leaf::String(a), Leaf::String(b)) => a == b,
            (Leaf::Sequence(a), Leaf::Sequence(b)) => a == b,
            _ => false,
        }
    }
}

/// Exact numeric comparison so that `1` and `1.0` are the same value.
///
/// Integers are never rounded through `f64`: a float equals an integer only
/// if it is integral and converts to exactly that integer.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (integer(a), integer(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(x), None) => b.as_f64().is_some_and(|f| float_equals_integer(f, x)),
        (None, Some(y)) => a.as_f64().is_some_and(|f| float_equals_integer(f, y)),
        (None, None) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

fn integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float_equals_integer(f: f64, n: i128) -> bool {
    // 2^127 is the first float past i128::MAX.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i128 == n
}

impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                Tree::Mapping(map.into_iter().map(|(k, v)| (k, Tree::from(v))).collect())
            }
            Value::Array(items) => {
                Tree::Leaf(Leaf::Sequence(items.into_iter().map(Tree::from).collect()))
            }
            Value::String(s) => Tree::Leaf(Leaf::String(s)),
            Value::Number(n) => Tree::Leaf(Leaf::Number(n)),
            Value::Bool(b) => Tree::Leaf(Leaf::Bool(b)),
            Value::Null => Tree::Leaf(Leaf::Null),
        }
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        match tree {
            Tree::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            Tree::Leaf(Leaf::Sequence(items)) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            Tree::Leaf(Leaf::String(s)) => Value::String(s),
            Tree::Leaf(Leaf::Number(n)) => Value::Number(n),
            Tree::Leaf(Leaf::Bool(b)) => Value::Bool(b),
            Tree::Leaf(Leaf::Null) => Value::Null,
        }
    }
}

impl From<Mapping> for Tree {
    fn from(map: Mapping) -> Self {
        Tree::Mapping(map)
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Tree::from)
    }
}
