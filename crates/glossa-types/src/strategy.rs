//! Proptest strategies for small translation trees.
//!
//! Enabled for dependent crates' tests through the `proptest` feature.

use crate::{Leaf, Mapping, Tree};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = Tree> {
    prop_oneof![
        Just(Tree::Leaf(Leaf::Null)),
        any::<bool>().prop_map(|b| Tree::Leaf(Leaf::Bool(b))),
        (0i64..4).prop_map(|n| Tree::Leaf(Leaf::Number(n.into()))),
        prop::sample::select(vec!["", " ", "hello", "OK", "你好", "mixed 中文"])
            .prop_map(Tree::string),
    ]
}

/// Trees over a small key alphabet so that independently generated trees
/// share keys often.
pub fn arb_tree() -> impl Strategy<Value = Tree> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| Tree::Leaf(Leaf::Sequence(items))),
            prop::collection::vec((prop::sample::select(vec!["a", "b", "c", "d", "e"]), inner), 0..5)
                .prop_map(|entries| {
                    Tree::Mapping(
                        entries
                            .into_iter()
                            .map(|(k, v)| (k.to_owned(), v))
                            .collect::<Mapping>(),
                    )
                }),
        ]
    })
}

/// Mapping-rooted trees, the shape of every real resource document.
pub fn arb_document() -> impl Strategy<Value = Tree> {
    prop::collection::vec((prop::sample::select(vec!["a", "b", "c", "d", "e"]), arb_tree()), 0..5)
        .prop_map(|entries| {
            Tree::Mapping(entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
        })
}

/// Every path to a leaf or to an empty mapping.
pub fn leaf_paths(tree: &Tree) -> Vec<Vec<String>> {
    fn walk(tree: &Tree, path: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        match tree {
            Tree::Mapping(m) if !m.is_empty() => {
                for (k, v) in m {
                    path.push(k.clone());
                    walk(v, path, out);
                    path.pop();
                }
            }
            _ => out.push(path.clone()),
        }
    }
    let mut out = Vec::new();
    walk(tree, &mut Vec::new(), &mut out);
    out
}

/// Follow `path` from `tree`.
pub fn lookup<'a>(tree: &'a Tree, path: &[String]) -> Option<&'a Tree> {
    path.iter().try_fold(tree, |node, key| node.get(key))
}
