//! Content diff: shared keys whose values differ.
//!
//! Each difference is written as a pair of sibling entries: the old value
//! under the original key and the new value under the key plus
//! [`NEW_VALUE_SUFFIX`]. Merge tooling downstream reads this layout.

use glossa_types::tree::nested_mut;
use glossa_types::{Mapping, Tree};

/// Suffix appended to a key to hold the value from the second tree.
pub const NEW_VALUE_SUFFIX: &str = "_new";

/// Compare the values under keys present in both `a` and `b`.
///
/// Shared mappings are descended into; anything else that differs (leaves,
/// sequences, or a mapping facing a leaf) is reported as `key` / `key_new`.
/// Keys found in only one tree are skipped. Returns `None` when the trees
/// agree on every shared key.
pub fn content_diff(a: &Tree, b: &Tree) -> Option<Tree> {
    let mut result = Mapping::new();
    collect_changes(&mut Vec::new(), a, b, &mut result);
    (!result.is_empty()).then_some(Tree::Mapping(result))
}

fn collect_changes<'a>(path: &mut Vec<&'a str>, a: &'a Tree, b: &Tree, result: &mut Mapping) {
    let (Tree::Mapping(a_map), Tree::Mapping(b_map)) = (a, b) else {
        return;
    };

    for (key, a_child) in a_map {
        let Some(b_child) = b_map.get(key) else {
            continue;
        };
        if a_child.is_mapping() && b_child.is_mapping() {
            path.push(key);
            collect_changes(path, a_child, b_child, result);
            path.pop();
        } else if a_child != b_child {
            let parent = nested_mut(result, path.as_slice());
            parent.insert(key.clone(), a_child.clone());
            parent.insert(format!("{key}{NEW_VALUE_SUFFIX}"), b_child.clone());
        }
    }
}
