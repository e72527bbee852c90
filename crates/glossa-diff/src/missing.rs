//! Missing-key diff: keys of one tree that are absent from another.
//!
//! Only presence is compared here. Values that differ under a shared key are
//! the business of [`content_diff`](crate::content_diff).

use glossa_types::tree::nested_mut;
use glossa_types::{Mapping, Tree};

/// Find every key reachable in `a` that has no counterpart at the same path
/// in `b`.
///
/// A missing key is reported with its whole subtree from `a`. Shared keys
/// holding mappings are descended into. When `a[k]` is a mapping but `b[k]`
/// is a leaf, `k` itself counts as present; its children are then reported
/// because the leaf has no keys of its own. A `None` or non-mapping `b`
/// reports every key of `a`.
///
/// Returns `None` when nothing is missing or when `a` is not a mapping.
pub fn missing_keys(a: &Tree, b: Option<&Tree>) -> Option<Tree> {
    let mut result = Mapping::new();
    collect_missing(&mut Vec::new(), a, b, &mut result);
    (!result.is_empty()).then_some(Tree::Mapping(result))
}

fn collect_missing<'a>(
    path: &mut Vec<&'a str>,
    a: &'a Tree,
    b: Option<&Tree>,
    result: &mut Mapping,
) {
    let Tree::Mapping(a_map) = a else {
        return;
    };
    let b_map = b.and_then(Tree::as_mapping);

    for (key, a_child) in a_map {
        match b_map.and_then(|m| m.get(key)) {
            None => {
                nested_mut(result, path.as_slice()).insert(key.clone(), a_child.clone());
            }
            Some(b_child) if a_child.is_mapping() => {
                path.push(key);
                collect_missing(path, a_child, Some(b_child), result);
                path.pop();
            }
            // Both present and `a_child` is a leaf: values are not compared.
            Some(_) => {}
        }
    }
}
