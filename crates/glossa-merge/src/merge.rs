//! Recursive right-biased merge of two trees.

use glossa_types::{Mapping, Tree};
use tracing::{debug, trace};

/// Merge `overlay` into `base` and return the result.
pub fn merge(mut base: Tree, overlay: &Tree) -> Tree {
    merge_into(&mut base, overlay);
    base
}

/// Merge `overlay` into `base` in place.
///
/// For each key of the overlay: when both sides hold mappings they are
/// merged recursively, otherwise the overlay value replaces the base value
/// or is appended as a new key. Existing keys keep their position. If either
/// root is not a mapping, the overlay replaces the base wholesale.
pub fn merge_into(base: &mut Tree, overlay: &Tree) {
    match (base, overlay) {
        (Tree::Mapping(base_map), Tree::Mapping(overlay_map)) => {
            merge_mappings(base_map, overlay_map);
            debug!(leaves = overlay.leaf_count(), "merged overlay");
        }
        (base, overlay) => {
            debug!("non-mapping root; overlay replaces base");
            *base = overlay.clone();
        }
    }
}

fn merge_mappings(base: &mut Mapping, overlay: &Mapping) {
    for (key, over) in overlay {
        match (base.get_mut(key), over) {
            (Some(Tree::Mapping(inner)), Tree::Mapping(over_inner)) => {
                merge_mappings(inner, over_inner);
            }
            (Some(slot), _) => {
                trace!(key = %key, "overwriting value");
                *slot = over.clone();
            }
            (None, _) => {
                trace!(key = %key, "adding key");
                base.insert(key.clone(), over.clone());
            }
        }
    }
}
