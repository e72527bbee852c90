//! Untranslated-string filter.
//!
//! A string looks untranslated when it contains no character from the target
//! script and the allow-list does not accept it verbatim. Blank strings are
//! always reported.

use glossa_types::{Dictionary, Leaf, Mapping, TargetScript, Tree};

/// Predicate and tree filter for strings that still need translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct UntranslatedFilter<'d> {
    script: TargetScript,
    dictionary: Option<&'d Dictionary>,
}

impl<'d> UntranslatedFilter<'d> {
    pub fn new(script: TargetScript) -> Self {
        Self {
            script,
            dictionary: None,
        }
    }

    /// Accept strings listed in `dictionary` as translated.
    pub fn with_dictionary(mut self, dictionary: Option<&'d Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// True if `s` is blank, or has no target-script character and is not
    /// in the dictionary.
    pub fn needs_translation(&self, s: &str) -> bool {
        if s.trim().is_empty() {
            return true;
        }
        !self.script.matches(s) && !self.dictionary.is_some_and(|d| d.contains(s))
    }

    /// Keep only the string leaves that need translation, with the mappings
    /// leading to them. Other leaves are dropped and emptied mappings pruned.
    pub fn filter(&self, tree: &Tree) -> Option<Tree> {
        match tree {
            Tree::Leaf(Leaf::String(s)) => self.needs_translation(s).then(|| tree.clone()),
            Tree::Leaf(_) => None,
            Tree::Mapping(map) => {
                let kept: Mapping = map
                    .iter()
                    .filter_map(|(key, child)| self.filter(child).map(|t| (key.clone(), t)))
                    .collect();
                (!kept.is_empty()).then_some(Tree::Mapping(kept))
            }
        }
    }
}

/// Filter `tree` against the default target script (Han ideographs).
pub fn untranslated(tree: &Tree, dictionary: Option<&Dictionary>) -> Option<Tree> {
    UntranslatedFilter::new(TargetScript::default())
        .with_dictionary(dictionary)
        .filter(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_types::strategy::arb_tree;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn flagged(v: Value, dict: Option<&Dictionary>) -> Option<Value> {
        untranslated(&Tree::from(v), dict).map(Value::from)
    }

    #[test]
    fn dictionary_entries_are_accepted() {
        let dict: Dictionary = ["OK"].into_iter().collect();
        assert_eq!(
            flagged(json!({"x": "OK", "y": "plain"}), Some(&dict)),
            Some(json!({"y": "plain"}))
        );
    }

    #[test]
    fn translated_strings_are_dropped() {
        assert_eq!(
            flagged(json!({"a": "你好", "b": "hello", "c": "MQTT 客户端"}), None),
            Some(json!({"b": "hello"}))
        );
    }

    #[test]
    fn fully_translated_tree_is_none() {
        assert_eq!(flagged(json!({"a": "你好", "b": {"c": "世界"}}), None), None);
    }

    #[test]
    fn blank_strings_are_always_flagged() {
        let dict = Dictionary::parse("\n \n");
        let dict_with_blank: Dictionary = ["", " "].into_iter().collect();
        let doc = json!({"empty": "", "space": "   ", "tab": "\t"});
        assert_eq!(flagged(doc.clone(), None), Some(doc.clone()));
        assert_eq!(flagged(doc.clone(), Some(&dict)), Some(doc.clone()));
        assert_eq!(flagged(doc.clone(), Some(&dict_with_blank)), Some(doc));
    }

    #[test]
    fn non_string_leaves_are_dropped() {
        assert_eq!(
            flagged(json!({"n": 1, "b": true, "z": null, "l": ["hello"], "s": "hello"}), None),
            Some(json!({"s": "hello"}))
        );
    }

    #[test]
    fn empty_branches_are_pruned() {
        assert_eq!(
            flagged(
                json!({"done": {"a": "完成", "n": 2}, "todo": {"deep": {"x": "text", "y": "文本"}}}),
                None
            ),
            Some(json!({"todo": {"deep": {"x": "text"}}}))
        );
        assert_eq!(flagged(json!({}), None), None);
        assert_eq!(flagged(json!({"a": {}}), None), None);
    }

    #[test]
    fn string_root_is_filtered_directly() {
        assert_eq!(flagged(json!("hello"), None), Some(json!("hello")));
        assert_eq!(flagged(json!("你好"), None), None);
    }

    #[test]
    fn empty_dictionary_behaves_like_none() {
        let dict = Dictionary::default();
        assert_eq!(flagged(json!({"a": "x"}), Some(&dict)), flagged(json!({"a": "x"}), None));
    }

    #[test]
    fn custom_script_changes_the_heuristic() {
        let script: TargetScript = "cyrillic".parse().unwrap();
        let filter = UntranslatedFilter::new(script);
        let out = filter
            .filter(&Tree::from(json!({"ru": "Привет", "zh": "你好", "en": "hi"})))
            .map(Value::from);
        assert_eq!(out, Some(json!({"zh": "你好", "en": "hi"})));
    }

    #[test]
    fn predicate_examples() {
        let dict: Dictionary = ["EMQX"].into_iter().collect();
        let filter = UntranslatedFilter::default().with_dictionary(Some(&dict));
        assert!(filter.needs_translation("Enable"));
        assert!(filter.needs_translation(" "));
        assert!(!filter.needs_translation("EMQX"));
        assert!(filter.needs_translation(" EMQX"));
        assert!(!filter.needs_translation("启用"));
    }

    proptest! {
        #[test]
        fn target_script_strings_are_never_flagged(prefix in "[a-z ]{0,8}", entry in "[a-z]{0,4}") {
            let s = format!("{prefix}中");
            let dict: Dictionary = [entry, s.clone()].into_iter().collect();
            let filter = UntranslatedFilter::default();
            prop_assert!(!filter.needs_translation(&s));
            prop_assert!(!filter.with_dictionary(Some(&dict)).needs_translation(&s));
        }

        #[test]
        fn result_contains_only_flagged_strings(a in arb_tree()) {
            fn check(t: &Tree) -> bool {
                match t {
                    Tree::Mapping(m) => !m.is_empty() && m.values().all(check),
                    Tree::Leaf(Leaf::String(s)) => UntranslatedFilter::default().needs_translation(s),
                    Tree::Leaf(_) => false,
                }
            }
            if let Some(out) = untranslated(&a, None) {
                prop_assert!(check(&out));
            }
        }
    }
}
