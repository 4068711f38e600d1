//! Property-based tests for key derivation and ordering.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::node::key_label;
    use crate::pack::reserved::{interpret, Section};
    use crate::scanner::yaml_stem;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    proptest! {
        /// Property: a stem followed by a YAML extension always yields the stem
        #[test]
        fn yaml_stem_strips_yaml_extension(
            stem in "[a-zA-Z0-9_.-]{0,16}[a-zA-Z0-9_-]",
            ext in prop::sample::select(vec!["yml", "yaml"]),
        ) {
            let name = format!("{}.{}", stem, ext);
            prop_assert_eq!(yaml_stem(&name), Some(stem.as_str()));
        }

        /// Property: names without a YAML extension never yield a stem
        #[test]
        fn yaml_stem_rejects_other_extensions(
            stem in "[a-z]{1,8}",
            ext in "[a-z]{1,4}",
        ) {
            prop_assume!(ext != "yml" && ext != "yaml");
            let name = format!("{}.{}", stem, ext);
            prop_assert_eq!(yaml_stem(&name), None);
        }

        /// Property: section entries always come out sorted by file name,
        /// whatever order the files were created in
        #[test]
        fn section_entries_are_sorted(names in prop::collection::vec("[a-z]{1,8}", 1..8)) {
            let temp = TempDir::new().unwrap();
            for name in &names {
                fs::write(temp.path().join(format!("{}.yml", name)), "steps: []").unwrap();
            }

            let commands = interpret(Section::Commands, temp.path()).unwrap();
            let keys: Vec<String> = commands.keys().map(key_label).collect();
            let expected: Vec<String> = names.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
            prop_assert_eq!(keys, expected);
        }
    }
}
