//! Layered mapping merges
//!
//! A directory's packed mapping is built in layers: the primary document
//! forms the base, and entries found on disk are laid over it. Two overlay
//! operations cover every case:
//!
//! - [`overlay_section`] merges a section produced from a directory
//!   (`commands/`, `orbs/`, or an ordinary subdirectory) one level deep.
//!   Entries from disk replace same-named inline entries, while inline
//!   entries with no file counterpart are kept.
//! - [`replace_key`] sets a key from a single file, replacing any inline
//!   value wholesale.
//!
//! In both cases a key that already exists keeps its position in the
//! mapping and new keys are appended, so the base document's key order is
//! preserved. Every replaced inline value is logged as a warning.

use std::path::Path;

use log::warn;

use crate::node::{key, key_label, Mapping, Node, NodeKind};

/// Merge `section` into the mapping stored under `name` in `base`.
///
/// If `base[name]` is a mapping, each entry of `section` is inserted into
/// it, overwriting entries with the same key. If it is absent, null or any
/// non-mapping value, it is replaced by `section`.
pub fn overlay_section(base: &mut Mapping, name: &str, section: Mapping, source: &Path) {
    let section_key = matching_key(base, name);
    match base.get_mut(&section_key) {
        Some(Node::Mapping(existing)) => {
            for (entry_key, value) in section {
                let label = key_label(&entry_key);
                let target = matching_key(existing, &label);
                if existing.contains_key(&target) {
                    warn!(
                        "{}: Overriding inline value at '{}.{}' with file content",
                        source.display(),
                        name,
                        label
                    );
                }
                existing.insert(target, value);
            }
        }
        Some(existing) => {
            if !existing.is_null() {
                warn!(
                    "{}: Type mismatch at '{}': replacing {} with a mapping",
                    source.display(),
                    name,
                    NodeKind::of(existing)
                );
            }
            *existing = Node::Mapping(section);
        }
        None => {
            base.insert(section_key, Node::Mapping(section));
        }
    }
}

/// Set `base[name]` to `value`, replacing any inline value.
pub fn replace_key(base: &mut Mapping, name: &str, value: Node, source: &Path) {
    let target = matching_key(base, name);
    if let Some(previous) = base.insert(target, value) {
        warn!(
            "{}: Overriding inline value at '{}' ({}) with file content",
            source.display(),
            name,
            NodeKind::of(&previous)
        );
    }
}

/// Lay every top-level key of `overlay` over `base`, replacing on conflict.
pub fn overlay_mapping(base: &mut Mapping, overlay: Mapping, source: &Path) {
    for (entry_key, value) in overlay {
        let label = key_label(&entry_key);
        let target = if base.contains_key(&entry_key) {
            entry_key
        } else {
            matching_key(base, &label)
        };
        if let Some(previous) = base.insert(target, value) {
            warn!(
                "{}: Overriding value at '{}' ({})",
                source.display(),
                label,
                NodeKind::of(&previous)
            );
        }
    }
}

/// The key in `map` that a file named `name` refers to.
///
/// Inline keys such as `1:` or `true:` parse as numbers and booleans, so
/// keys are compared by their rendered label. The existing key is returned
/// so that replacing its value keeps its position; a string key is built
/// when nothing matches.
fn matching_key(map: &Mapping, name: &str) -> Node {
    map.keys()
        .find(|existing| key_label(existing) == name)
        .cloned()
        .unwrap_or_else(|| key(name))
}
