//! Statistics over a packed document

use crate::node::{key, Node};
use crate::pack::reserved::Section;
use crate::pack::tree::ORBS_DIR;

/// Counts of the definitions found in a packed document.
///
/// Local orbs are counted recursively, so a command defined inside a local
/// orb contributes to `commands`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackSummary {
    pub commands: usize,
    pub jobs: usize,
    pub executors: usize,
    /// Orbs inlined from a source tree.
    pub local_orbs: usize,
    /// Orbs given as a reference, such as a version pin.
    pub orb_references: usize,
}

impl PackSummary {
    pub fn of(node: &Node) -> Self {
        let mut summary = Self::default();
        summary.visit(node);
        summary
    }

    fn visit(&mut self, node: &Node) {
        let Some(mapping) = node.as_mapping() else {
            return;
        };

        for section in Section::ALL {
            let count = mapping
                .get(key(section.as_str()))
                .and_then(Node::as_mapping)
                .map_or(0, |definitions| definitions.len());
            match section {
                Section::Commands => self.commands += count,
                Section::Jobs => self.jobs += count,
                Section::Executors => self.executors += count,
            }
        }

        if let Some(orbs) = mapping.get(key(ORBS_DIR)).and_then(Node::as_mapping) {
            for orb in orbs.values() {
                if orb.is_mapping() {
                    self.local_orbs += 1;
                    self.visit(orb);
                } else {
                    self.orb_references += 1;
                }
            }
        }
    }
}
