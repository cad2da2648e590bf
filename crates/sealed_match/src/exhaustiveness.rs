//! Coverage and redundancy checking for match tables.
//!
//! Two classes of problems:
//!
//! 1. **Missing tags**: a leaf with no covering arm and no fallback. Reported
//!    by name; when every leaf of a nested union is missing, the nested
//!    union's own name is reported instead of each leaf.
//!
//! 2. **Redundant arms**: an arm that no per-leaf chain reaches, because an
//!    earlier unguarded arm already covers all of its leaves.
//!
//! Redundancy is read off the compiled chains rather than re-derived from the
//! arms, so the report always agrees with what dispatch does.

use rustc_hash::FxHashSet;

use sealed_ir::{Name, UnionId, VariantId};
use sealed_types::{Member, UnionRegistry};

use crate::tree::DecisionTree;

/// Names of the uncovered tags of `union`, in member declaration order.
pub(crate) fn missing_tags(
    registry: &UnionRegistry,
    union: UnionId,
    uncovered: &FxHashSet<VariantId>,
) -> Vec<Name> {
    let mut reported = FxHashSet::default();
    let mut names = Vec::new();
    collect_missing(registry, union, uncovered, &mut reported, &mut names);
    names
}

fn collect_missing(
    registry: &UnionRegistry,
    union: UnionId,
    uncovered: &FxHashSet<VariantId>,
    reported: &mut FxHashSet<VariantId>,
    names: &mut Vec<Name>,
) {
    for member in registry.members(union) {
        match *member {
            Member::Variant(v) => {
                if uncovered.contains(&v) && reported.insert(v) {
                    if let Some(name) = registry.variant_name(v) {
                        names.push(name.clone());
                    }
                }
            }
            Member::Union(sub) => {
                let leaves = registry.leaves(sub);
                let whole = leaves
                    .iter()
                    .all(|leaf| uncovered.contains(leaf) && !reported.contains(leaf));
                match registry.union(sub) {
                    Some(def) if whole => {
                        reported.extend(leaves.iter().copied());
                        names.push(def.name().clone());
                    }
                    _ => collect_missing(registry, sub, uncovered, reported, names),
                }
            }
        }
    }
}

/// Arms referenced by at least one chain, and whether any chain reaches the
/// fallback.
pub(crate) struct Reachability {
    reached: FxHashSet<usize>,
    fallback_reached: bool,
}

impl Reachability {
    pub(crate) fn of<'t>(chains: impl IntoIterator<Item = &'t DecisionTree>) -> Self {
        let mut reach = Reachability {
            reached: FxHashSet::default(),
            fallback_reached: false,
        };
        for chain in chains {
            let mut node = chain;
            loop {
                match node {
                    DecisionTree::Leaf { arm_index } => {
                        reach.reached.insert(*arm_index);
                        break;
                    }
                    DecisionTree::Guard { arm_index, on_fail } => {
                        reach.reached.insert(*arm_index);
                        node = on_fail;
                    }
                    DecisionTree::Fallback => {
                        reach.fallback_reached = true;
                        break;
                    }
                    DecisionTree::Fail => break,
                }
            }
        }
        reach
    }

    /// Indices in `0..arm_count` that no chain reaches, ascending.
    pub(crate) fn redundant_arms(&self, arm_count: usize) -> Vec<usize> {
        (0..arm_count)
            .filter(|i| !self.reached.contains(i))
            .collect()
    }

    pub(crate) fn fallback_reached(&self) -> bool {
        self.fallback_reached
    }
}
