//! Built match tables and dispatch.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use sealed_ir::{Name, SealedError, SealedResult, VariantId};
use sealed_value::{Value, VariantLayout, VariantValue};

use crate::tree::DecisionTree;
use crate::Fields;

pub(crate) type Handler<R> = Box<dyn Fn(&Fields<'_>) -> R + Send + Sync>;
pub(crate) type Guard = Box<dyn Fn(&Fields<'_>) -> bool + Send + Sync>;

pub(crate) struct Arm<R> {
    pub(crate) key: Name,
    pub(crate) guard: Option<Guard>,
    pub(crate) handler: Handler<R>,
}

/// Dispatch data for one leaf.
pub(crate) struct Entry {
    /// Identifies the registry the leaf came from.
    pub(crate) layout: Arc<VariantLayout>,
    pub(crate) tree: DecisionTree,
}

/// A checked, immutable match over one union.
///
/// Holds no reference to the registry; it can be stored and shared across
/// threads when `R` handlers are.
pub struct MatchTable<R> {
    union: Name,
    arms: Vec<Arm<R>>,
    fallback: Option<Handler<R>>,
    entries: FxHashMap<VariantId, Entry>,
    redundant: Vec<usize>,
    fallback_reachable: bool,
}

impl<R> MatchTable<R> {
    pub(crate) fn new(
        union: Name,
        arms: Vec<Arm<R>>,
        fallback: Option<Handler<R>>,
        entries: FxHashMap<VariantId, Entry>,
        redundant: Vec<usize>,
        fallback_reachable: bool,
    ) -> Self {
        MatchTable {
            union,
            arms,
            fallback,
            entries,
            redundant,
            fallback_reachable,
        }
    }

    /// Name of the matched union.
    pub fn union_name(&self) -> &Name {
        &self.union
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    /// Indices of arms that no value can ever select, ascending.
    pub fn redundant_arms(&self) -> &[usize] {
        &self.redundant
    }

    /// Whether some value can reach the fallback handler.
    ///
    /// `false` when there is no fallback, or when every leaf ends in an
    /// unguarded arm.
    pub fn fallback_reachable(&self) -> bool {
        self.fallback_reachable
    }

    /// Dispatch `value` to the first arm that accepts it.
    ///
    /// Fails with `NotAMember` when the value's variant is not a leaf of this
    /// union (or comes from another registry), and with `NonExhaustiveMatch`
    /// when every covering guard rejects it and there is no fallback.
    #[tracing::instrument(level = "trace", skip_all, fields(union = %self.union))]
    pub fn apply(&self, value: &VariantValue) -> SealedResult<R> {
        let entry = self
            .entries
            .get(&value.id())
            .filter(|entry| Arc::ptr_eq(&entry.layout, value.layout()))
            .ok_or_else(|| SealedError::NotAMember {
                union: self.union.clone(),
                variant: value.name().clone(),
            })?;

        tracing::trace!(tag = %value.name(), chain = entry.tree.depth(), "dispatch");
        let fields = Fields::new(value);
        let mut node = &entry.tree;
        loop {
            match node {
                DecisionTree::Leaf { arm_index } => {
                    return self.run_arm(*arm_index, &fields);
                }
                DecisionTree::Guard { arm_index, on_fail } => {
                    let accepted = match self.arms.get(*arm_index).and_then(|a| a.guard.as_ref()) {
                        Some(guard) => guard(&fields),
                        None => true,
                    };
                    if accepted {
                        return self.run_arm(*arm_index, &fields);
                    }
                    tracing::trace!(arm = *arm_index, "guard rejected");
                    node = on_fail;
                }
                DecisionTree::Fallback => {
                    if let Some(fallback) = &self.fallback {
                        return Ok(fallback(&fields));
                    }
                    return Err(self.unmatched(value));
                }
                DecisionTree::Fail => return Err(self.unmatched(value)),
            }
        }
    }

    /// Like [`MatchTable::apply`], for a field value; anything but a variant
    /// is `NotAMember`.
    pub fn apply_value(&self, value: &Value) -> SealedResult<R> {
        match value {
            Value::Variant(v) => self.apply(v),
            other => Err(SealedError::NotAMember {
                union: self.union.clone(),
                variant: Name::new(other.type_name()),
            }),
        }
    }

    fn run_arm(&self, arm_index: usize, fields: &Fields<'_>) -> SealedResult<R> {
        match self.arms.get(arm_index) {
            Some(arm) => Ok((arm.handler)(fields)),
            None => Err(self.unmatched(fields.value())),
        }
    }

    fn unmatched(&self, value: &VariantValue) -> SealedError {
        SealedError::NonExhaustiveMatch {
            union: self.union.clone(),
            missing: vec![value.name().clone()],
        }
    }
}

impl<R> fmt::Debug for MatchTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.arms.iter().map(|a| a.key.as_str()).collect();
        f.debug_struct("MatchTable")
            .field("union", &self.union)
            .field("arms", &keys)
            .field("fallback", &self.fallback.is_some())
            .field("redundant", &self.redundant)
            .finish()
    }
}
