//! Match table construction.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use sealed_ir::{InvalidVariantReason, Name, SealedError, SealedResult, UnionId, VariantId};
use sealed_types::UnionRegistry;

use crate::exhaustiveness::{missing_tags, Reachability};
use crate::table::{Arm, Entry, Guard, Handler, MatchTable};
use crate::tree::DecisionTree;
use crate::Fields;

/// Collects the arms of a match over one union.
///
/// Errors (unknown keys, missing tags) are reported by [`MatchBuilder::build`],
/// so arms can be chained without intermediate `?`.
pub struct MatchBuilder<'r, R> {
    registry: &'r UnionRegistry,
    union: UnionId,
    arms: Vec<Arm<R>>,
    fallback: Option<Handler<R>>,
}

impl<'r, R> MatchBuilder<'r, R> {
    pub fn new(registry: &'r UnionRegistry, union: UnionId) -> Self {
        MatchBuilder {
            registry,
            union,
            arms: Vec::new(),
            fallback: None,
        }
    }

    /// Handle every value whose tag is `key`.
    ///
    /// `key` is a leaf variant of the union or a union nested in it.
    #[must_use]
    pub fn arm<F>(self, key: impl Into<Name>, handler: F) -> Self
    where
        F: Fn(&Fields<'_>) -> R + Send + Sync + 'static,
    {
        self.push(key.into(), None, Box::new(handler))
    }

    /// Handle values tagged `key` for which `guard` holds; otherwise fall
    /// through to the next arm covering the tag.
    #[must_use]
    pub fn arm_if<G, F>(self, key: impl Into<Name>, guard: G, handler: F) -> Self
    where
        G: Fn(&Fields<'_>) -> bool + Send + Sync + 'static,
        F: Fn(&Fields<'_>) -> R + Send + Sync + 'static,
    {
        self.push(key.into(), Some(Box::new(guard)), Box::new(handler))
    }

    /// Handle anything no arm selected.
    ///
    /// Calling this twice keeps the last handler.
    #[must_use]
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Fields<'_>) -> R + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    fn push(mut self, key: Name, guard: Option<Guard>, handler: Handler<R>) -> Self {
        self.arms.push(Arm {
            key,
            guard,
            handler,
        });
        self
    }

    /// Check coverage and compile one decision chain per leaf.
    #[tracing::instrument(level = "debug", skip_all, fields(arms = self.arms.len()))]
    pub fn build(self) -> SealedResult<MatchTable<R>> {
        let MatchBuilder {
            registry,
            union,
            arms,
            fallback,
        } = self;

        let def = registry.union(union).ok_or_else(|| {
            SealedError::invalid(
                "<registry>",
                InvalidVariantReason::UnknownTag {
                    tag: Name::new(format!("{union:?}")),
                },
            )
        })?;

        // leaf -> covering arm indices, in declaration order
        let mut covering: FxHashMap<VariantId, Vec<usize>> = FxHashMap::default();
        for (index, arm) in arms.iter().enumerate() {
            for &leaf in registry.resolve_key(union, arm.key.as_str())? {
                covering.entry(leaf).or_default().push(index);
            }
        }

        let uncovered: FxHashSet<VariantId> = def
            .leaves()
            .iter()
            .copied()
            .filter(|leaf| !covering.contains_key(leaf))
            .collect();
        if !uncovered.is_empty() && fallback.is_none() {
            return Err(SealedError::NonExhaustiveMatch {
                union: def.name().clone(),
                missing: missing_tags(registry, union, &uncovered),
            });
        }

        let has_fallback = fallback.is_some();
        let mut entries = FxHashMap::default();
        for &leaf in def.leaves() {
            let Some(layout) = registry.layout(leaf) else {
                continue;
            };
            let chain = covering.get(&leaf).map_or(&[][..], Vec::as_slice);
            let tree = DecisionTree::compile(chain, |i| arms[i].guard.is_some(), has_fallback);
            entries.insert(
                leaf,
                Entry {
                    layout: Arc::clone(layout),
                    tree,
                },
            );
        }

        let reach = Reachability::of(entries.values().map(|e: &Entry| &e.tree));
        let redundant = reach.redundant_arms(arms.len());
        for &index in &redundant {
            tracing::warn!(
                union = %def.name(),
                arm = index,
                key = %arms[index].key,
                "match arm can never be selected"
            );
        }
        let fallback_reachable = has_fallback && reach.fallback_reached();
        if has_fallback && !fallback_reachable {
            tracing::warn!(union = %def.name(), "match fallback can never be selected");
        }

        tracing::debug!(union = %def.name(), leaves = entries.len(), "match table built");

        Ok(MatchTable::new(
            def.name().clone(),
            arms,
            fallback,
            entries,
            redundant,
            fallback_reachable,
        ))
    }
}

/// `registry.matcher(union)` shorthand for [`MatchBuilder::new`].
pub trait MatchExt {
    fn matcher<R>(&self, union: UnionId) -> MatchBuilder<'_, R>;
}

impl MatchExt for UnionRegistry {
    fn matcher<R>(&self, union: UnionId) -> MatchBuilder<'_, R> {
        MatchBuilder::new(self, union)
    }
}
