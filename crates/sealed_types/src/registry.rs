//! The frozen union registry.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use sealed_ir::{InvalidVariantReason, Name, SealedError, SealedResult, UnionId, VariantId};
use sealed_value::{Value, VariantLayout, VariantValue};

/// One entry in a union's member list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Member {
    /// A variant listed directly.
    Variant(VariantId),
    /// A nested union; its leaves belong to the outer union.
    Union(UnionId),
}

/// A defined union.
#[derive(Debug)]
pub struct UnionDef {
    id: UnionId,
    name: Name,
    /// Direct members, in declaration order.
    members: Vec<Member>,
    /// Flattened variants, in declaration order.
    leaves: Vec<VariantId>,
    leaf_set: FxHashSet<VariantId>,
}

impl UnionDef {
    pub(crate) fn new(
        id: UnionId,
        name: Name,
        members: Vec<Member>,
        leaves: Vec<VariantId>,
    ) -> Self {
        let leaf_set = leaves.iter().copied().collect();
        UnionDef {
            id,
            name,
            members,
            leaves,
            leaf_set,
        }
    }

    pub fn id(&self) -> UnionId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Every variant of this union, sub-unions flattened.
    pub fn leaves(&self) -> &[VariantId] {
        &self.leaves
    }

    pub fn has_leaf(&self, variant: VariantId) -> bool {
        self.leaf_set.contains(&variant)
    }
}

/// Immutable set of unions and variants.
///
/// Produced by `RegistryBuilder::finish`; safe to share across threads.
/// Ids are only meaningful for the registry that issued them.
pub struct UnionRegistry {
    unions: Vec<UnionDef>,
    layouts: Vec<Arc<VariantLayout>>,
    union_names: FxHashMap<Name, UnionId>,
    variant_names: FxHashMap<Name, VariantId>,
}

impl UnionRegistry {
    pub(crate) fn new(
        unions: Vec<UnionDef>,
        layouts: Vec<Arc<VariantLayout>>,
        union_names: FxHashMap<Name, UnionId>,
        variant_names: FxHashMap<Name, VariantId>,
    ) -> Self {
        UnionRegistry {
            unions,
            layouts,
            union_names,
            variant_names,
        }
    }

    // Lookup

    pub fn union_id(&self, name: &str) -> Option<UnionId> {
        self.union_names.get(name).copied()
    }

    pub fn variant_id(&self, name: &str) -> Option<VariantId> {
        self.variant_names.get(name).copied()
    }

    pub fn union(&self, id: UnionId) -> Option<&UnionDef> {
        self.unions.get(id.index())
    }

    pub fn layout(&self, id: VariantId) -> Option<&Arc<VariantLayout>> {
        self.layouts.get(id.index())
    }

    /// Flattened variants of a union; empty for an id from another registry.
    pub fn leaves(&self, union: UnionId) -> &[VariantId] {
        self.union(union).map_or(&[], UnionDef::leaves)
    }

    /// Direct members of a union; empty for an id from another registry.
    pub fn members(&self, union: UnionId) -> &[Member] {
        self.union(union).map_or(&[], UnionDef::members)
    }

    pub fn unions(&self) -> impl Iterator<Item = &UnionDef> {
        self.unions.iter()
    }

    pub fn variant_count(&self) -> usize {
        self.layouts.len()
    }

    /// Name of a variant.
    pub fn variant_name(&self, id: VariantId) -> Option<&Name> {
        self.layout(id).map(|l| l.name())
    }

    // Construction

    /// Build an instance from positional field values.
    pub fn construct(&self, variant: VariantId, fields: Vec<Value>) -> SealedResult<VariantValue> {
        VariantValue::new(self.layout_or_err(variant)?, fields)
    }

    /// Build an instance from named field values; omitted fields take their
    /// declared defaults.
    pub fn construct_named(
        &self,
        variant: VariantId,
        fields: &[(&str, Value)],
    ) -> SealedResult<VariantValue> {
        VariantValue::from_named(self.layout_or_err(variant)?, fields)
    }

    /// Build a field-less instance (`Loading`, `Delivered`).
    pub fn unit(&self, variant: VariantId) -> SealedResult<VariantValue> {
        self.construct(variant, Vec::new())
    }

    fn layout_or_err(&self, variant: VariantId) -> SealedResult<Arc<VariantLayout>> {
        self.layout(variant).cloned().ok_or_else(|| {
            SealedError::invalid(
                "<registry>",
                InvalidVariantReason::UnknownTag {
                    tag: Name::new(format!("{variant:?}")),
                },
            )
        })
    }

    // Membership

    /// Whether `value` was built from this registry's layouts.
    pub fn owns(&self, value: &VariantValue) -> bool {
        self.layout(value.id())
            .is_some_and(|layout| Arc::ptr_eq(layout, value.layout()))
    }

    /// The value's tag inside `union`, or `None` when it is not a member.
    ///
    /// Answered independently per union: a variant belonging to several
    /// unions gets a tag in each of them.
    pub fn tag_in<'v>(&self, value: &'v VariantValue, union: UnionId) -> Option<&'v Name> {
        (self.owns(value) && value.is_member_of(union)).then_some(value.name())
    }

    /// Whether `inner` is `outer` itself or nested inside it at any depth.
    pub fn contains_union(&self, outer: UnionId, inner: UnionId) -> bool {
        if outer == inner {
            return true;
        }
        let mut pending = vec![outer];
        let mut seen = FxHashSet::default();
        while let Some(u) = pending.pop() {
            if !seen.insert(u) {
                continue;
            }
            for member in self.members(u) {
                if let Member::Union(sub) = *member {
                    if sub == inner {
                        return true;
                    }
                    pending.push(sub);
                }
            }
        }
        false
    }

    /// Leaves covered by a match key inside `union`.
    ///
    /// A key names either a leaf variant of the union or a union nested in it
    /// (at any depth), which covers all of that union's leaves. Anything else
    /// is an `UnknownTag`.
    pub fn resolve_key(&self, union: UnionId, key: &str) -> SealedResult<&[VariantId]> {
        let def = self.union(union).ok_or_else(|| unknown_tag("<registry>", key))?;
        if let Some(v) = self.variant_id(key) {
            if let Some(pos) = def.leaves.iter().position(|&leaf| leaf == v) {
                return Ok(&def.leaves[pos..=pos]);
            }
        }
        if let Some(sub) = self.union_id(key) {
            if self.contains_union(union, sub) {
                return Ok(self.leaves(sub));
            }
        }
        Err(unknown_tag(def.name.clone(), key))
    }
}

fn unknown_tag(scope: impl Into<Name>, key: &str) -> SealedError {
    SealedError::invalid(
        scope,
        InvalidVariantReason::UnknownTag {
            tag: Name::new(key),
        },
    )
}

impl std::fmt::Debug for UnionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionRegistry")
            .field("unions", &self.unions.len())
            .field("variants", &self.layouts.len())
            .finish()
    }
}
