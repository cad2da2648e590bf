//! Startup-time union definition.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use sealed_ir::{InvalidVariantReason, Name, SealedError, SealedResult, UnionId, VariantId};
use sealed_value::{FieldLayout, RegistryToken, VariantLayout};

use crate::leaves::{check_cycles, collect_leaves};
use crate::registry::{Member, UnionDef, UnionRegistry};

/// A union slot: declared, and possibly defined.
struct UnionSlot {
    name: Name,
    /// `None` until `UnionBuilder::finish` runs for this union.
    members: Option<Vec<Member>>,
}

/// Collects variant and union definitions, then freezes them into a
/// [`UnionRegistry`].
///
/// Variant names are unique across the whole builder, union names likewise.
#[derive(Default)]
pub struct RegistryBuilder {
    layouts: Vec<VariantLayout>,
    variant_names: FxHashMap<Name, VariantId>,
    unions: Vec<UnionSlot>,
    union_names: FxHashMap<Name, UnionId>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a variant with its ordered fields.
    ///
    /// Fails on a duplicate variant name, a duplicate field name or a default
    /// that does not satisfy its field type.
    pub fn variant(
        &mut self,
        name: impl Into<Name>,
        fields: Vec<FieldLayout>,
    ) -> SealedResult<VariantId> {
        let name = name.into();
        if self.variant_names.contains_key(&name) {
            return Err(SealedError::invalid(
                name.clone(),
                InvalidVariantReason::DuplicateVariant { name },
            ));
        }
        let id = VariantId::from_raw(next_index(self.layouts.len()));
        let layout = VariantLayout::new(id, name.clone(), fields)?;
        self.layouts.push(layout);
        self.variant_names.insert(name, id);
        Ok(id)
    }

    /// Define a variant with no fields (`Loading`, `Delivered`).
    pub fn unit_variant(&mut self, name: impl Into<Name>) -> SealedResult<VariantId> {
        self.variant(name, Vec::new())
    }

    /// Reserve a union id before its members are known.
    ///
    /// Needed when a variant's field refers to the union it belongs to
    /// (`Cons(head: int, tail: List)`). The union must still be defined with
    /// [`RegistryBuilder::union`] before [`RegistryBuilder::finish`].
    pub fn declare_union(&mut self, name: impl Into<Name>) -> SealedResult<UnionId> {
        let name = name.into();
        if self.union_names.contains_key(&name) {
            return Err(SealedError::invalid(
                name.clone(),
                InvalidVariantReason::DuplicateUnion { name },
            ));
        }
        let id = UnionId::from_raw(next_index(self.unions.len()));
        self.unions.push(UnionSlot {
            name: name.clone(),
            members: None,
        });
        self.union_names.insert(name, id);
        Ok(id)
    }

    /// Start defining a union.
    ///
    /// If the name was reserved with [`RegistryBuilder::declare_union`], the
    /// reserved id is reused; defining the same union twice fails.
    pub fn union(&mut self, name: impl Into<Name>) -> SealedResult<UnionBuilder<'_>> {
        let name = name.into();
        let id = match self.union_names.get(&name) {
            Some(&id) if self.slot(id).is_some_and(|slot| slot.members.is_none()) => id,
            Some(_) => {
                return Err(SealedError::invalid(
                    name.clone(),
                    InvalidVariantReason::DuplicateUnion { name },
                ))
            }
            None => self.declare_union(name)?,
        };
        Ok(UnionBuilder {
            registry: self,
            id,
            members: Vec::new(),
        })
    }

    /// Variant id by name, for variants defined so far.
    pub fn variant_id(&self, name: &str) -> Option<VariantId> {
        self.variant_names.get(name).copied()
    }

    fn slot(&self, id: UnionId) -> Option<&UnionSlot> {
        self.unions.get(id.index())
    }

    /// Validate every definition and freeze the registry.
    ///
    /// Fails if a declared union was never defined or if a union contains
    /// itself through its sub-unions.
    pub fn finish(self) -> SealedResult<UnionRegistry> {
        let mut names = Vec::with_capacity(self.unions.len());
        let mut members = Vec::with_capacity(self.unions.len());
        for slot in self.unions {
            let Some(slot_members) = slot.members else {
                return Err(SealedError::invalid(
                    slot.name.clone(),
                    InvalidVariantReason::UndefinedUnion { name: slot.name },
                ));
            };
            names.push(slot.name);
            members.push(slot_members);
        }

        check_cycles(&names, &members)?;
        let leaves = collect_leaves(&members);

        // variant -> every union whose leaf set contains it
        let mut membership: Vec<Vec<UnionId>> = vec![Vec::new(); self.layouts.len()];
        for (union_index, union_leaves) in leaves.iter().enumerate() {
            let union_id = UnionId::from_raw(next_index(union_index));
            for leaf in union_leaves {
                if let Some(unions) = membership.get_mut(leaf.index()) {
                    unions.push(union_id);
                }
            }
        }

        let token = RegistryToken::new();
        let layouts: Vec<Arc<VariantLayout>> = self
            .layouts
            .into_iter()
            .zip(membership)
            .map(|(layout, unions)| {
                Arc::new(layout.with_unions(unions).in_registry(token.clone()))
            })
            .collect();

        let unions: Vec<UnionDef> = names
            .into_iter()
            .zip(members)
            .zip(leaves)
            .enumerate()
            .map(|(i, ((name, members), leaves))| {
                UnionDef::new(UnionId::from_raw(next_index(i)), name, members, leaves)
            })
            .collect();

        tracing::debug!(
            unions = unions.len(),
            variants = layouts.len(),
            "union registry frozen"
        );

        Ok(UnionRegistry::new(
            unions,
            layouts,
            self.union_names,
            self.variant_names,
        ))
    }
}

/// Defines the members of one union.
///
/// Dropping the builder without calling [`UnionBuilder::finish`] leaves the
/// union undefined, which [`RegistryBuilder::finish`] reports.
pub struct UnionBuilder<'a> {
    registry: &'a mut RegistryBuilder,
    id: UnionId,
    members: Vec<Member>,
}

impl UnionBuilder<'_> {
    /// Add a variant as a direct member.
    #[must_use]
    pub fn member(mut self, variant: VariantId) -> Self {
        self.members.push(Member::Variant(variant));
        self
    }

    /// Add several variants as direct members, in order.
    #[must_use]
    pub fn members(mut self, variants: impl IntoIterator<Item = VariantId>) -> Self {
        self.members
            .extend(variants.into_iter().map(Member::Variant));
        self
    }

    /// Add another union as a member; all of its leaves become leaves of
    /// this union.
    #[must_use]
    pub fn sub_union(mut self, union: UnionId) -> Self {
        self.members.push(Member::Union(union));
        self
    }

    /// Close the member set.
    ///
    /// Fails when the union is empty, lists the same member twice, or names
    /// a variant or union this builder never defined.
    pub fn finish(self) -> SealedResult<UnionId> {
        let UnionBuilder {
            registry,
            id,
            members,
        } = self;
        let scope = registry
            .slot(id)
            .map_or_else(|| Name::new("<union>"), |slot| slot.name.clone());

        if members.is_empty() {
            return Err(SealedError::invalid(scope, InvalidVariantReason::EmptyUnion));
        }

        for (i, member) in members.iter().enumerate() {
            let tag = match *member {
                Member::Variant(v) => registry.layouts.get(v.index()).map(|l| l.name().clone()),
                Member::Union(u) => registry.slot(u).map(|slot| slot.name.clone()),
            };
            let Some(tag) = tag else {
                return Err(SealedError::invalid(
                    scope,
                    InvalidVariantReason::UnknownTag {
                        tag: Name::new(format!("{member:?}")),
                    },
                ));
            };
            if members[..i].contains(member) {
                return Err(SealedError::invalid(
                    scope,
                    InvalidVariantReason::DuplicateTag { tag },
                ));
            }
        }

        tracing::debug!(union = %scope, members = members.len(), "union defined");
        if let Some(slot) = registry.unions.get_mut(id.index()) {
            slot.members = Some(members);
        }
        Ok(id)
    }
}

/// Dense indices are `u32`; a registry never approaches that many entries.
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
