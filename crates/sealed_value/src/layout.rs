//! Frozen variant shapes.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use sealed_ir::{
    FieldType, InvalidVariantReason, Name, SealedError, SealedResult, UnionId, VariantId,
};

use crate::conform::check_field;
use crate::Value;

/// One declared field of a variant.
#[derive(Clone, Debug)]
pub struct FieldLayout {
    name: Name,
    ty: FieldType,
    default: Option<Value>,
}

impl FieldLayout {
    /// A required field.
    pub fn new(name: impl Into<Name>, ty: FieldType) -> Self {
        FieldLayout {
            name: name.into(),
            ty,
            default: None,
        }
    }

    /// A field that named construction may omit.
    pub fn with_default(name: impl Into<Name>, ty: FieldType, default: impl Into<Value>) -> Self {
        FieldLayout {
            name: name.into(),
            ty,
            default: Some(default.into()),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ty(&self) -> &FieldType {
        &self.ty
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// Identity of the registry that froze a set of layouts.
///
/// Ids are dense per registry, so two registries hand out the same
/// `UnionId`s; the token tells them apart. Clones compare equal, separately
/// created tokens never do.
#[derive(Clone, Debug, Default)]
pub struct RegistryToken(Arc<()>);

impl RegistryToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for RegistryToken {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RegistryToken {}

/// Shape of one variant, shared by every instance of it.
///
/// Built by the registry and never modified once the registry is frozen.
/// Besides the fields it records every union the variant belongs to,
/// directly or through a sub-union, so membership can be answered from the
/// value alone.
#[derive(Debug)]
pub struct VariantLayout {
    id: VariantId,
    name: Name,
    fields: Vec<FieldLayout>,
    /// Map from field name to position.
    field_indices: FxHashMap<Name, usize>,
    /// Sorted, de-duplicated.
    unions: SmallVec<[UnionId; 4]>,
    /// Set when a registry freezes the layout.
    registry: Option<RegistryToken>,
}

impl VariantLayout {
    /// Create a layout, rejecting duplicate field names and ill-typed defaults.
    ///
    /// Defaults are checked before the layout belongs to any registry, so a
    /// union-typed field cannot take a default.
    pub fn new(
        id: VariantId,
        name: impl Into<Name>,
        fields: Vec<FieldLayout>,
    ) -> SealedResult<Self> {
        let name = name.into();
        let mut field_indices = FxHashMap::default();
        for (i, field) in fields.iter().enumerate() {
            if field_indices.insert(field.name.clone(), i).is_some() {
                return Err(SealedError::invalid(
                    name,
                    InvalidVariantReason::DuplicateField {
                        field: field.name.clone(),
                    },
                ));
            }
            if let Some(default) = &field.default {
                check_field(None, &name, field, default)?;
            }
        }
        Ok(VariantLayout {
            id,
            name,
            fields,
            field_indices,
            unions: SmallVec::new(),
            registry: None,
        })
    }

    /// Record the unions containing this variant.
    #[must_use]
    pub fn with_unions(mut self, unions: impl IntoIterator<Item = UnionId>) -> Self {
        let mut unions: SmallVec<[UnionId; 4]> = unions.into_iter().collect();
        unions.sort_unstable();
        unions.dedup();
        self.unions = unions;
        self
    }

    /// Mark the layout as frozen by the registry holding `token`.
    #[must_use]
    pub fn in_registry(mut self, token: RegistryToken) -> Self {
        self.registry = Some(token);
        self
    }

    /// The freezing registry; `None` for a layout built outside one.
    pub fn registry(&self) -> Option<&RegistryToken> {
        self.registry.as_ref()
    }

    pub fn id(&self) -> VariantId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldLayout> {
        self.fields.get(index)
    }

    /// Position of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Number of declared fields.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Whether the variant carries no fields (`Loading`, `Idle`).
    pub fn is_unit(&self) -> bool {
        self.fields.is_empty()
    }

    /// Every union this variant belongs to.
    pub fn unions(&self) -> &[UnionId] {
        &self.unions
    }

    pub fn is_member_of(&self, union: UnionId) -> bool {
        self.unions.binary_search(&union).is_ok()
    }
}
