//! Two-tag "success or failure" unions.
//!
//! A convention for fallible operations that report their outcome as a union
//! value instead of an error: `Success(value)` carries the payload,
//! `Failure(message)` a description. Nothing else in the workspace depends
//! on it.

use std::fmt::Display;

use sealed_ir::{FieldType, Name, SealedError, SealedResult, UnionId, VariantId};
use sealed_types::{RegistryBuilder, UnionRegistry};
use sealed_value::{FieldLayout, Value, VariantValue};

/// Field holding the success payload.
pub const VALUE_FIELD: &str = "value";
/// Field holding the failure description.
pub const MESSAGE_FIELD: &str = "message";

/// Ids of an outcome union and its two variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutcomeUnion {
    union: UnionId,
    success: VariantId,
    failure: VariantId,
}

impl OutcomeUnion {
    /// Define `name = Success(value: payload) | Failure(message: str)`.
    ///
    /// Variant names are unique per registry, so a second outcome union in
    /// the same registry needs [`OutcomeUnion::define_tagged`].
    pub fn define(
        builder: &mut RegistryBuilder,
        name: impl Into<Name>,
        payload: FieldType,
    ) -> SealedResult<Self> {
        Self::define_tagged(builder, name, "Success", "Failure", payload)
    }

    /// Same as [`OutcomeUnion::define`] with custom tag names.
    pub fn define_tagged(
        builder: &mut RegistryBuilder,
        name: impl Into<Name>,
        success_tag: impl Into<Name>,
        failure_tag: impl Into<Name>,
        payload: FieldType,
    ) -> SealedResult<Self> {
        let success = builder.variant(success_tag, vec![FieldLayout::new(VALUE_FIELD, payload)])?;
        let failure =
            builder.variant(failure_tag, vec![FieldLayout::new(MESSAGE_FIELD, FieldType::Str)])?;
        let union = builder
            .union(name)?
            .member(success)
            .member(failure)
            .finish()?;
        Ok(OutcomeUnion {
            union,
            success,
            failure,
        })
    }

    pub fn union(&self) -> UnionId {
        self.union
    }

    pub fn success(&self) -> VariantId {
        self.success
    }

    pub fn failure(&self) -> VariantId {
        self.failure
    }

    pub fn succeed(&self, registry: &UnionRegistry, value: Value) -> SealedResult<VariantValue> {
        registry.construct(self.success, vec![value])
    }

    pub fn fail(
        &self,
        registry: &UnionRegistry,
        message: impl Into<String>,
    ) -> SealedResult<VariantValue> {
        registry.construct(self.failure, vec![Value::string(message)])
    }

    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e.to_string())`.
    pub fn from_result<E: Display>(
        &self,
        registry: &UnionRegistry,
        result: Result<Value, E>,
    ) -> SealedResult<VariantValue> {
        match result {
            Ok(value) => self.succeed(registry, value),
            Err(err) => self.fail(registry, err.to_string()),
        }
    }

    /// View an outcome value as a `Result`.
    ///
    /// Fails with `NotAMember` for values of any other variant.
    pub fn to_result<'v>(
        &self,
        registry: &UnionRegistry,
        value: &'v VariantValue,
    ) -> SealedResult<Result<&'v Value, &'v str>> {
        let not_a_member = || SealedError::NotAMember {
            union: registry
                .union(self.union)
                .map_or_else(|| Name::new("<outcome>"), |def| def.name().clone()),
            variant: value.name().clone(),
        };
        if !registry.owns(value) {
            return Err(not_a_member());
        }
        if value.id() == self.success {
            value.get(VALUE_FIELD).map(Ok).ok_or_else(not_a_member)
        } else if value.id() == self.failure {
            value
                .get(MESSAGE_FIELD)
                .and_then(Value::as_str)
                .map(Err)
                .ok_or_else(not_a_member)
        } else {
            Err(not_a_member())
        }
    }
}
