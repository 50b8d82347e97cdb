//! The validator factory.
//!
//! [`compose`] joins three stages into one [`ComposedValidator`]:
//! 1. the kind's default validator, on the raw input
//! 2. the custom adapter (if any), on the default validator's output
//! 3. `custom_validation` (if set in the merged options), on the result
//!
//! Any stage may fail. Errors are returned as-is, never wrapped.

use crate::adapter::SharedAdapter;
use reaktor_model::{AdapterOptions, Entity, EntityKind, Record, ValidationResult};
use std::fmt;
use std::sync::Arc;

/// The first stage of a pipeline: raw input to normalized entity.
pub type DefaultValidator =
    Arc<dyn Fn(&Record, &AdapterOptions) -> ValidationResult<Entity> + Send + Sync>;

/// The write-path validator for `kind`.
pub fn default_validator(kind: EntityKind) -> DefaultValidator {
    Arc::new(move |record: &Record, options: &AdapterOptions| kind.validate(record, options))
}

/// A fully composed, immutable validation pipeline.
#[derive(Clone)]
pub struct ComposedValidator {
    default: DefaultValidator,
    adapter: Option<SharedAdapter>,
    options: AdapterOptions,
}

/// Composes a pipeline from its stages and base options.
pub fn compose(
    default: DefaultValidator,
    adapter: Option<SharedAdapter>,
    options: AdapterOptions,
) -> ComposedValidator {
    ComposedValidator {
        default,
        adapter,
        options,
    }
}

impl ComposedValidator {
    /// Runs the pipeline. Keys set in `call_options` override the base
    /// options for this call only.
    pub fn validate(
        &self,
        input: &Record,
        call_options: Option<&AdapterOptions>,
    ) -> ValidationResult<Entity> {
        let merged = match call_options {
            Some(overrides) => self.options.merge(overrides),
            None => self.options.clone(),
        };

        let entity = (self.default)(input, &merged)?;
        let entity = match &self.adapter {
            Some(adapter) => adapter.adapt(entity, &merged)?,
            None => entity,
        };
        match &merged.custom_validation {
            Some(check) => check(entity),
            None => Ok(entity),
        }
    }

    /// The base options this pipeline was composed with.
    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }
}

impl fmt::Debug for ComposedValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedValidator")
            .field("adapter", &self.adapter.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reaktor_model::ValidationError;
    use serde_json::json;

    fn requires_a() -> DefaultValidator {
        Arc::new(|record: &Record, _: &AdapterOptions| -> ValidationResult<Entity> {
            let a = record
                .get("a")
                .and_then(|v| v.as_i64())
                .ok_or_else(|| ValidationError::field(EntityKind::Post, "a", "is required"))?;
            let mut data = Record::new();
            data.insert("a".into(), json!(a));
            Ok(Entity::new(EntityKind::Post, data))
        })
    }

    #[test]
    fn default_only() {
        let v = compose(requires_a(), None, AdapterOptions::default());
        let input = json!({"a": 1, "noise": true});
        let entity = v.validate(input.as_object().unwrap(), None).unwrap();
        assert_eq!(entity.data().len(), 1);
        assert!(!v.has_adapter());
    }

    #[test]
    fn adapter_sees_normalized_output() {
        let adapter: SharedAdapter = Arc::new(
            |entity: Entity, _: &AdapterOptions| -> ValidationResult<Entity> {
                assert!(entity.get("noise").is_none());
                Ok(entity)
            },
        );
        let v = compose(requires_a(), Some(adapter), AdapterOptions::default());
        let input = json!({"a": 1, "noise": true});
        assert!(v.validate(input.as_object().unwrap(), None).is_ok());
    }
}
