//! Action-set wiring.
//!
//! An [`EntityActions`] is the composition point between one entity kind's
//! [`ValidatorManager`] and the action functions that talk to the backend.
//! Request building and transport live outside this crate; here an action
//! ends in a [`PreparedRequest`] holding already-validated variables.

use crate::adapter::SharedAdapter;
use crate::manager::ValidatorManager;
use reaktor_model::{
    AdapterOptions, Entity, EntityKind, Environment, Record, ValidationError, ValidationResult,
};
use reaktor_types::normalize_identifiers;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Construction-time customization for one kind's actions.
#[derive(Clone, Default)]
pub struct ActionConfig {
    pub adapter: Option<SharedAdapter>,
    pub adapter_options: AdapterOptions,
}

impl ActionConfig {
    #[must_use]
    pub fn with_adapter<F>(mut self, adapter: F) -> Self
    where
        F: Fn(Entity, &AdapterOptions) -> ValidationResult<Entity> + Send + Sync + 'static,
    {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: AdapterOptions) -> Self {
        self.adapter_options = options;
        self
    }
}

impl fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("adapter", &self.adapter.is_some())
            .field("adapter_options", &self.adapter_options)
            .finish()
    }
}

/// The backend operation an action performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Update,
    Delete,
    Get,
}

/// Validated variables ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRequest {
    pub kind: EntityKind,
    pub operation: Operation,
    pub variables: Value,
}

/// Validation entry points for one entity kind.
///
/// Clones share one [`ValidatorManager`]: updating the adapter or options
/// through any clone changes validation for all of them.
#[derive(Clone, Debug)]
pub struct EntityActions {
    kind: EntityKind,
    validator: Arc<ValidatorManager>,
}

impl EntityActions {
    /// Builds the actions for `kind`. An unset `environment` is taken from
    /// `REAKTOR_ENV` when that variable holds a known value.
    pub fn new(kind: EntityKind, config: ActionConfig) -> Self {
        let mut options = config.adapter_options;
        if options.environment.is_none() {
            options.environment = Environment::from_env();
        }
        let validator = ValidatorManager::for_kind(kind, config.adapter, options);
        Self {
            kind,
            validator: Arc::new(validator),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn validator(&self) -> &Arc<ValidatorManager> {
        &self.validator
    }

    /// Validates a new entity submitted by the client.
    pub fn validate_input(&self, input: &Record) -> ValidationResult<Entity> {
        self.validator.validate(input, None)
    }

    /// Validates a partial update: required fields may be missing.
    pub fn validate_update(&self, input: &Record) -> ValidationResult<Entity> {
        let partial = AdapterOptions::new().with_allow_partial(true);
        self.validator.validate(input, Some(&partial))
    }

    /// Normalizes a record returned by the backend.
    ///
    /// Uses the read path: overlong values are truncated rather than
    /// rejected. The current `strict` and `environment` options apply;
    /// custom adapters and `custom_validation` do not.
    pub fn parse_output(&self, raw: &Record) -> ValidationResult<Entity> {
        let current = self.validator.options();
        let options = AdapterOptions {
            custom_validation: None,
            ..current
        };
        self.kind.parse(raw, &options)
    }

    /// Normalizes a list of backend records, failing on the first error.
    pub fn parse_many(&self, raws: &[Record]) -> ValidationResult<Vec<Entity>> {
        raws.iter().map(|raw| self.parse_output(raw)).collect()
    }

    /// Builds the variables for `operation`.
    ///
    /// `Add` and `Update` run the full pipeline; `Delete` and `Get` only
    /// need the kind's identifier.
    pub fn prepare(
        &self,
        operation: Operation,
        input: &Record,
    ) -> ValidationResult<PreparedRequest> {
        let variables = match operation {
            Operation::Add => json!({ self.kind.name(): self.validate_input(input)? }),
            Operation::Update => json!({ self.kind.name(): self.validate_update(input)? }),
            Operation::Delete | Operation::Get => {
                let schema = self.kind.schema();
                let ids = normalize_identifiers(input, schema.collection, schema.id_field);
                let entity_id = ids.entity_id.ok_or_else(|| {
                    ValidationError::field(self.kind, schema.id_field, "is required")
                })?;
                json!({ schema.id_field: entity_id })
            }
        };
        Ok(PreparedRequest {
            kind: self.kind,
            operation,
            variables,
        })
    }

    /// Replaces the custom adapter for every holder of these actions.
    pub fn update_adapter<F>(&self, adapter: F)
    where
        F: Fn(Entity, &AdapterOptions) -> ValidationResult<Entity> + Send + Sync + 'static,
    {
        self.validator.update_adapter(adapter);
    }

    pub fn clear_adapter(&self) {
        self.validator.clear_adapter();
    }

    pub fn clear_custom_validation(&self) {
        self.validator.clear_custom_validation();
    }

    /// Merges new options into the current ones for every holder of these
    /// actions.
    pub fn update_adapter_options(&self, options: AdapterOptions) {
        self.validator.update_options(options);
    }
}

/// Per-kind construction config for an [`ActionRegistry`].
#[derive(Clone, Debug, Default)]
pub struct ActionsConfig {
    configs: HashMap<EntityKind, ActionConfig>,
}

impl ActionsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, kind: EntityKind, config: ActionConfig) -> Self {
        self.configs.insert(kind, config);
        self
    }
}

/// One [`EntityActions`] per entity kind.
#[derive(Clone, Debug)]
pub struct ActionRegistry {
    actions: HashMap<EntityKind, EntityActions>,
}

impl ActionRegistry {
    pub fn new(mut config: ActionsConfig) -> Self {
        let actions = EntityKind::ALL
            .into_iter()
            .map(|kind| {
                let config = config.configs.remove(&kind).unwrap_or_default();
                (kind, EntityActions::new(kind, config))
            })
            .collect();
        Self { actions }
    }

    /// The actions for `kind`. Every kind is always present.
    pub fn get(&self, kind: EntityKind) -> &EntityActions {
        &self.actions[&kind]
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new(ActionsConfig::default())
    }
}
