//! Runtime-replaceable validation pipeline for one entity kind.
//!
//! A [`ValidatorManager`] is shared by every clone of an action set, so an
//! update made anywhere is observed by every later validation of that kind.
//! Options, adapter and the composed pipeline are published together as one
//! snapshot: a validation in flight runs entirely on the old snapshot or
//! entirely on the new one.

use crate::adapter::{Adapter, SharedAdapter};
use crate::factory::{ComposedValidator, DefaultValidator, compose, default_validator};
use reaktor_model::{AdapterOptions, Entity, EntityKind, Record, ValidationResult};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

struct ManagerState {
    options: AdapterOptions,
    adapter: Option<SharedAdapter>,
    composed: Arc<ComposedValidator>,
}

/// Owns the current validator configuration for one entity kind.
pub struct ValidatorManager {
    kind: EntityKind,
    /// Fixed for the manager's lifetime.
    default: DefaultValidator,
    state: RwLock<ManagerState>,
}

impl ValidatorManager {
    pub fn new(
        kind: EntityKind,
        default: DefaultValidator,
        adapter: Option<SharedAdapter>,
        options: AdapterOptions,
    ) -> Self {
        let composed = Arc::new(compose(Arc::clone(&default), adapter.clone(), options.clone()));
        Self {
            kind,
            default,
            state: RwLock::new(ManagerState {
                options,
                adapter,
                composed,
            }),
        }
    }

    /// A manager for `kind` using its built-in write-path validator.
    pub fn for_kind(
        kind: EntityKind,
        adapter: Option<SharedAdapter>,
        options: AdapterOptions,
    ) -> Self {
        Self::new(kind, default_validator(kind), adapter, options)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The current pipeline. Later updates do not affect the returned value.
    pub fn validator(&self) -> Arc<ComposedValidator> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state.composed)
    }

    /// Validates `input` with the current pipeline.
    pub fn validate(
        &self,
        input: &Record,
        call_options: Option<&AdapterOptions>,
    ) -> ValidationResult<Entity> {
        self.validator().validate(input, call_options)
    }

    /// Replaces the custom adapter, keeping the current options.
    pub fn update_adapter<F>(&self, adapter: F)
    where
        F: Fn(Entity, &AdapterOptions) -> ValidationResult<Entity> + Send + Sync + 'static,
    {
        self.replace_adapter(Some(Arc::new(adapter)));
    }

    /// Replaces the custom adapter with any [`Adapter`] implementation.
    pub fn update_adapter_with<A: Adapter + 'static>(&self, adapter: A) {
        self.replace_adapter(Some(Arc::new(adapter)));
    }

    /// Removes the custom adapter, keeping the current options.
    pub fn clear_adapter(&self) {
        self.replace_adapter(None);
    }

    fn replace_adapter(&self, adapter: Option<SharedAdapter>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.composed = Arc::new(compose(
            Arc::clone(&self.default),
            adapter.clone(),
            state.options.clone(),
        ));
        state.adapter = adapter;
        debug!(kind = %self.kind, adapter = state.adapter.is_some(), "validator adapter replaced");
    }

    /// Merges `partial` into the current options (keys it sets win) and
    /// rebuilds the pipeline.
    pub fn update_options(&self, partial: AdapterOptions) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let options = state.options.merge(&partial);
        state.composed = Arc::new(compose(
            Arc::clone(&self.default),
            state.adapter.clone(),
            options.clone(),
        ));
        state.options = options;
        debug!(kind = %self.kind, options = ?state.options, "validator options updated");
    }

    /// Removes `custom_validation` from the current options. Merging via
    /// [`update_options`](Self::update_options) never unsets a key.
    pub fn clear_custom_validation(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.options.custom_validation = None;
        state.composed = Arc::new(compose(
            Arc::clone(&self.default),
            state.adapter.clone(),
            state.options.clone(),
        ));
        debug!(kind = %self.kind, "validator custom validation cleared");
    }

    /// A copy of the current options.
    pub fn options(&self) -> AdapterOptions {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.options.clone()
    }

    /// The current custom adapter, if any.
    pub fn adapter(&self) -> Option<SharedAdapter> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.adapter.clone()
    }

    pub fn has_adapter(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.adapter.is_some()
    }
}

impl fmt::Debug for ValidatorManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ValidatorManager")
            .field("kind", &self.kind)
            .field("adapter", &state.adapter.is_some())
            .field("options", &state.options)
            .finish()
    }
}
