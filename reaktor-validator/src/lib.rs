//! Validator composition for Reaktor entities.
//!
//! This crate wires the per-kind field validators from `reaktor-model` into
//! runtime-configurable pipelines:
//! - [`compose`] / [`ComposedValidator`]: default validator, then an optional
//!   custom [`Adapter`], then the optional `custom_validation` hook
//! - [`ValidatorManager`]: the shared, atomically replaceable pipeline for
//!   one entity kind (`update_adapter`, `update_options`)
//! - [`EntityActions`] / [`ActionRegistry`]: the action-set wiring that hands
//!   validated entities to the (external) transport
//!
//! Nothing in this crate performs I/O.

mod actions;
mod adapter;
mod factory;
mod manager;

pub use actions::{
    ActionConfig, ActionRegistry, ActionsConfig, EntityActions, Operation, PreparedRequest,
};
pub use adapter::{Adapter, SharedAdapter};
pub use factory::{ComposedValidator, DefaultValidator, compose, default_validator};
pub use manager::ValidatorManager;

pub use reaktor_model::{
    AdapterOptions, Entity, EntityKind, Environment, Record, ValidationError, ValidationResult,
};
