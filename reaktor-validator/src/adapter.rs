use reaktor_model::{AdapterOptions, Entity, ValidationResult};
use std::sync::Arc;

/// A caller-supplied transform run on the output of a kind's default
/// validator.
///
/// Adapters receive already-normalized entities and may rely on required
/// fields being present (unless the caller opted into partial input).
/// Returning an error aborts the pipeline; the error reaches the caller
/// unchanged.
///
/// Implemented for any `Fn(Entity, &AdapterOptions) -> ValidationResult<Entity>`.
pub trait Adapter: Send + Sync {
    fn adapt(&self, entity: Entity, options: &AdapterOptions) -> ValidationResult<Entity>;
}

impl<F> Adapter for F
where
    F: Fn(Entity, &AdapterOptions) -> ValidationResult<Entity> + Send + Sync,
{
    fn adapt(&self, entity: Entity, options: &AdapterOptions) -> ValidationResult<Entity> {
        self(entity, options)
    }
}

/// Shared handle to an adapter.
pub type SharedAdapter = Arc<dyn Adapter>;
