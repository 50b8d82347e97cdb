//! Adapter options: the behavioral knobs shared by every validator.
//!
//! The key set is closed. Each key is optional so that merging is
//! right-biased per key: [`AdapterOptions::merge`] only overwrites the keys
//! the right-hand side actually sets.

use crate::{Entity, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Environment variable read by [`Environment::from_env`].
pub const ENVIRONMENT_VAR: &str = "REAKTOR_ENV";

/// A caller-supplied hook run after every other validation stage.
/// It may transform the entity or reject it.
pub type CustomValidation = Arc<dyn Fn(Entity) -> ValidationResult<Entity> + Send + Sync>;

/// Deployment environment. Informational: validators only vary logging by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    /// Reads [`ENVIRONMENT_VAR`]. Returns `None` if unset or unrecognized.
    pub fn from_env() -> Option<Self> {
        std::env::var(ENVIRONMENT_VAR).ok()?.parse().ok()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Options accepted by every validator.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdapterOptions {
    /// Reject records that lack the kind's identifying field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    /// Permit records missing normally-required fields (partial updates).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_partial: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,

    /// Runs last, after the default validator and any custom adapter.
    #[serde(skip)]
    pub custom_validation: Option<CustomValidation>,
}

impl AdapterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    #[must_use]
    pub fn with_allow_partial(mut self, allow_partial: bool) -> Self {
        self.allow_partial = Some(allow_partial);
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    #[must_use]
    pub fn with_custom_validation<F>(mut self, check: F) -> Self
    where
        F: Fn(Entity) -> ValidationResult<Entity> + Send + Sync + 'static,
    {
        self.custom_validation = Some(Arc::new(check));
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    pub fn allows_partial(&self) -> bool {
        self.allow_partial.unwrap_or(false)
    }

    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_default()
    }

    /// Right-biased shallow merge: keys set in `overrides` win, keys it
    /// leaves unset keep their current value.
    #[must_use]
    pub fn merge(&self, overrides: &AdapterOptions) -> AdapterOptions {
        AdapterOptions {
            strict: overrides.strict.or(self.strict),
            allow_partial: overrides.allow_partial.or(self.allow_partial),
            environment: overrides.environment.or(self.environment),
            custom_validation: overrides
                .custom_validation
                .clone()
                .or_else(|| self.custom_validation.clone()),
        }
    }
}

impl fmt::Debug for AdapterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterOptions")
            .field("strict", &self.strict)
            .field("allow_partial", &self.allow_partial)
            .field("environment", &self.environment)
            .field("custom_validation", &self.custom_validation.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
