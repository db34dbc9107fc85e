//! Registry configuration

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};
use crate::platform::{UNKNOWN, normalize};

/// Extra platforms to register when a registry is built.
///
/// ```json
/// { "platforms": ["neoforge", "paper"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub platforms: Vec<String>,
}

impl RegistryConfig {
    pub fn new(platforms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            platforms: platforms.into_iter().map(Into::into).collect(),
        }
    }

    /// Rejects names that would shadow the unknown sentinel
    pub fn validate(&self) -> Result<()> {
        match self
            .platforms
            .iter()
            .find(|name| normalize(name) == UNKNOWN.name())
        {
            Some(name) => Err(PlatformError::ReservedName { name: name.clone() }),
            None => Ok(()),
        }
    }
}
