//! Interning registry for platforms
//!
//! A [`PlatformRegistry`] owns the table mapping normalized names to their
//! single shared [`Platform`] instance. It is seeded with the well-known
//! platforms and the unknown sentinel, and only ever grows.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::{Deserialize, DeserializeSeed, Deserializer};
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::{PlatformError, Result};
use crate::platform::{Platform, UNKNOWN, normalize};

pub struct PlatformRegistry {
    platforms: RwLock<HashMap<String, Platform>>,
}

impl PlatformRegistry {
    /// Create a registry holding only the well-known platforms and the unknown sentinel
    pub fn new() -> Self {
        let platforms = Platform::well_known()
            .into_iter()
            .chain([UNKNOWN.clone()])
            .map(|platform| (platform.name().to_string(), platform))
            .collect();

        Self {
            platforms: RwLock::new(platforms),
        }
    }

    /// Create a registry and register every platform named in `config`
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;

        let registry = Self::new();
        for name in &config.platforms {
            registry.of(name);
        }
        debug!(count = config.platforms.len(), "registry built from config");

        Ok(registry)
    }

    /// Gets a platform by name, registering a new one if it doesn't exist.
    ///
    /// The name is matched case-insensitively. Concurrent first-time calls for
    /// the same name all receive the same instance.
    pub fn of(&self, name: impl AsRef<str>) -> Platform {
        let name = normalize(name.as_ref());
        if let Some(platform) = Platform::well_known_by_name(&name) {
            return platform;
        }

        if let Some(platform) = self.read().get(&name) {
            return platform.clone();
        }

        // Another thread may have won the race between the read and write locks
        self.write()
            .entry(name)
            .or_insert_with_key(|name| {
                debug!(platform = %name, "registering platform");
                Platform::shared(name)
            })
            .clone()
    }

    /// Gets a platform by name, returning [`UNKNOWN`] if it isn't registered.
    ///
    /// Never modifies the registry.
    pub fn from_registry(&self, name: impl AsRef<str>) -> Platform {
        let name = name.as_ref();
        self.lookup(name).unwrap_or_else(|| {
            trace!(platform = %name, "platform not registered, using unknown");
            UNKNOWN.clone()
        })
    }

    /// Gets a registered platform by name without falling back to a sentinel
    pub fn lookup(&self, name: impl AsRef<str>) -> Option<Platform> {
        let name = normalize(name.as_ref());
        Platform::well_known_by_name(&name).or_else(|| self.read().get(&name).cloned())
    }

    /// Gets a registered platform by name, failing if it isn't registered
    pub fn require(&self, name: impl AsRef<str>) -> Result<Platform> {
        let name = name.as_ref();
        self.lookup(name).ok_or_else(|| PlatformError::Unregistered {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns every registered platform, sorted by name
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<_> = self.read().values().cloned().collect();
        platforms.sort();
        platforms
    }

    // Inserts are single map operations, so a poisoned table is still consistent
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Platform>> {
        self.platforms.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Platform>> {
        self.platforms.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlatformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.platforms()).finish()
    }
}

/// Deserializes a platform name through [`PlatformRegistry::of`], so decoded
/// platforms share identity with every other handle from the registry.
impl<'de> DeserializeSeed<'de> for &PlatformRegistry {
    type Value = Platform;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(self.of(name))
    }
}
