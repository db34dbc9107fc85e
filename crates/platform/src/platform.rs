//! Platform identifiers

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Forge mod loader
pub static FORGE: Platform = Platform::from_static("forge");

/// Fabric mod loader
pub static FABRIC: Platform = Platform::from_static("fabric");

/// Quilt mod loader
pub static QUILT: Platform = Platform::from_static("quilt");

/// Spigot server platform
pub static SPIGOT: Platform = Platform::from_static("spigot");

/// Sentinel returned by non-creating lookups that miss
pub static UNKNOWN: Platform = Platform::from_static("unknown");

#[derive(Clone)]
enum Name {
    Static(&'static str),
    Shared(Arc<str>),
}

/// A named target platform (e.g., "forge").
///
/// Platforms are identified by their lowercase name. Equality, ordering and
/// hashing all go through the name; handles resolved from the same
/// [`PlatformRegistry`](crate::PlatformRegistry) additionally share one name
/// allocation, which [`Platform::ptr_eq`] observes. Cloning is cheap.
#[derive(Clone)]
pub struct Platform {
    name: Name,
}

impl Platform {
    const fn from_static(name: &'static str) -> Self {
        Self {
            name: Name::Static(name),
        }
    }

    /// Wraps an already normalized name. Only the registry creates these.
    pub(crate) fn shared(name: &str) -> Self {
        Self {
            name: Name::Shared(Arc::from(name)),
        }
    }

    /// Returns the well-known platform for a normalized name, if any
    pub(crate) fn well_known_by_name(name: &str) -> Option<Self> {
        match name {
            "forge" => Some(FORGE.clone()),
            "fabric" => Some(FABRIC.clone()),
            "quilt" => Some(QUILT.clone()),
            "spigot" => Some(SPIGOT.clone()),
            _ => None,
        }
    }

    /// The four pre-seeded platforms
    pub fn well_known() -> [Platform; 4] {
        [FORGE.clone(), FABRIC.clone(), QUILT.clone(), SPIGOT.clone()]
    }

    /// Returns the lowercase platform name
    pub fn name(&self) -> &str {
        match &self.name {
            Name::Static(name) => *name,
            Name::Shared(name) => name.as_ref(),
        }
    }

    /// Alias for [`Platform::name`]
    pub fn as_str(&self) -> &str {
        self.name()
    }

    pub fn is_unknown(&self) -> bool {
        self.name() == UNKNOWN.name()
    }

    pub fn is_well_known(&self) -> bool {
        Self::well_known_by_name(self.name()).is_some()
    }

    /// Returns true if both handles refer to the same interned instance.
    pub fn ptr_eq(&self, other: &Platform) -> bool {
        std::ptr::eq(self.name(), other.name())
    }
}

/// Lowercases a platform name the same way regardless of locale
pub(crate) fn normalize(name: &str) -> String {
    name.to_lowercase()
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.name().chars();
        if let Some(first) = chars.next() {
            for upper in first.to_uppercase() {
                write!(f, "{upper}")?;
            }
            f.write_str(chars.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Platform").field(&self.name()).finish()
    }
}

impl PartialEq for Platform {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.name() == other.name()
    }
}

impl Eq for Platform {}

impl PartialOrd for Platform {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Platform {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl Hash for Platform {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state)
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
