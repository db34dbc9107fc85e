//! Platform identifiers for mods.groovy
//!
//! This crate provides:
//! - `Platform`: an interned, case-insensitive platform name (forge, fabric, ...)
//! - `PlatformRegistry`: the owned table that hands out one instance per name
//! - `RegistryConfig`: extra platforms to register up front

mod config;
mod error;
mod platform;
mod registry;

pub use config::RegistryConfig;
pub use error::{PlatformError, Result};
pub use platform::{FABRIC, FORGE, Platform, QUILT, SPIGOT, UNKNOWN};
pub use registry::PlatformRegistry;
