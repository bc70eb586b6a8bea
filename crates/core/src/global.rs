//! Process-wide mapper.
//!
//! Most code should build a [`Mapper`] and pass it around. This module exists
//! for entry points that want a single shared instance bootstrapped once at
//! startup.
//!
//! Until [`initialize`] succeeds, [`map`] runs against an empty registry and
//! therefore returns `D::default()` for every call.

use core::any::Any;
use std::sync::{LazyLock, OnceLock};

use crate::destination::Destination;
use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::options::MapperOptions;
use crate::registry::MappingRegistry;

static GLOBAL: OnceLock<Mapper> = OnceLock::new();
static EMPTY: LazyLock<Mapper> = LazyLock::new(Mapper::default);

/// Bootstrap the process-wide mapper with default options.
pub fn initialize<F>(setup: F) -> MapResult<&'static Mapper>
where
    F: FnOnce(&mut MappingRegistry),
{
    initialize_with(MapperOptions::default(), setup)
}

/// Bootstrap the process-wide mapper.
///
/// Fails with [`MapError::AlreadyInitialized`] if a mapper is already installed;
/// the installed one is left untouched.
pub fn initialize_with<F>(options: MapperOptions, setup: F) -> MapResult<&'static Mapper>
where
    F: FnOnce(&mut MappingRegistry),
{
    if GLOBAL.get().is_some() {
        return Err(MapError::AlreadyInitialized);
    }

    GLOBAL
        .set(Mapper::bootstrap_with(options, setup))
        .map_err(|_| MapError::AlreadyInitialized)?;

    tracing::info!("process-wide mapper initialized");
    Ok(mapper())
}

/// The process-wide mapper, or an empty one before initialization.
pub fn mapper() -> &'static Mapper {
    GLOBAL.get().unwrap_or_else(|| &*EMPTY)
}

pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Map through the process-wide mapper.
pub fn map<S, D>(source: &S) -> MapResult<D>
where
    S: Any,
    D: Destination,
{
    mapper().map(source)
}
