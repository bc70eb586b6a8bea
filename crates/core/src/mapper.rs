//! Mapping executor.
//!
//! A [`Mapper`] owns a frozen [`MappingRegistry`] and turns source values into
//! freshly built destination records.
//!
//! ## Assembly
//!
//! For every call to [`Mapper::map`]:
//!
//! 1. `D::default()` is constructed.
//! 2. The `S -> D` configuration is resolved. If there is none, the default is
//!    returned unchanged (unconfigured pairs are a no-op, not an error).
//! 3. Each configured member's extractor chain runs against the source, in
//!    registration order, and the resulting value is written straight into the
//!    default instance through [`Destination::set_member`].
//!
//! Fields without a configuration are never touched, so they keep exactly
//! what `D::default()` put there.
//!
//! ## Sharing
//!
//! The registry is frozen once the mapper is built, so a `Mapper` is cheap to
//! clone and safe to use from many threads without locking.

use core::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::destination::Destination;
use crate::error::{MapError, MapResult};
use crate::key::TypeKey;
use crate::options::MapperOptions;
use crate::registry::MappingRegistry;

#[derive(Debug, Clone, Default)]
pub struct Mapper {
    registry: Arc<MappingRegistry>,
}

impl Mapper {
    pub fn new(registry: MappingRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Build a mapper by letting `setup` register every configuration.
    ///
    /// `setup` runs synchronously, exactly once, before the registry is frozen.
    pub fn bootstrap<F>(setup: F) -> Self
    where
        F: FnOnce(&mut MappingRegistry),
    {
        Self::bootstrap_with(MapperOptions::default(), setup)
    }

    pub fn bootstrap_with<F>(options: MapperOptions, setup: F) -> Self
    where
        F: FnOnce(&mut MappingRegistry),
    {
        let mut registry = MappingRegistry::with_options(options);
        setup(&mut registry);
        tracing::debug!(pairs = registry.len(), "mapper bootstrapped");
        Self::new(registry)
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// Map `source` into a new `D`.
    ///
    /// Extractor failures are returned unchanged; assembly stops at the first
    /// failing member.
    pub fn map<S, D>(&self, source: &S) -> MapResult<D>
    where
        S: Any,
        D: Destination,
    {
        let mut instance = D::default();

        let Some(configuration) = self.registry.resolve::<S, D>() else {
            tracing::trace!(
                source = TypeKey::of::<S>().name(),
                destination = TypeKey::of::<D>().name(),
                "no mapping configured; returning default"
            );
            return Ok(instance);
        };

        let destination = configuration.destination();

        for (member, member_configuration) in configuration.members() {
            let Some(value) = member_configuration.extract(source, self)? else {
                continue;
            };

            if !D::has_member(member) {
                if self.registry.options().strict_members {
                    return Err(MapError::UnknownMember {
                        destination: destination.name(),
                        member: member.clone(),
                    });
                }
                tracing::debug!(destination = %destination, member = member.as_str(), "unknown member skipped");
                continue;
            }

            instance.set_member(member, value)?;
            tracing::trace!(destination = %destination, member = member.as_str(), "member written");
        }

        Ok(instance)
    }

    /// Map a decoded JSON value into a new `D`.
    pub fn map_value<D: Destination>(&self, source: &Value) -> MapResult<D> {
        self.map::<Value, D>(source)
    }
}
