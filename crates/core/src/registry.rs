//! Mapping registry keyed by (source, destination) type identity.
//!
//! The registry is a two-level table: source [`TypeKey`] → destination
//! [`TypeKey`] → [`MappingConfiguration`]. Lookups are exact identity matches;
//! there is no subtype- or trait-aware resolution.
//!
//! ## Duplicate registration
//!
//! Registering a pair that already exists does **not** replace or extend the
//! stored configuration. The caller still receives a fresh configuration to
//! chain on, but it is *detached*: it is kept alive by the registry and never
//! consulted. Anything configured on it has no effect on mapping. A warning is
//! logged for every such call unless [`MapperOptions::warn_on_duplicate`] is off.

use core::any::Any;
use std::collections::HashMap;

use crate::configuration::MappingConfiguration;
use crate::key::TypeKey;
use crate::options::MapperOptions;

type ErasedConfiguration = Box<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct MappingRegistry {
    maps: HashMap<TypeKey, HashMap<TypeKey, ErasedConfiguration>>,
    detached: Vec<ErasedConfiguration>,
    options: MapperOptions,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MapperOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Register a `S -> D` mapping and return its configuration for chaining.
    ///
    /// The first registration of a pair is stored. Later registrations of the
    /// same pair return a detached configuration (see module docs).
    pub fn create_map<S: Any, D: Any>(&mut self) -> &mut MappingConfiguration<S, D> {
        let source = TypeKey::of::<S>();
        let destination = TypeKey::of::<D>();
        let configuration: ErasedConfiguration = Box::new(MappingConfiguration::<S, D>::new());

        let by_destination = self.maps.entry(source).or_default();

        let slot = if by_destination.contains_key(&destination) {
            if self.options.warn_on_duplicate {
                tracing::warn!(
                    source = source.name(),
                    destination = destination.name(),
                    "mapping already registered; new configuration is detached and will be ignored"
                );
            }
            self.detached.push(configuration);
            self.detached.last_mut()
        } else {
            tracing::debug!(
                source = source.name(),
                destination = destination.name(),
                "registering mapping"
            );
            Some(by_destination.entry(destination).or_insert(configuration))
        };

        // The slot was filled with a `MappingConfiguration<S, D>` a few lines up.
        slot.and_then(|erased| erased.downcast_mut::<MappingConfiguration<S, D>>())
            .expect("configuration stored under its own type keys")
    }

    /// Register a mapping whose source identity is taken from a prototype value.
    pub fn create_map_for<S: Any, D: Any>(
        &mut self,
        _prototype: &S,
    ) -> &mut MappingConfiguration<S, D> {
        self.create_map::<S, D>()
    }

    /// Look up the configuration stored for `S -> D`.
    pub fn resolve<S: Any, D: Any>(&self) -> Option<&MappingConfiguration<S, D>> {
        self.maps
            .get(&TypeKey::of::<S>())?
            .get(&TypeKey::of::<D>())?
            .downcast_ref::<MappingConfiguration<S, D>>()
    }

    /// Look up using a prototype value's identity for the source.
    pub fn resolve_for<S: Any, D: Any>(&self, _prototype: &S) -> Option<&MappingConfiguration<S, D>> {
        self.resolve::<S, D>()
    }

    pub fn contains<S: Any, D: Any>(&self) -> bool {
        self.maps
            .get(&TypeKey::of::<S>())
            .is_some_and(|by_destination| by_destination.contains_key(&TypeKey::of::<D>()))
    }

    /// Number of registered type pairs.
    pub fn len(&self) -> usize {
        self.maps.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of configurations handed out for duplicate registrations.
    pub fn detached_len(&self) -> usize {
        self.detached.len()
    }
}

impl core::fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let pairs: Vec<String> = self
            .maps
            .iter()
            .flat_map(|(source, by_destination)| {
                by_destination
                    .keys()
                    .map(move |destination| format!("{source} -> {destination}"))
            })
            .collect();

        f.debug_struct("MappingRegistry")
            .field("pairs", &pairs)
            .field("detached", &self.detached.len())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::field_as;
    use serde_json::{Value, json};

    #[derive(Default)]
    struct Position;

    #[derive(Default)]
    struct Tracker;

    struct PositionShape;

    fn member_names<S: Any, D: Any>(config: &MappingConfiguration<S, D>) -> Vec<String> {
        config.members().iter().map(|(n, _)| n.clone()).collect()
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = MappingRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve::<Value, Position>().is_none());
    }

    #[test]
    fn registered_members_resolve_in_order() {
        let mut registry = MappingRegistry::new();
        registry
            .create_map::<Value, Position>()
            .for_member("Id", |m| {
                m.map_from(|s| field_as::<i64>(s, "Id"));
            })
            .for_member("IdEvento", |m| {
                m.map_from(|s| field_as::<i64>(s, "IdEvento"));
            });

        let config = registry.resolve::<Value, Position>().expect("registered");
        assert_eq!(member_names(config), vec!["Id", "IdEvento"]);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains::<Value, Position>());
    }

    #[test]
    fn pairs_are_independent() {
        let mut registry = MappingRegistry::new();
        registry.create_map::<Value, Position>().for_member("Id", |_| {});
        registry.create_map::<Value, Tracker>();
        registry.create_map::<PositionShape, Position>();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.resolve::<Value, Position>().unwrap().len(), 1);
        assert!(registry.resolve::<Value, Tracker>().unwrap().is_empty());
        assert!(registry.resolve::<PositionShape, Position>().unwrap().is_empty());
        assert!(registry.resolve::<PositionShape, Tracker>().is_none());
    }

    #[test]
    fn duplicate_registration_is_inert() {
        let mut registry = MappingRegistry::new();
        registry.create_map::<Value, Position>();

        let second = registry.create_map::<Value, Position>();
        second.for_member("Id", |m| {
            m.map_from(|s| field_as::<i64>(s, "Id"));
        });
        assert_eq!(second.len(), 1);

        let stored = registry.resolve::<Value, Position>().unwrap();
        assert!(stored.is_empty());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.detached_len(), 1);
    }

    #[test]
    fn duplicate_registration_keeps_first_members() {
        let mut registry = MappingRegistry::with_options(MapperOptions {
            warn_on_duplicate: false,
            ..MapperOptions::default()
        });
        registry.create_map::<Value, Position>().for_member("Id", |_| {});
        registry
            .create_map::<Value, Position>()
            .for_member("IdEvento", |_| {});

        let stored = registry.resolve::<Value, Position>().unwrap();
        assert_eq!(member_names(stored), vec!["Id"]);
    }

    #[test]
    fn prototype_and_decoded_value_hit_the_same_entry() {
        let mut registry = MappingRegistry::new();
        let placeholder = Value::Null;
        registry
            .create_map_for::<_, Position>(&placeholder)
            .for_member("Id", |_| {});

        let decoded = json!({ "Id": 1 });
        let config = registry.resolve_for::<_, Position>(&decoded).expect("same identity");
        assert_eq!(config.len(), 1);
        assert!(registry.resolve::<Value, Position>().is_some());
    }
}
