//! Fluent per-type-pair mapping configuration.

use core::any::Any;
use core::marker::PhantomData;

use crate::key::TypeKey;
use crate::member::MemberConfiguration;

/// Describes how a destination `D` is built from a source `S`.
///
/// Members are kept in registration order. Configuring the same member name
/// twice appends a second entry rather than replacing the first; both are
/// applied when mapping, so the later one determines the final value.
pub struct MappingConfiguration<S, D> {
    source: TypeKey,
    destination: TypeKey,
    members: Vec<(String, MemberConfiguration<S>)>,
    _destination: PhantomData<fn() -> D>,
}

impl<S: Any, D: Any> MappingConfiguration<S, D> {
    pub fn new() -> Self {
        Self {
            source: TypeKey::of::<S>(),
            destination: TypeKey::of::<D>(),
            members: Vec::new(),
            _destination: PhantomData,
        }
    }

    pub fn source(&self) -> TypeKey {
        self.source
    }

    pub fn destination(&self) -> TypeKey {
        self.destination
    }

    /// Configure one destination member.
    ///
    /// `configure` runs immediately against a fresh [`MemberConfiguration`];
    /// the result is appended under `member` and `self` is returned so calls
    /// can be chained.
    ///
    /// ```ignore
    /// registry
    ///     .create_map::<Value, Tracker>()
    ///     .for_member("Id", |m| { m.map_from(|s| field_as::<i64>(s, "Id")); })
    ///     .for_member("IdVeiculo", |m| { m.map_from(|s| field_as::<i64>(s, "IdVeiculo")); });
    /// ```
    pub fn for_member<F>(&mut self, member: impl Into<String>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut MemberConfiguration<S>),
    {
        let mut configuration = MemberConfiguration::new();
        configure(&mut configuration);
        self.members.push((member.into(), configuration));
        self
    }

    /// Configured members in registration order.
    pub fn members(&self) -> &[(String, MemberConfiguration<S>)] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: Any, D: Any> Default for MappingConfiguration<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D> core::fmt::Debug for MappingConfiguration<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MappingConfiguration")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field(
                "members",
                &self.members.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::field_as;
    use serde_json::Value;

    #[derive(Default)]
    struct Target;

    fn names<S: Any, D: Any>(config: &MappingConfiguration<S, D>) -> Vec<&str> {
        config.members().iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn captures_type_keys() {
        let config = MappingConfiguration::<Value, Target>::new();
        assert_eq!(config.source(), TypeKey::of::<Value>());
        assert_eq!(config.destination(), TypeKey::of::<Target>());
        assert!(config.is_empty());
    }

    #[test]
    fn configure_callback_runs_immediately() {
        let mut config = MappingConfiguration::<Value, Target>::new();
        config.for_member("Id", |m| {
            m.map_from(|s| field_as::<i64>(s, "Id"))
                .map_from(|s| field_as::<i64>(s, "IdEvento"));
        });

        let (name, member) = &config.members()[0];
        assert_eq!(name, "Id");
        assert_eq!(member.len(), 2);
    }

    #[test]
    fn chained_members_keep_registration_order() {
        let mut config = MappingConfiguration::<Value, Target>::new();
        config
            .for_member("Rastreador", |m| {
                m.map_from(|_s| Ok(1));
            })
            .for_member("Id", |m| {
                m.map_from(|_s| Ok(2));
            })
            .for_member("EventoDatahora", |m| {
                m.map_from(|_s| Ok(3));
            });

        assert_eq!(names(&config), vec!["Rastreador", "Id", "EventoDatahora"]);
    }

    #[test]
    fn duplicate_member_names_are_appended() {
        let mut config = MappingConfiguration::<Value, Target>::new();
        config
            .for_member("Id", |m| {
                m.map_from(|_s| Ok(1));
            })
            .for_member("Id", |m| {
                m.map_from(|_s| Ok(2));
            });

        assert_eq!(config.len(), 2);
        assert_eq!(names(&config), vec!["Id", "Id"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: members come back exactly as configured, in order.
            #[test]
            fn members_round_trip(members in prop::collection::vec("[A-Z][A-Za-z0-9]{0,15}", 0..24)) {
                let mut config = MappingConfiguration::<Value, Target>::new();
                for name in &members {
                    config.for_member(name.clone(), |m| {
                        m.map_from(|_s| Ok(()));
                    });
                }

                prop_assert_eq!(config.len(), members.len());
                prop_assert_eq!(names(&config), members.iter().map(String::as_str).collect::<Vec<_>>());
            }
        }
    }
}
