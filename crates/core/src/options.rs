//! Engine options.

use serde::{Deserialize, Serialize};

/// Environment variable toggling [`MapperOptions::strict_members`].
pub const STRICT_MEMBERS_ENV: &str = "AUTOMAP_STRICT_MEMBERS";

/// Environment variable toggling [`MapperOptions::warn_on_duplicate`].
pub const WARN_ON_DUPLICATE_ENV: &str = "AUTOMAP_WARN_ON_DUPLICATE";

/// Behavioral switches for a registry and the mapper executing it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Reject member names the destination does not declare.
    ///
    /// When off, such members still run their extractors and the result is
    /// dropped.
    pub strict_members: bool,
    /// Emit a warning when a type pair is registered more than once.
    pub warn_on_duplicate: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            strict_members: true,
            warn_on_duplicate: true,
        }
    }
}

impl MapperOptions {
    /// Read options from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through an arbitrary key lookup.
    ///
    /// Unset keys keep their default. Unparseable values keep their default
    /// and are reported at `warn` level.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            strict_members: read_flag(&lookup, STRICT_MEMBERS_ENV, defaults.strict_members),
            warn_on_duplicate: read_flag(&lookup, WARN_ON_DUPLICATE_ENV, defaults.warn_on_duplicate),
        }
    }
}

fn read_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!(key, value = other, default, "unrecognized boolean option; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_keep_defaults() {
        let options = MapperOptions::from_lookup(lookup_from(&[]));
        assert_eq!(options, MapperOptions::default());
        assert!(options.strict_members);
        assert!(options.warn_on_duplicate);
    }

    #[test]
    fn flags_are_parsed_case_insensitively() {
        let options = MapperOptions::from_lookup(lookup_from(&[
            (STRICT_MEMBERS_ENV, "OFF"),
            (WARN_ON_DUPLICATE_ENV, " false "),
        ]));
        assert!(!options.strict_members);
        assert!(!options.warn_on_duplicate);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let options = MapperOptions::from_lookup(lookup_from(&[(STRICT_MEMBERS_ENV, "maybe")]));
        assert!(options.strict_members);
    }

    #[test]
    fn deserializes_partial_documents() {
        let options: MapperOptions =
            serde_json::from_str(r#"{ "strict_members": false }"#).unwrap();
        assert!(!options.strict_members);
        assert!(options.warn_on_duplicate);
    }
}
