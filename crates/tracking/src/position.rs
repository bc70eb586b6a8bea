//! Position event: the top-level record of a tracking payload.

use automap_core::source::{field_opt, field_opt_as};
use automap_core::{MapError, MapResult, MappingRegistry, impl_destination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tracker::Tracker;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "IdEvento")]
    pub event_id: Option<i64>,
    #[serde(rename = "EventoDatahora")]
    pub event_time: Option<DateTime<Utc>>,
    #[serde(rename = "Rastreador")]
    pub tracker: Option<Tracker>,
}

impl_destination!(Position {
    "Id" => id,
    "IdEvento" => event_id,
    "EventoDatahora" => event_time,
    "Rastreador" => tracker,
});

impl Position {
    pub fn configure_mapping(registry: &mut MappingRegistry) {
        registry
            .create_map::<Value, Position>()
            .for_member("Id", |m| {
                m.map_from(|s| field_opt_as::<i64>(s, "Id"));
            })
            .for_member("IdEvento", |m| {
                m.map_from(|s| field_opt_as::<i64>(s, "IdEvento"));
            })
            .for_member("EventoDatahora", |m| {
                m.map_from(|s| parse_timestamp(s, "EventoDatahora"));
            })
            .for_member("Rastreador", |m| {
                m.map_nested_or_default::<Tracker, _>(|s| field_opt(s, "Rastreador"));
            });
    }
}

/// Read an RFC 3339 timestamp member and normalize it to UTC.
///
/// An absent or `null` member reads as `None`.
pub fn parse_timestamp(source: &Value, name: &str) -> MapResult<Option<DateTime<Utc>>> {
    let Some(raw) = field_opt_as::<String>(source, name)? else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| Some(ts.with_timezone(&Utc)))
        .map_err(|e| MapError::invalid_field(name, e))
}
