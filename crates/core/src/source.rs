//! Field access helpers for decoded JSON sources.
//!
//! Extractors usually read straight out of a [`serde_json::Value`]. These
//! helpers turn an absent or mistyped member into a [`MapError`] so that the
//! failure propagates out of `Mapper::map` instead of panicking.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{MapError, MapResult};

/// Borrow the member `name` of an object source.
///
/// Fails with [`MapError::MissingField`] when the source is not an object or
/// has no such member. An explicit `null` member is present.
pub fn field<'a>(source: &'a Value, name: &str) -> MapResult<&'a Value> {
    field_opt(source, name).ok_or_else(|| MapError::missing_field(name))
}

/// Read the member `name` of an object source as `T`.
pub fn field_as<T: DeserializeOwned>(source: &Value, name: &str) -> MapResult<T> {
    let value = field(source, name)?;
    T::deserialize(value).map_err(|e| MapError::invalid_field(name, e))
}

/// Borrow the member `name` if the source is an object that has it.
pub fn field_opt<'a>(source: &'a Value, name: &str) -> Option<&'a Value> {
    source.as_object().and_then(|object| object.get(name))
}

/// Read the member `name` as `T`, treating an absent or `null` member as `None`.
///
/// A present member of the wrong type is still an error.
pub fn field_opt_as<T: DeserializeOwned>(source: &Value, name: &str) -> MapResult<Option<T>> {
    match field_opt(source, name) {
        Some(value) => {
            Option::<T>::deserialize(value).map_err(|e| MapError::invalid_field(name, e))
        }
        None => Ok(None),
    }
}

/// Borrow a nested member addressed by a dotted path (`"Rastreador.Situacao"`).
///
/// The error names the full path up to the segment that was missing.
pub fn path<'a>(source: &'a Value, dotted: &str) -> MapResult<&'a Value> {
    let mut current = source;
    let mut walked = 0usize;

    for segment in dotted.split('.') {
        walked += segment.len();
        current = field(current, segment).map_err(|_| MapError::missing_field(&dotted[..walked]))?;
        walked += 1;
    }

    Ok(current)
}

/// Read a nested member addressed by a dotted path as `T`.
pub fn path_as<T: DeserializeOwned>(source: &Value, dotted: &str) -> MapResult<T> {
    let value = path(source, dotted)?;
    T::deserialize(value).map_err(|e| MapError::invalid_field(dotted, e))
}
