//! Type-erased member values.

use core::any::{Any, TypeId};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{MapError, MapResult};

type Erased = Box<dyn Any + Send>;

/// The value an extractor produced for one destination member.
///
/// The extracted value is kept as is and moved into the destination field
/// when the types line up: either the field has exactly the extracted type
/// `T`, or it is an `Option<T>` and receives `Some(value)`. Anything else goes
/// through the value's serialized form and is deserialized into the field type.
pub struct MemberValue {
    value: Erased,
    type_name: &'static str,
    option_type: TypeId,
    wrap_some: fn(Erased) -> Erased,
    to_json: fn(&(dyn Any + Send)) -> MapResult<Value>,
}

impl MemberValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Any + Send,
    {
        Self {
            value: Box::new(value),
            type_name: core::any::type_name::<T>(),
            option_type: TypeId::of::<Option<T>>(),
            wrap_some: wrap_some::<T>,
            to_json: to_json::<T>,
        }
    }

    /// Declared name of the extracted type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Serialized form of the extracted value.
    pub fn to_json(&self) -> MapResult<Value> {
        (self.to_json)(&*self.value)
    }

    /// Convert into the type of the destination field named `member`.
    pub fn into_member<F>(self, member: &str) -> MapResult<F>
    where
        F: DeserializeOwned + Any,
    {
        if self.option_type == TypeId::of::<F>() {
            return (self.wrap_some)(self.value)
                .downcast::<F>()
                .map(|wrapped| *wrapped)
                .map_err(|_| MapError::member_type(member, self.type_name, "option wrapping failed"));
        }

        match self.value.downcast::<F>() {
            Ok(exact) => Ok(*exact),
            Err(value) => {
                let json = (self.to_json)(&*value)?;
                serde_json::from_value::<F>(json)
                    .map_err(|e| MapError::member_type(member, self.type_name, e))
            }
        }
    }
}

impl core::fmt::Debug for MemberValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemberValue")
            .field("type", &self.type_name)
            .finish()
    }
}

fn wrap_some<T: Any + Send>(value: Erased) -> Erased {
    match value.downcast::<T>() {
        Ok(inner) => Box::new(Some(*inner)),
        Err(other) => other,
    }
}

fn to_json<T: Serialize + Any>(value: &(dyn Any + Send)) -> MapResult<Value> {
    match value.downcast_ref::<T>() {
        Some(inner) => Ok(serde_json::to_value(inner)?),
        None => Err(MapError::Serialization(format!(
            "value is not a {}",
            core::any::type_name::<T>()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Opaque {
        level: u8,
    }

    #[test]
    fn exact_type_is_moved() {
        let value = MemberValue::new(42_i64);
        assert_eq!(value.downcast_ref::<i64>(), Some(&42));
        assert_eq!(value.into_member::<i64>("Id").unwrap(), 42);
    }

    #[test]
    fn option_field_receives_some() {
        let value = MemberValue::new(Opaque { level: 3 });
        let field: Option<Opaque> = value.into_member("Level").unwrap();
        assert_eq!(field, Some(Opaque { level: 3 }));
    }

    #[test]
    fn optional_extraction_fills_optional_field() {
        let value = MemberValue::new(None::<i64>);
        assert_eq!(value.into_member::<Option<i64>>("Id").unwrap(), None);
    }

    #[test]
    fn other_types_convert_through_serialized_form() {
        let value = MemberValue::new("label");
        assert_eq!(value.to_json().unwrap(), json!("label"));
        assert_eq!(
            value.into_member::<Option<String>>("Label").unwrap().as_deref(),
            Some("label")
        );

        let widened = MemberValue::new(7_i32).into_member::<i64>("Id").unwrap();
        assert_eq!(widened, 7);
    }

    #[test]
    fn incompatible_types_are_reported_by_member() {
        match MemberValue::new("seven").into_member::<Option<i64>>("Id").unwrap_err() {
            MapError::MemberType { member, found, .. } => {
                assert_eq!(member, "Id");
                assert_eq!(found, "&str");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
