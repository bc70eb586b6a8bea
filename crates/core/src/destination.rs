//! Destination records.

use core::any::Any;

use crate::error::MapResult;
use crate::value::MemberValue;

/// A record that can be assembled member by member.
///
/// [`Mapper::map`](crate::Mapper::map) starts from `Self::default()` and calls
/// [`set_member`](Destination::set_member) once per configured member. Fields
/// that are never set keep whatever `Default` gave them.
///
/// Implement it with [`impl_destination!`](crate::impl_destination), which
/// pairs member names with fields.
pub trait Destination: Default + Any {
    /// Every member name `set_member` accepts.
    const MEMBERS: &'static [&'static str];

    /// Write `value` into the field named `member`.
    ///
    /// Fails with [`MapError::UnknownMember`](crate::MapError::UnknownMember)
    /// for names outside [`MEMBERS`](Destination::MEMBERS), or with
    /// [`MapError::MemberType`](crate::MapError::MemberType) when the value
    /// does not fit the field.
    fn set_member(&mut self, member: &str, value: MemberValue) -> MapResult<()>;

    fn has_member(member: &str) -> bool {
        Self::MEMBERS.contains(&member)
    }
}

/// Implement [`Destination`] by listing `"MemberName" => field` pairs.
///
/// ```ignore
/// impl_destination!(Tracker {
///     "Id" => id,
///     "IdVeiculo" => vehicle_id,
///     "Situacao" => status,
/// });
/// ```
///
/// Each field's type must be `DeserializeOwned + 'static`; the value is moved
/// in directly when it already has the field's type (or its `Option`).
#[macro_export]
macro_rules! impl_destination {
    ($t:ty { $($member:literal => $field:ident),* $(,)? }) => {
        impl $crate::Destination for $t {
            const MEMBERS: &'static [&'static str] = &[$($member),*];

            fn set_member(
                &mut self,
                member: &str,
                value: $crate::MemberValue,
            ) -> $crate::MapResult<()> {
                match member {
                    $(
                        $member => {
                            self.$field = value.into_member(member)?;
                            Ok(())
                        }
                    )*
                    _ => {
                        let _ = value;
                        Err($crate::MapError::UnknownMember {
                            destination: ::core::any::type_name::<$t>(),
                            member: member.to_string(),
                        })
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;

    #[derive(Debug, Default, PartialEq)]
    struct Reading {
        id: Option<i64>,
        label: String,
        untouched: u32,
    }

    crate::impl_destination!(Reading {
        "Id" => id,
        "Label" => label,
    });

    #[test]
    fn members_are_listed() {
        assert_eq!(Reading::MEMBERS, &["Id", "Label"]);
        assert!(Reading::has_member("Label"));
        assert!(!Reading::has_member("untouched"));
    }

    #[test]
    fn set_member_writes_only_the_named_field() {
        let mut reading = Reading {
            untouched: 9,
            ..Reading::default()
        };
        reading.set_member("Id", MemberValue::new(4_i64)).unwrap();
        reading
            .set_member("Label", MemberValue::new("north".to_string()))
            .unwrap();

        assert_eq!(
            reading,
            Reading {
                id: Some(4),
                label: "north".to_string(),
                untouched: 9,
            }
        );
    }

    #[test]
    fn unknown_member_is_rejected() {
        let mut reading = Reading::default();
        match reading.set_member("Nope", MemberValue::new(1)).unwrap_err() {
            MapError::UnknownMember { member, .. } => assert_eq!(member, "Nope"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
