//! Strongly-typed registry keys.

use core::any::{Any, TypeId};
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

/// Identity of a source or destination type.
///
/// Equality and hashing use the [`TypeId`] only; the declared name is carried
/// for logs and error messages. Two keys computed for the same type, whether
/// from the type itself or from a prototype value, are always equal.
#[derive(Debug, Copy, Clone)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for a type named at the call site.
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Key for the static type of a prototype value.
    ///
    /// The value itself is never inspected; only its type participates.
    pub fn of_val<T: ?Sized + Any>(_prototype: &T) -> Self {
        Self::of::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified declared name (e.g. `serde_json::value::Value`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared name with every module path stripped, generic arguments
    /// included (e.g. `Vec<Value>` for `alloc::vec::Vec<serde_json::value::Value>`).
    pub fn short_name(&self) -> Cow<'static, str> {
        if !self.name.contains("::") {
            return Cow::Borrowed(self.name);
        }

        let mut short = String::with_capacity(self.name.len());
        let mut rest = self.name;
        while let Some(at) = rest.find(is_name_delimiter) {
            short.push_str(last_segment(&rest[..at]));
            let delimiter_len = rest[at..].chars().next().map_or(1, char::len_utf8);
            short.push_str(&rest[at..at + delimiter_len]);
            rest = &rest[at + delimiter_len..];
        }
        short.push_str(last_segment(rest));
        Cow::Owned(short)
    }
}

fn is_name_delimiter(c: char) -> bool {
    matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';')
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.short_name())
    }
}
