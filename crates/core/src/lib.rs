//! `automap-core` — declarative object-to-object mapping.
//!
//! Configurations are registered once per (source, destination) type pair and
//! then executed by a [`Mapper`]:
//!
//! ```ignore
//! use automap_core::{Mapper, impl_destination, source::field_as};
//! use serde_json::Value;
//!
//! #[derive(Debug, Default)]
//! struct Tracker {
//!     id: Option<i64>,
//! }
//!
//! impl_destination!(Tracker { "Id" => id });
//!
//! let mapper = Mapper::bootstrap(|registry| {
//!     registry
//!         .create_map::<Value, Tracker>()
//!         .for_member("Id", |m| { m.map_from(|s| field_as::<i64>(s, "Id")); });
//! });
//!
//! let tracker: Tracker = mapper.map_value(&decoded)?;
//! ```
//!
//! Every destination member must be configured explicitly; there is no
//! name-convention matching, reverse mapping or collection mapping.

pub mod configuration;
pub mod destination;
pub mod error;
pub mod global;
pub mod key;
pub mod mapper;
pub mod member;
pub mod options;
pub mod registry;
pub mod source;
pub mod value;

pub use configuration::MappingConfiguration;
pub use destination::Destination;
pub use error::{MapError, MapResult};
pub use key::TypeKey;
pub use mapper::Mapper;
pub use member::{Extractor, MemberConfiguration};
pub use options::MapperOptions;
pub use registry::MappingRegistry;
pub use value::MemberValue;
