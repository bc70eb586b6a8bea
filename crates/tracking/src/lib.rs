//! `automap-tracking` — vehicle tracking records mapped from raw payloads.
//!
//! The records here are plain serde structs. How each one is populated from a
//! decoded JSON payload lives next to the record, in its `configure_mapping`.

pub mod position;
pub mod sample;
pub mod status;
pub mod tracker;

use automap_core::{Mapper, MapperOptions, MappingRegistry};

pub use position::Position;
pub use sample::SAMPLE_POSITION;
pub use status::TrackerStatus;
pub use tracker::Tracker;

/// Register every tracking record's mapping.
pub fn configure(registry: &mut MappingRegistry) {
    Position::configure_mapping(registry);
    Tracker::configure_mapping(registry);
    TrackerStatus::configure_mapping(registry);
}

/// Build a mapper holding every tracking record's mapping.
pub fn bootstrap(options: MapperOptions) -> Mapper {
    Mapper::bootstrap_with(options, configure)
}
