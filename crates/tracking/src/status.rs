//! Equipment status reported by a tracker.

use automap_core::source::field_opt_as;
use automap_core::{MappingRegistry, impl_destination};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of a tracker's inputs.
///
/// Only the ignition flag is mapped from incoming payloads; every other
/// member stays unset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStatus {
    #[serde(rename = "Ignicao")]
    pub ignition: Option<bool>,
    #[serde(rename = "SituacaoEquipamento")]
    pub equipment_state: Option<i64>,
    #[serde(rename = "Texto")]
    pub text: Option<Value>,
    #[serde(rename = "Entrada1")]
    pub input1: Option<bool>,
    #[serde(rename = "Entrada2")]
    pub input2: Option<bool>,
    #[serde(rename = "Entrada3")]
    pub input3: Option<bool>,
    #[serde(rename = "Entrada4")]
    pub input4: Option<bool>,
    #[serde(rename = "Entrada5")]
    pub input5: Option<bool>,
    #[serde(rename = "Entrada6")]
    pub input6: Option<bool>,
    #[serde(rename = "Entrada7")]
    pub input7: Option<bool>,
    #[serde(rename = "Entrada8")]
    pub input8: Option<bool>,
}

impl_destination!(TrackerStatus {
    "Ignicao" => ignition,
    "SituacaoEquipamento" => equipment_state,
    "Texto" => text,
    "Entrada1" => input1,
    "Entrada2" => input2,
    "Entrada3" => input3,
    "Entrada4" => input4,
    "Entrada5" => input5,
    "Entrada6" => input6,
    "Entrada7" => input7,
    "Entrada8" => input8,
});

impl TrackerStatus {
    pub fn configure_mapping(registry: &mut MappingRegistry) {
        registry
            .create_map::<Value, TrackerStatus>()
            .for_member("Ignicao", |m| {
                m.map_from(|s| field_opt_as::<bool>(s, "Ignicao"));
            });
    }
}
