//! Tracking device installed in a vehicle.

use automap_core::source::{field_opt, field_opt_as};
use automap_core::{MappingRegistry, impl_destination};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::TrackerStatus;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "IdVeiculo")]
    pub vehicle_id: Option<i64>,
    #[serde(rename = "NumeroSerial")]
    pub serial_number: Option<String>,
    #[serde(rename = "IdInstalacaoTipo")]
    pub installation_type_id: Option<i64>,
    #[serde(rename = "IdEquipamentoTipo")]
    pub equipment_type_id: Option<i64>,
    #[serde(rename = "IdPosicao")]
    pub position_id: Option<i64>,
    #[serde(rename = "Situacao")]
    pub status: Option<TrackerStatus>,
}

impl_destination!(Tracker {
    "Id" => id,
    "IdVeiculo" => vehicle_id,
    "NumeroSerial" => serial_number,
    "IdInstalacaoTipo" => installation_type_id,
    "IdEquipamentoTipo" => equipment_type_id,
    "IdPosicao" => position_id,
    "Situacao" => status,
});

impl Tracker {
    /// Maps the device and vehicle identifiers plus the nested status.
    ///
    /// Absent identifiers stay unset; an absent status still yields a default one.
    pub fn configure_mapping(registry: &mut MappingRegistry) {
        registry
            .create_map::<Value, Tracker>()
            .for_member("Id", |m| {
                m.map_from(|s| field_opt_as::<i64>(s, "Id"));
            })
            .for_member("IdVeiculo", |m| {
                m.map_from(|s| field_opt_as::<i64>(s, "IdVeiculo"));
            })
            .for_member("Situacao", |m| {
                m.map_nested_or_default::<TrackerStatus, _>(|s| field_opt(s, "Situacao"));
            });
    }
}
