use serde::Deserialize;

/// Date/estimate flag as the provider sends it: older endpoints use the
/// strings "true"/"false", newer ones a real boolean
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ActualFlag {
    Bool(bool),
    Text(String),
}

/// Provider date field: the raw timestamp plus whether it is actual or estimated
#[derive(Debug, Clone, Deserialize)]
pub struct DateField {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "IsActual")]
    pub is_actual: ActualFlag,
}

/// Transshipment port visited between origin and destination
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TsPort {
    pub port: String,
    pub arrival_date: DateField,
    pub departure_date: DateField,
}

/// Sub-container listed when the lookup was by bill-of-lading reference
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlContainer {
    pub container_code: String,
    #[serde(rename = "ContainerTEU")]
    pub container_teu: String,
    pub container_type: String,
}

/// Tracking provider container-info response. One snapshot per lookup, no
/// identity beyond the container number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerInfo {
    pub status: String,
    pub status_id: i64,
    pub reference_no: Option<String>,
    #[serde(rename = "BLReferenceNo")]
    pub bl_reference_no: Option<String>,
    pub shipping_line: Option<String>,
    pub container_number: String,
    #[serde(rename = "ContainerTEU")]
    pub container_teu: Option<String>,
    pub container_type: Option<String>,
    pub from_country: Option<String>,
    pub pol: Option<String>,
    pub to_country: Option<String>,
    pub pod: Option<String>,
    pub loading_date: Option<DateField>,
    pub departure_date: Option<DateField>,
    #[serde(rename = "TSPorts")]
    pub ts_ports: Option<Vec<TsPort>>,
    pub vessel: Option<String>,
    #[serde(rename = "VesselIMO")]
    pub vessel_imo: Option<String>,
    pub vessel_latitude: Option<String>,
    pub vessel_longitude: Option<String>,
    pub vessel_voyage: Option<String>,
    pub arrival_date: Option<DateField>,
    pub discharge_date: Option<DateField>,
    #[serde(rename = "FirstETA")]
    pub first_eta: Option<String>,
    /// Delay text, not a date, despite the provider's field name
    #[serde(rename = "ETA")]
    pub eta: Option<String>,
    pub gate_in_date: Option<String>,
    pub gate_out_date: Option<String>,
    pub empty_return_date: Option<String>,
    /// Provider spells it "Formated" on the wire
    pub formated_transit_time: Option<String>,
    pub co2_emission: Option<String>,
    pub live_map_url: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "BLContainerCount")]
    pub bl_container_count: Option<u32>,
    #[serde(rename = "BLContainers")]
    pub bl_containers: Option<Vec<BlContainer>>,
}
