use serde::Deserialize;
use serde_json::Value;

/// Feature flags reported by the device firmware on `/api/v1/features`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Features {
    pub security: bool,
    pub mqtt: bool,
    pub ntp: bool,
    pub upload_firmware: bool,
    pub download_firmware: bool,
    pub sleep: bool,
    pub battery: bool,
    pub analytics: bool,
    pub event_use_json: bool,
    pub firmware_version: String,
    pub firmware_name: String,
    pub firmware_built_target: String,
}

impl Features {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Features::deserialize(value)
    }
}
