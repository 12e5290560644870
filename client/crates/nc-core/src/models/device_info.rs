use serde::{Deserialize, Serialize};

/// Hardware and OS description supplied by the device.
///
/// Every field may be unknown; unknown fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub brand: Option<String>,
    pub model_name: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
}

impl DeviceInfo {
    pub fn new(
        brand: Option<String>,
        model_name: Option<String>,
        os_name: Option<String>,
        os_version: Option<String>,
    ) -> Self {
        Self {
            brand: non_empty(brand),
            model_name: non_empty(model_name),
            os_name: non_empty(os_name),
            os_version: non_empty(os_version),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
