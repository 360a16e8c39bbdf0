use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;

/// The blob persisted per user, exactly one per account; each save
/// overwrites the previous one. Field names are bit-exact with the wire
/// format the web client has always sent (`carId`, `carName`, `totalPrice`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCustomization {
    pub car_id: String,
    pub car_name: String,
    pub config: Configuration,
    pub total_price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_client_payload() {
        let customization = StoredCustomization {
            car_id: "model-3".to_string(),
            car_name: "Model 3".to_string(),
            config: Configuration::default(),
            total_price: 3_236_170,
        };

        let value = serde_json::to_value(&customization).unwrap();
        assert_eq!(value["carId"], "model-3");
        assert_eq!(value["carName"], "Model 3");
        assert_eq!(value["totalPrice"], 3_236_170);
        assert_eq!(value["config"]["color"], "white");
    }

    #[test]
    fn accepts_historic_blob_with_unknown_option_ids() {
        // Blobs saved before an option was retired must still deserialize.
        let blob = serde_json::json!({
            "carId": "model-s",
            "carName": "Model S",
            "config": {
                "battery": "discontinued-pack",
                "color": "white",
                "wheels": "standard",
                "interior": "black",
                "autopilot": "none"
            },
            "totalPrice": 6_224_170
        });

        let parsed: StoredCustomization = serde_json::from_value(blob).unwrap();
        assert_eq!(parsed.config.battery, "discontinued-pack");
    }
}
