use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Sedan,
    Suv,
    Truck,
    Roadster,
}

/// Immutable catalog entry. `base_price` is in the smallest currency unit
/// and is the read-only input to price calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub base_price: i64,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub range: String,
    pub acceleration: String,
    pub battery_size: String,
    pub top_speed: String,
    pub description: String,
    pub features: Vec<String>,
}

pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        let vehicles = vec![
            Vehicle {
                id: "model-s".to_string(),
                name: "Model S".to_string(),
                base_price: 6_224_170,
                vehicle_type: VehicleType::Sedan,
                range: "405 mi".to_string(),
                acceleration: "1.99 s".to_string(),
                battery_size: "100 kWh".to_string(),
                top_speed: "200 mph".to_string(),
                description: "Flagship luxury sedan with maximum comfort and convenience"
                    .to_string(),
                features: vec![
                    "Autopilot Included".to_string(),
                    "Premium Interior".to_string(),
                    "Glass Roof".to_string(),
                    "Advanced Safety".to_string(),
                ],
            },
            Vehicle {
                id: "model-3".to_string(),
                name: "Model 3".to_string(),
                base_price: 3_236_170,
                vehicle_type: VehicleType::Sedan,
                range: "358 mi".to_string(),
                acceleration: "3.1 s".to_string(),
                battery_size: "82 kWh".to_string(),
                top_speed: "162 mph".to_string(),
                description: "High performance sedan designed for every driver".to_string(),
                features: vec![
                    "Autopilot".to_string(),
                    "Full Self-Driving Capability".to_string(),
                    "Premium Audio".to_string(),
                    "Smartphone Integration".to_string(),
                ],
            },
            Vehicle {
                id: "model-x".to_string(),
                name: "Model X".to_string(),
                base_price: 8_174_670,
                vehicle_type: VehicleType::Suv,
                range: "348 mi".to_string(),
                acceleration: "2.5 s".to_string(),
                battery_size: "100 kWh".to_string(),
                top_speed: "163 mph".to_string(),
                description: "Premium SUV with falcon wing doors and unparalleled performance"
                    .to_string(),
                features: vec![
                    "Falcon Wing Doors".to_string(),
                    "7-Seat Configuration".to_string(),
                    "Towing Capacity".to_string(),
                    "Bioweapon Defense Mode".to_string(),
                ],
            },
            Vehicle {
                id: "model-y".to_string(),
                name: "Model Y".to_string(),
                base_price: 3_962_420,
                vehicle_type: VehicleType::Suv,
                range: "330 mi".to_string(),
                acceleration: "3.5 s".to_string(),
                battery_size: "81 kWh".to_string(),
                top_speed: "155 mph".to_string(),
                description: "Versatile SUV with maximum utility and all-wheel drive".to_string(),
                features: vec![
                    "All-Wheel Drive".to_string(),
                    "Glass Roof".to_string(),
                    "HEPA Air Filtration".to_string(),
                    "Third Row Seating Available".to_string(),
                ],
            },
            Vehicle {
                id: "cybertruck".to_string(),
                name: "Cybertruck".to_string(),
                base_price: 8_000_370,
                vehicle_type: VehicleType::Truck,
                range: "340 mi".to_string(),
                acceleration: "2.7 s".to_string(),
                battery_size: "123 kWh".to_string(),
                top_speed: "130 mph".to_string(),
                description: "Ultra-hard 30X cold-rolled stainless steel exoskeleton".to_string(),
                features: vec![
                    "Ultra-Hard Exoskeleton".to_string(),
                    "11,000+ lbs Towing".to_string(),
                    "Armor Glass".to_string(),
                    "Air Suspension".to_string(),
                ],
            },
            Vehicle {
                id: "roadster".to_string(),
                name: "Roadster".to_string(),
                base_price: 16_600_000,
                vehicle_type: VehicleType::Roadster,
                range: "620 mi".to_string(),
                acceleration: "1.9 s".to_string(),
                battery_size: "200 kWh".to_string(),
                top_speed: "250+ mph".to_string(),
                description: "The quickest car in the world, with record-setting performance"
                    .to_string(),
                features: vec![
                    "SpaceX Package".to_string(),
                    "Cold Gas Thrusters".to_string(),
                    "Removable Glass Roof".to_string(),
                    "Track Mode".to_string(),
                ],
            },
        ];

        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::new()
    }
}
