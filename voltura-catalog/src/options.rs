use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// A configurable dimension of a vehicle.
///
/// Wire names match the customization blob the web client sends:
/// the paint category serializes as `color`, battery as `battery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Battery,
    #[serde(rename = "color")]
    Paint,
    Wheels,
    Interior,
    Autopilot,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Battery,
        Category::Paint,
        Category::Wheels,
        Category::Interior,
        Category::Autopilot,
    ];

    /// Field name used in the serialized configuration.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::Battery => "battery",
            Category::Paint => "color",
            Category::Wheels => "wheels",
            Category::Interior => "interior",
            Category::Autopilot => "autopilot",
        }
    }

    /// Human-facing section title.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Battery => "Range",
            Category::Paint => "Paint",
            Category::Wheels => "Wheels",
            Category::Interior => "Interior",
            Category::Autopilot => "Autopilot",
        }
    }
}

/// One selectable choice within a category.
///
/// `metadata` carries display attributes (paint swatch hex, battery range,
/// acceleration) as opaque JSON so the option list stays uniform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarOption {
    pub id: String,
    pub label: String,
    pub price_delta: i64,
    pub metadata: serde_json::Value,
}

impl CarOption {
    fn new(id: &str, label: &str, price_delta: i64, metadata: serde_json::Value) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            price_delta,
            metadata,
        }
    }
}

/// The full option catalog, one ordered list per category.
///
/// Defined at startup and immutable afterwards. Price deltas are in the
/// smallest currency unit, same as vehicle base prices.
pub struct OptionCatalog {
    options: HashMap<Category, Vec<CarOption>>,
}

impl OptionCatalog {
    pub fn new() -> Self {
        let mut options = HashMap::new();

        options.insert(
            Category::Battery,
            vec![
                CarOption::new(
                    "standard",
                    "Standard Range",
                    0,
                    json!({"range": "272 mi", "acceleration": "5.8s"}),
                ),
                CarOption::new(
                    "long-range",
                    "Long Range AWD",
                    747_000,
                    json!({"range": "358 mi", "acceleration": "4.2s"}),
                ),
                CarOption::new(
                    "performance",
                    "Performance",
                    1_660_000,
                    json!({"range": "315 mi", "acceleration": "3.1s"}),
                ),
            ],
        );

        options.insert(
            Category::Paint,
            vec![
                CarOption::new("white", "Pearl White Multi-Coat", 0, json!({"hex": "#ffffff"})),
                CarOption::new("black", "Solid Black", 83_000, json!({"hex": "#1a1a1a"})),
                CarOption::new("blue", "Deep Blue Metallic", 83_000, json!({"hex": "#1e3a8a"})),
                CarOption::new("red", "Red Multi-Coat", 166_000, json!({"hex": "#dc2626"})),
                CarOption::new("gray", "Midnight Silver Metallic", 83_000, json!({"hex": "#6b7280"})),
            ],
        );

        options.insert(
            Category::Wheels,
            vec![
                CarOption::new("standard", "18\" Aero Wheels", 0, json!({})),
                CarOption::new("sport", "19\" Sport Wheels", 124_500, json!({})),
                CarOption::new("performance", "20\" \u{00dc}berturbine Wheels", 207_500, json!({})),
            ],
        );

        options.insert(
            Category::Interior,
            vec![
                CarOption::new("black", "All Black", 0, json!({})),
                CarOption::new("white", "Black and White", 83_000, json!({})),
                CarOption::new("cream", "Cream", 83_000, json!({})),
            ],
        );

        options.insert(
            Category::Autopilot,
            vec![
                CarOption::new("none", "Basic Autopilot", 0, json!({})),
                CarOption::new("enhanced", "Enhanced Autopilot", 498_000, json!({})),
                CarOption::new("fsd", "Full Self-Driving Capability", 996_000, json!({})),
            ],
        );

        Self { options }
    }

    pub fn options(&self, category: Category) -> &[CarOption] {
        self.options.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, category: Category, option_id: &str) -> Option<&CarOption> {
        self.options(category).iter().find(|o| o.id == option_id)
    }

    /// Price contribution of the given selection. An id that does not exist
    /// in the category's list contributes 0 rather than failing, so a stale
    /// or mistyped selection never blocks a quote.
    pub fn price_delta(&self, category: Category, option_id: &str) -> i64 {
        self.find(category, option_id).map(|o| o.price_delta).unwrap_or(0)
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_options() {
        let catalog = OptionCatalog::new();
        for category in Category::ALL {
            assert!(!catalog.options(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn known_option_resolves() {
        let catalog = OptionCatalog::new();
        assert_eq!(catalog.price_delta(Category::Battery, "long-range"), 747_000);
        assert_eq!(catalog.price_delta(Category::Paint, "white"), 0);
    }

    #[test]
    fn unknown_option_prices_as_zero() {
        let catalog = OptionCatalog::new();
        assert_eq!(catalog.price_delta(Category::Wheels, "chrome-spinners"), 0);
        assert!(catalog.find(Category::Wheels, "chrome-spinners").is_none());
    }

    #[test]
    fn category_wire_names_match_client_fields() {
        assert_eq!(Category::Paint.wire_name(), "color");
        assert_eq!(
            serde_json::to_value(Category::Paint).unwrap(),
            serde_json::Value::String("color".into())
        );
        assert_eq!(
            serde_json::to_value(Category::Battery).unwrap(),
            serde_json::Value::String("battery".into())
        );
    }
}
