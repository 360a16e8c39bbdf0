use serde::{Deserialize, Serialize};

use crate::options::Category;

/// The user's current selection, one option id per category.
///
/// Every category always holds a selection; `Default` pre-assigns the
/// zero-delta choice in each category. `select` replaces unconditionally:
/// an id that does not exist in the category's option list is accepted and
/// simply prices as 0 downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub battery: String,
    pub color: String,
    pub wheels: String,
    pub interior: String,
    pub autopilot: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            battery: "standard".to_string(),
            color: "white".to_string(),
            wheels: "standard".to_string(),
            interior: "black".to_string(),
            autopilot: "none".to_string(),
        }
    }
}

impl Configuration {
    pub fn select(&mut self, category: Category, option_id: impl Into<String>) {
        let slot = match category {
            Category::Battery => &mut self.battery,
            Category::Paint => &mut self.color,
            Category::Wheels => &mut self.wheels,
            Category::Interior => &mut self.interior,
            Category::Autopilot => &mut self.autopilot,
        };
        *slot = option_id.into();
    }

    pub fn selected(&self, category: Category) -> &str {
        match category {
            Category::Battery => &self.battery,
            Category::Paint => &self.color,
            Category::Wheels => &self.wheels,
            Category::Interior => &self.interior,
            Category::Autopilot => &self.autopilot,
        }
    }
}
