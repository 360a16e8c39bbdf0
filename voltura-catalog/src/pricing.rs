use crate::configuration::Configuration;
use crate::options::{Category, OptionCatalog};
use crate::vehicle::Vehicle;

/// Total price of a vehicle under the given configuration:
/// base price plus the delta of the selected option in every category.
///
/// Pure and infallible. A selection that does not resolve to a catalog
/// option contributes 0 so a quote can always be rendered.
pub fn total_price(vehicle: &Vehicle, catalog: &OptionCatalog, config: &Configuration) -> i64 {
    let deltas: i64 = Category::ALL
        .iter()
        .map(|&category| catalog.price_delta(category, config.selected(category)))
        .sum();
    vehicle.base_price + deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleCatalog;

    fn model_3() -> Vehicle {
        VehicleCatalog::new().find("model-3").unwrap().clone()
    }

    #[test]
    fn default_configuration_costs_base_price() {
        let catalog = OptionCatalog::new();
        let car = model_3();
        assert_eq!(total_price(&car, &catalog, &Configuration::default()), car.base_price);
    }

    #[test]
    fn long_range_black_model_3_quote() {
        let catalog = OptionCatalog::new();
        let car = model_3();

        let mut config = Configuration::default();
        config.select(Category::Battery, "long-range");
        config.select(Category::Paint, "black");

        // 3,236,170 + 747,000 + 83,000
        assert_eq!(total_price(&car, &catalog, &config), 4_066_170);
    }

    #[test]
    fn changing_one_selection_shifts_total_by_delta_difference() {
        let catalog = OptionCatalog::new();
        let car = model_3();
        let mut config = Configuration::default();

        let before = total_price(&car, &catalog, &config);
        config.select(Category::Wheels, "sport");
        let after = total_price(&car, &catalog, &config);

        let old_delta = catalog.price_delta(Category::Wheels, "standard");
        let new_delta = catalog.price_delta(Category::Wheels, "sport");
        assert_eq!(after - before, new_delta - old_delta);
    }

    #[test]
    fn unknown_selection_contributes_zero() {
        let catalog = OptionCatalog::new();
        let car = model_3();

        let mut config = Configuration::default();
        config.select(Category::Autopilot, "time-travel");

        assert_eq!(total_price(&car, &catalog, &config), car.base_price);
    }
}
