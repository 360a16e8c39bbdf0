pub mod configuration;
pub mod customization;
pub mod options;
pub mod pricing;
pub mod vehicle;

pub use configuration::Configuration;
pub use customization::StoredCustomization;
pub use options::{CarOption, Category, OptionCatalog};
pub use pricing::total_price;
pub use vehicle::{Vehicle, VehicleCatalog, VehicleType};
