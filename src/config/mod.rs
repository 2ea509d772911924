//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::ForecastPaths;
pub use settings::Settings;
