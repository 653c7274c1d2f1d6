pub mod json_settings;
pub mod logging_settings_store;

pub use json_settings::JsonSettingsStore;
pub use logging_settings_store::LoggingSettingsStore;
