//! Outbound ポート: アプリが外界（設定ストア）を使うための trait

pub mod settings_store;

pub use settings_store::{Settings, SettingsStore};
