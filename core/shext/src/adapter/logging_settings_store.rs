//! 設定の書き込みをログに記録する SettingsStore のラッパ

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::ports::outbound::{Settings, SettingsStore};

pub struct LoggingSettingsStore {
    inner: Arc<dyn SettingsStore>,
    log: Arc<dyn Log>,
}

impl LoggingSettingsStore {
    pub fn new(inner: Arc<dyn SettingsStore>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }
}

impl SettingsStore for LoggingSettingsStore {
    fn open(&self, schema: &str) -> Result<Box<dyn Settings>, Error> {
        let inner = self.inner.open(schema)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "settings opened")
                .layer("adapter")
                .kind("settings")
                .field("schema", schema),
        );
        Ok(Box::new(LoggingSettings {
            inner,
            schema: schema.to_string(),
            log: Arc::clone(&self.log),
        }))
    }
}

struct LoggingSettings {
    inner: Box<dyn Settings>,
    schema: String,
    log: Arc<dyn Log>,
}

impl Settings for LoggingSettings {
    fn is_writable(&self, key: &str) -> bool {
        self.inner.is_writable(key)
    }

    fn strv(&self, key: &str) -> Result<Vec<String>, Error> {
        self.inner.strv(key)
    }

    fn set_strv(&mut self, key: &str, value: &[String]) -> Result<(), Error> {
        self.inner.set_strv(key, value)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "settings write")
                .layer("adapter")
                .kind("settings")
                .field("schema", self.schema.as_str())
                .field("key", key)
                .field("count", value.len()),
        );
        Ok(())
    }

    fn sync(&mut self) -> Result<(), Error> {
        self.inner.sync()?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "settings synced")
                .layer("adapter")
                .kind("settings")
                .field("schema", self.schema.as_str()),
        );
        Ok(())
    }
}
