//! 拡張機能の無効化（enabled-extensions から UUID を取り除く）ユースケース

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::domain::{DisableOutcome, EnabledList, ExtensionUuid};
use crate::ports::outbound::SettingsStore;

/// シェル設定のスキーマ ID
pub const SHELL_SCHEMA: &str = "org.gnome.shell";

/// 有効な拡張機能 UUID のリストを持つキー
pub const ENABLED_EXTENSIONS_KEY: &str = "enabled-extensions";

/// disable コマンドのユースケース
pub struct DisableUseCase {
    store: Arc<dyn SettingsStore>,
    log: Arc<dyn Log>,
}

impl DisableUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, log: Arc<dyn Log>) -> Self {
        Self { store, log }
    }

    /// UUID を無効化する。含まれていなければ何も書かずに AlreadyDisabled を返す。
    ///
    /// 成功して戻った時点で変更はディスクに同期済み。
    pub fn run(&self, uuid: &ExtensionUuid) -> Result<DisableOutcome, Error> {
        let result = self.disable(uuid);
        let record = match &result {
            Ok(outcome) => LogRecord::new(LogLevel::Info, "extension disable finished")
                .field("changed", outcome.changed()),
            Err(e) => LogRecord::new(LogLevel::Error, "extension disable failed")
                .kind("error")
                .field("error", e.to_string()),
        };
        let _ = self
            .log
            .log(&record.layer("usecase").field("uuid", uuid.as_str()));
        result
    }

    fn disable(&self, uuid: &ExtensionUuid) -> Result<DisableOutcome, Error> {
        // ハンドルはこの関数を抜けるとどの経路でも drop される
        let mut settings = self.store.open(SHELL_SCHEMA)?;

        if !settings.is_writable(ENABLED_EXTENSIONS_KEY) {
            return Err(Error::not_writable(ENABLED_EXTENSIONS_KEY));
        }

        let current = EnabledList::from(settings.strv(ENABLED_EXTENSIONS_KEY)?);
        let Some(updated) = current.without(uuid) else {
            return Ok(DisableOutcome::AlreadyDisabled);
        };

        settings.set_strv(ENABLED_EXTENSIONS_KEY, updated.as_slice())?;
        settings.sync()?;
        Ok(DisableOutcome::Disabled)
    }
}
