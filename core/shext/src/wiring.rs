//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{JsonSettingsStore, LoggingSettingsStore};
use crate::ports::outbound::SettingsStore;
use crate::usecase::DisableUseCase;

/// 配線で組み立てたユースケース群（main の Command ディスパッチで利用）
pub struct App {
    pub disable_use_case: DisableUseCase,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_shext() -> App {
    wire_with_env(Arc::new(StdEnvResolver))
}

/// ディレクトリ解決を差し替えて App を組み立てる
///
/// ディレクトリが解決できなくても失敗しない（ログは NoopLog、設定ストアは open 時にエラー）。
pub fn wire_with_env(env: Arc<dyn EnvResolver>) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = env
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let settings_store: Arc<dyn SettingsStore> = Arc::new(LoggingSettingsStore::new(
        Arc::new(JsonSettingsStore::new(env, Arc::clone(&fs))),
        Arc::clone(&logger),
    ));
    App {
        disable_use_case: DisableUseCase::new(settings_store, Arc::clone(&logger)),
        logger,
    }
}
