//! 実行時ディレクトリ（XDG / SHEXT_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、設定ストア・ログのパス計算に使う。

use std::path::PathBuf;

/// ログファイル名
const LOG_FILENAME: &str = "shext.jsonl";

/// 解決済みの config / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// 設定ストア（スキーマごとの JSON とロック）の格納ディレクトリ
    pub fn settings_dir(&self) -> PathBuf {
        self.config_dir.join("settings")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// JSONL ログの出力先
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}
