//! 環境変数解決 Outbound ポート
//!
//! 設定ストア・ログのディレクトリを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver`。
pub trait EnvResolver: Send + Sync {
    /// config / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. SHEXT_HOME（$SHEXT_HOME/config, $SHEXT_HOME/state）
    /// 2. $XDG_CONFIG_HOME/shext, $XDG_STATE_HOME/shext
    /// 3. $HOME/.config/shext, $HOME/.local/state/shext
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// JSONL ログファイルのパス（<state_dir>/logs/shext.jsonl）
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_dirs()?.log_file())
    }
}
