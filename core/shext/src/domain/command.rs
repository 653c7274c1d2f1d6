//! shext コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

use super::extension::ExtensionUuid;

/// shext のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// トップレベルのヘルプ表示（-h / help）
    Help,

    /// disable のヘルプ表示（disable -h / help disable）。ストアには触れない
    DisableHelp,

    /// 拡張機能を無効化する（disable UUID）
    Disable { uuid: ExtensionUuid },
}

impl Command {
    /// ヘルプ表示だけで完結するコマンドか
    pub fn is_help(&self) -> bool {
        matches!(self, Command::Help | Command::DisableHelp)
    }

    /// ログに残すコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::DisableHelp | Command::Disable { .. } => "disable",
        }
    }
}
