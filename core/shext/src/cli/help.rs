//! ヘルプ本文の組み立て
//!
//! プログラム名は引数で受け取る（プロセス全体のグローバル状態にしない）。

use clap::builder::ArgAction;
use std::fmt;

/// 実行ファイル名
pub const BIN_NAME: &str = "shext";

const DISABLE_SUMMARY: &str = "Disable an extension";

/// ヘルプ・usage に表示するプログラム名（例: `shext disable`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prgname(String);

impl Prgname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `<BIN_NAME> <subcommand>`
    pub fn subcommand(name: &str) -> Self {
        Self::new(format!("{} {}", BIN_NAME, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prgname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// disable サブコマンド単体の clap 定義（引数解析とヘルプ表示で共用）
pub(crate) fn disable_command(prgname: &Prgname) -> clap::Command {
    clap::Command::new("disable")
        .bin_name(prgname.as_str())
        .about(DISABLE_SUMMARY)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show help options")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("uuids")
                .value_name("UUID")
                .help("Extension to disable")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

/// disable のヘルプ本文
pub fn disable_help(prgname: &Prgname) -> String {
    disable_command(prgname).render_help().to_string()
}

/// トップレベルのヘルプ本文
pub fn top_level_help() -> String {
    super::args::build_clap_command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prgname_subcommand() {
        assert_eq!(Prgname::subcommand("disable").as_str(), "shext disable");
        assert_eq!(Prgname::new("x y").to_string(), "x y");
    }

    #[test]
    fn test_disable_help_uses_given_prgname() {
        let help = disable_help(&Prgname::new("custom-tool disable"));
        assert!(help.contains("Disable an extension"), "{}", help);
        assert!(help.contains("custom-tool disable"), "{}", help);
        assert!(help.contains("UUID"), "{}", help);
    }

    #[test]
    fn test_top_level_help_lists_disable() {
        let help = top_level_help();
        assert!(help.contains("disable"), "{}", help);
        assert!(help.contains("--generate"), "{}", help);
    }
}
