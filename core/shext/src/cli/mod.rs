//! CLI 境界: 引数解析・ヘルプ表示・補完スクリプト生成

mod args;
mod help;

pub use args::{parse_args, print_completion, ParseOutcome};
pub use help::{disable_help, top_level_help, Prgname, BIN_NAME};
