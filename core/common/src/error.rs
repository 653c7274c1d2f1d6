//! エラーハンドリング
//!
//! 終了コードの対応:
//! - 引数不正（usage）: 1
//! - それ以外（設定ストアを開けない・書き込み不可・I/O 失敗など）: 2

/// usage エラーの終了コード
pub const EXIT_USAGE: i32 = 1;

/// 操作失敗の終了コード
pub const EXIT_FAILURE: i32 = 2;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正。`help` は stderr に続けて表示するヘルプ本文
    #[error("{message}")]
    Usage { message: String, help: String },

    #[error("Failed to open settings schema '{schema}': {reason}")]
    StoreUnavailable { schema: String, reason: String },

    #[error("Setting '{0}' is not writable")]
    NotWritable(String),

    #[error("{0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Environment error: {0}")]
    Env(String),
}

impl Error {
    pub fn usage(message: impl Into<String>, help: impl Into<String>) -> Self {
        Error::Usage {
            message: message.into(),
            help: help.into(),
        }
    }

    pub fn store_unavailable(schema: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::StoreUnavailable {
            schema: schema.into(),
            reason: reason.into(),
        }
    }

    pub fn not_writable(key: impl Into<String>) -> Self {
        Error::NotWritable(key.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// usage エラーか（main でヘルプ表示の要否に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
