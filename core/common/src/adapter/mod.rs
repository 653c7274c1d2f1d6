//! アダプター（外界の I/O を trait で抽象化）
//!
//! 標準実装（Std*）を wiring で注入する。

pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;

pub use crate::ports::outbound::{FileMetadata, FileSystem};
pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
