//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: 設定ストアの trait（common の FileSystem / EnvResolver / Log も利用）

pub mod inbound;
pub mod outbound;
