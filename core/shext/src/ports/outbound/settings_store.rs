//! 設定ストア Outbound ポート
//!
//! スキーマ単位で開くキー・値ストア。usecase はこの trait 経由でのみ設定を読み書きする。

use common::error::Error;

/// スキーマを開いてハンドルを返すストア
pub trait SettingsStore: Send + Sync {
    /// スキーマのハンドルを取得する。開けなければ `Error::StoreUnavailable`。
    ///
    /// ハンドルはスコープを抜けると解放される（drop）。
    fn open(&self, schema: &str) -> Result<Box<dyn Settings>, Error>;
}

/// 開いたスキーマのハンドル
///
/// `set_strv` は値をハンドル内に積むだけで、`sync` が返った時点で永続化が完了する。
/// `sync` せずに drop したハンドルの変更は破棄される。
pub trait Settings {
    /// キーがポリシーでロックされていなければ true
    fn is_writable(&self, key: &str) -> bool;

    /// 文字列リストを読む。未設定なら空リスト
    fn strv(&self, key: &str) -> Result<Vec<String>, Error>;

    fn set_strv(&mut self, key: &str, value: &[String]) -> Result<(), Error>;

    /// 積んだ変更を永続ストレージへ同期書き込みする
    fn sync(&mut self) -> Result<(), Error>;
}
