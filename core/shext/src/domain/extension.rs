//! 拡張機能の識別子と有効化リスト

/// 拡張機能の UUID（例: `dash-to-dock@micxgx.gmail.com`）
///
/// 中身は解釈しない不透明な文字列。空文字列は受け付けない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionUuid(String);

impl ExtensionUuid {
    pub fn new(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// enabled-extensions の順序付きリスト
///
/// 重複は想定しないが、読み込んだ内容はそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnabledList(Vec<String>);

impl EnabledList {
    pub fn contains(&self, uuid: &ExtensionUuid) -> bool {
        self.0.iter().any(|s| s == uuid.as_str())
    }

    /// `uuid` を取り除いた新しいリストを返す。含まれていなければ None。
    ///
    /// 一致する要素はすべて取り除き、残りの相対順序は保つ。
    pub fn without(&self, uuid: &ExtensionUuid) -> Option<EnabledList> {
        if !self.contains(uuid) {
            return None;
        }
        Some(Self(
            self.0
                .iter()
                .filter(|s| s.as_str() != uuid.as_str())
                .cloned()
                .collect(),
        ))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for EnabledList {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

/// disable の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisableOutcome {
    /// リストから取り除いて永続化した
    Disabled,
    /// 元々含まれていなかった（書き込みなし）
    AlreadyDisabled,
}

impl DisableOutcome {
    /// 設定値が変わったか
    pub fn changed(self) -> bool {
        matches!(self, DisableOutcome::Disabled)
    }
}
