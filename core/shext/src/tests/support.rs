//! テスト用のポート実装（メモリ上の設定ストア・ログ、固定ディレクトリ）

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex};

use common::domain::Dirs;
use common::error::Error;
use common::ports::outbound::{EnvResolver, Log, LogRecord};

use crate::ports::outbound::{Settings, SettingsStore};

/// 固定のディレクトリを返す EnvResolver
pub(crate) struct FixedEnvResolver {
    dirs: Option<Dirs>,
}

impl FixedEnvResolver {
    /// `<root>/config`, `<root>/state` を使う
    pub(crate) fn under(root: &Path) -> Self {
        Self {
            dirs: Some(Dirs {
                config_dir: root.join("config"),
                state_dir: root.join("state"),
            }),
        }
    }

    /// HOME 未設定相当（resolve_dirs が失敗する）
    pub(crate) fn failing() -> Self {
        Self { dirs: None }
    }

    pub(crate) fn dirs(&self) -> Dirs {
        self.dirs.clone().expect("FixedEnvResolver::failing has no dirs")
    }
}

impl EnvResolver for FixedEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        self.dirs
            .clone()
            .ok_or_else(|| Error::env("neither XDG_CONFIG_HOME nor HOME is set"))
    }
}

#[derive(Default)]
struct MemoryState {
    values: HashMap<String, Vec<String>>,
    locked: HashSet<String>,
    unavailable: bool,
    writes: usize,
    syncs: usize,
}

/// メモリ上の SettingsStore（書き込み・同期の回数を数える）
#[derive(Clone, Default)]
pub(crate) struct MemorySettingsStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySettingsStore {
    pub(crate) fn with_list(key: &str, items: &[&str]) -> Self {
        let store = Self::default();
        store
            .state
            .lock()
            .unwrap()
            .values
            .insert(key.to_string(), items.iter().map(|s| s.to_string()).collect());
        store
    }

    pub(crate) fn unavailable() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().unavailable = true;
        store
    }

    pub(crate) fn lock(self, key: &str) -> Self {
        self.state.lock().unwrap().locked.insert(key.to_string());
        self
    }

    pub(crate) fn list(&self, key: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .values
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub(crate) fn syncs(&self) -> usize {
        self.state.lock().unwrap().syncs
    }
}

impl SettingsStore for MemorySettingsStore {
    fn open(&self, schema: &str) -> Result<Box<dyn Settings>, Error> {
        if self.state.lock().unwrap().unavailable {
            return Err(Error::store_unavailable(schema, "schema is not installed"));
        }
        Ok(Box::new(MemorySettings {
            state: Arc::clone(&self.state),
            staged: Vec::new(),
        }))
    }
}

struct MemorySettings {
    state: Arc<Mutex<MemoryState>>,
    staged: Vec<(String, Vec<String>)>,
}

impl Settings for MemorySettings {
    fn is_writable(&self, key: &str) -> bool {
        !self.state.lock().unwrap().locked.contains(key)
    }

    fn strv(&self, key: &str) -> Result<Vec<String>, Error> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .values
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    fn set_strv(&mut self, key: &str, value: &[String]) -> Result<(), Error> {
        if !self.is_writable(key) {
            return Err(Error::not_writable(key));
        }
        self.state.lock().unwrap().writes += 1;
        self.staged.push((key.to_string(), value.to_vec()));
        Ok(())
    }

    fn sync(&mut self) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        for (key, value) in self.staged.drain(..) {
            state.values.insert(key, value);
        }
        state.syncs += 1;
        Ok(())
    }
}

/// レコードをメモリに溜める Log
#[derive(Default)]
pub(crate) struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub(crate) fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
