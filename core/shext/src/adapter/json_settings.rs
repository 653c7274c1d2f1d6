//! 設定ストアの標準アダプタ（スキーマごとの JSON ファイル）
//!
//! - 値: `<settings_dir>/<schema>.json`（キー -> JSON 値のオブジェクト）
//! - ロック: `<settings_dir>/locks/<schema>`（1 行 1 キー。空行と `#` 行は無視）
//!
//! EnvResolver で settings_dir を解決し、FileSystem で読み書きする。

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use serde_json::{Map, Value};

use crate::ports::outbound::{Settings, SettingsStore};

const LOCKS_DIR: &str = "locks";

/// JSON ファイルをバックエンドにした SettingsStore
pub struct JsonSettingsStore {
    env: Arc<dyn EnvResolver>,
    fs: Arc<dyn FileSystem>,
}

impl JsonSettingsStore {
    pub fn new(env: Arc<dyn EnvResolver>, fs: Arc<dyn FileSystem>) -> Self {
        Self { env, fs }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn open(&self, schema: &str) -> Result<Box<dyn Settings>, Error> {
        let unavailable = |reason: String| Error::store_unavailable(schema, reason);

        if schema.is_empty() || schema.contains(&['/', '\\'][..]) || schema.starts_with('.') {
            return Err(unavailable("invalid schema id".to_string()));
        }
        let dir = self
            .env
            .resolve_dirs()
            .map_err(|e| unavailable(e.to_string()))?
            .settings_dir();
        let path = dir.join(format!("{}.json", schema));

        let values = if self.fs.exists(&path) {
            if !self.fs.metadata(&path).map_err(|e| unavailable(e.to_string()))?.is_file() {
                return Err(unavailable(format!("{}: not a regular file", path.display())));
            }
            let s = self
                .fs
                .read_to_string(&path)
                .map_err(|e| unavailable(e.to_string()))?;
            parse_document(&s).map_err(|reason| {
                unavailable(format!("{}: {}", path.display(), reason))
            })?
        } else {
            Map::new()
        };
        let locked = read_locks(&*self.fs, &dir.join(LOCKS_DIR).join(schema))
            .map_err(|e| unavailable(e.to_string()))?;

        Ok(Box::new(JsonSettings {
            fs: Arc::clone(&self.fs),
            dir,
            path,
            values,
            locked,
            dirty: false,
        }))
    }
}

/// 開いたスキーマ（読み込んだ時点のスナップショットを保持する）
struct JsonSettings {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
    path: PathBuf,
    values: Map<String, Value>,
    locked: BTreeSet<String>,
    dirty: bool,
}

impl Settings for JsonSettings {
    fn is_writable(&self, key: &str) -> bool {
        !self.locked.contains(key)
    }

    fn strv(&self, key: &str) -> Result<Vec<String>, Error> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| {
                    v.as_str()
                        .map(String::from)
                        .ok_or_else(|| not_a_string_list(key))
                })
                .collect(),
            Some(_) => Err(not_a_string_list(key)),
        }
    }

    fn set_strv(&mut self, key: &str, value: &[String]) -> Result<(), Error> {
        if !self.is_writable(key) {
            return Err(Error::not_writable(key));
        }
        self.values.insert(
            key.to_string(),
            Value::Array(value.iter().cloned().map(Value::String).collect()),
        );
        self.dirty = true;
        Ok(())
    }

    fn sync(&mut self) -> Result<(), Error> {
        if !self.dirty {
            return Ok(());
        }
        self.fs.create_dir_all(&self.dir)?;
        let mut s = serde_json::to_string_pretty(&self.values)?;
        s.push('\n');
        self.fs.write_durable(&self.path, &s)?;
        self.dirty = false;
        Ok(())
    }
}

fn not_a_string_list(key: &str) -> Error {
    Error::json(format!("value of '{}' is not a list of strings", key))
}

fn parse_document(s: &str) -> Result<Map<String, Value>, String> {
    if s.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("not a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn read_locks(fs: &dyn FileSystem, path: &Path) -> Result<BTreeSet<String>, Error> {
    if !fs.exists(path) {
        return Ok(BTreeSet::new());
    }
    let s = fs.read_to_string(path)?;
    Ok(s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::FixedEnvResolver;
    use common::adapter::StdFileSystem;
    use std::fs;

    const SCHEMA: &str = "org.gnome.shell";
    const KEY: &str = "enabled-extensions";

    fn store(root: &Path) -> (JsonSettingsStore, PathBuf) {
        let env = FixedEnvResolver::under(root);
        let settings_dir = env.dirs().settings_dir();
        (
            JsonSettingsStore::new(Arc::new(env), Arc::new(StdFileSystem)),
            settings_dir,
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_document_reads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, _) = store(tmp.path());
        let settings = store.open(SCHEMA).unwrap();
        assert!(settings.is_writable(KEY));
        assert_eq!(settings.strv(KEY).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_set_and_sync_persists_and_keeps_other_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("org.gnome.shell.json"),
            r#"{"enabled-extensions":["a@ext","b@ext"],"favorite-apps":["x.desktop"]}"#,
        )
        .unwrap();

        {
            let mut settings = store.open(SCHEMA).unwrap();
            assert_eq!(settings.strv(KEY).unwrap(), strings(&["a@ext", "b@ext"]));
            settings.set_strv(KEY, &strings(&["b@ext"])).unwrap();
            settings.sync().unwrap();
        }

        let raw: Value =
            serde_json::from_str(&fs::read_to_string(dir.join("org.gnome.shell.json")).unwrap())
                .unwrap();
        assert_eq!(raw[KEY], serde_json::json!(["b@ext"]));
        assert_eq!(raw["favorite-apps"], serde_json::json!(["x.desktop"]));

        let settings = store.open(SCHEMA).unwrap();
        assert_eq!(settings.strv(KEY).unwrap(), strings(&["b@ext"]));
    }

    #[test]
    fn test_sync_creates_settings_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        let mut settings = store.open(SCHEMA).unwrap();
        settings.set_strv(KEY, &strings(&["a@ext"])).unwrap();
        settings.sync().unwrap();
        assert!(dir.join("org.gnome.shell.json").is_file());
    }

    #[test]
    fn test_drop_without_sync_discards() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        {
            let mut settings = store.open(SCHEMA).unwrap();
            settings.set_strv(KEY, &strings(&["a@ext"])).unwrap();
        }
        assert!(!dir.join("org.gnome.shell.json").exists());
        let settings = store.open(SCHEMA).unwrap();
        assert!(settings.strv(KEY).unwrap().is_empty());
    }

    #[test]
    fn test_sync_without_changes_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        let mut settings = store.open(SCHEMA).unwrap();
        settings.sync().unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_locked_key_is_not_writable() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        fs::create_dir_all(dir.join("locks")).unwrap();
        fs::write(
            dir.join("locks").join(SCHEMA),
            "# policy\n\nenabled-extensions\n",
        )
        .unwrap();

        let mut settings = store.open(SCHEMA).unwrap();
        assert!(!settings.is_writable(KEY));
        assert!(settings.is_writable("favorite-apps"));
        let err = settings.set_strv(KEY, &[]).unwrap_err();
        assert_eq!(err, Error::not_writable(KEY));
    }

    #[test]
    fn test_corrupt_document_is_store_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("org.gnome.shell.json"), "[1, 2").unwrap();
        let err = store.open(SCHEMA).err().unwrap();
        assert!(matches!(err, Error::StoreUnavailable { .. }), "{:?}", err);

        fs::write(dir.join("org.gnome.shell.json"), "[\"a\"]").unwrap();
        let err = store.open(SCHEMA).err().unwrap();
        assert!(matches!(err, Error::StoreUnavailable { .. }), "{:?}", err);
    }

    #[test]
    fn test_document_path_is_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        fs::create_dir_all(dir.join("org.gnome.shell.json")).unwrap();
        let err = store.open(SCHEMA).err().unwrap();
        assert!(err.to_string().contains("not a regular file"), "{}", err);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_schema_id() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, _) = store(tmp.path());
        for schema in ["", "../etc", "a/b", ".hidden"] {
            let err = store.open(schema).err().unwrap();
            assert!(matches!(err, Error::StoreUnavailable { .. }), "{}", schema);
        }
    }

    #[test]
    fn test_unresolvable_dirs_is_store_unavailable() {
        let store = JsonSettingsStore::new(
            Arc::new(FixedEnvResolver::failing()),
            Arc::new(StdFileSystem),
        );
        let err = store.open(SCHEMA).err().unwrap();
        assert!(matches!(err, Error::StoreUnavailable { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_string_list_value() {
        let tmp = tempfile::tempdir().unwrap();
        let (store, dir) = store(tmp.path());
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("org.gnome.shell.json"),
            r#"{"enabled-extensions":"a@ext","other":[1]}"#,
        )
        .unwrap();
        let settings = store.open(SCHEMA).unwrap();
        assert!(matches!(settings.strv(KEY), Err(Error::Json(_))));
        assert!(matches!(settings.strv("other"), Err(Error::Json(_))));
    }
}
