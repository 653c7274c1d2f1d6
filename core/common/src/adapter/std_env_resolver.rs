//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "shext";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        resolve_dirs_with(|k| env::var(k).ok())
    }
}

fn non_empty_var<F>(lookup: F, key: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// 環境変数の参照関数を受け取ってディレクトリを解決する（テストでは HashMap を渡す）
pub fn resolve_dirs_with<F>(lookup: F) -> Result<Dirs, Error>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(home) = non_empty_var(&lookup, "SHEXT_HOME") {
        return Ok(Dirs {
            config_dir: home.join("config"),
            state_dir: home.join("state"),
        });
    }

    let user_home = non_empty_var(&lookup, "HOME");
    let base = |xdg_key: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
        if let Some(p) = non_empty_var(&lookup, xdg_key) {
            return Ok(p);
        }
        let mut p = user_home
            .clone()
            .ok_or_else(|| Error::env(format!("neither {} nor HOME is set", xdg_key)))?;
        for part in fallback {
            p.push(part);
        }
        Ok(p)
    };

    Ok(Dirs {
        config_dir: base("XDG_CONFIG_HOME", &[".config"])?.join(APP_DIR),
        state_dir: base("XDG_STATE_HOME", &[".local", "state"])?.join(APP_DIR),
    })
}
