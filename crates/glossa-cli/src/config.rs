use std::fs;
use std::path::{Path, PathBuf};

use glossa_types::TargetScript;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoadError;

/// Defaults resolved once at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Untranslated reference document; default SOURCE of the diffs.
    pub source_document: PathBuf,
    /// Translated document; default TARGET of the diffs and default SOURCE
    /// of `untranslated` and `merge`.
    pub translated_document: PathBuf,
    /// Allow-list used when `--dict` is not given. Skipped if absent.
    pub dictionary: PathBuf,
    /// Script that marks a string as translated.
    pub script: TargetScript,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_document: PathBuf::from("desc.en.hocon"),
            translated_document: PathBuf::from("desc.zh.hocon"),
            dictionary: PathBuf::from("scripts/no-translate-dict.txt"),
            script: TargetScript::default(),
        }
    }
}

impl Config {
    /// Looked up in the working directory when `--config` is not given.
    pub const FILE_NAME: &'static str = "glossa.toml";

    /// Load `explicit` if given, else [`Self::FILE_NAME`] if present, else
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, LoadError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(Self::FILE_NAME).is_file() => {
                Self::from_file(Path::new(Self::FILE_NAME))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| LoadError::Config {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// True if `target` names one of the full documents, which must never
    /// be merged as an overlay. Only the file name is compared.
    pub fn is_protected_target(&self, target: &Path) -> bool {
        let Some(name) = target.file_name() else {
            return false;
        };
        [&self.source_document, &self.translated_document]
            .iter()
            .any(|doc| doc.file_name() == Some(name))
    }
}
