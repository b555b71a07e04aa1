// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! `.env` file snapshots
//! The file is read into an [`InMemoryEnv`]; the process environment is left
//! untouched.

use std::path::Path;

use tracing::info;

use super::error::ConfigError;
use super::source::InMemoryEnv;

impl InMemoryEnv {
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let to_error = |e: dotenvy::Error| ConfigError::Dotenv {
            path: path.to_path_buf(),
            message: if e.not_found() {
                "file not found".to_string()
            } else {
                e.to_string()
            },
        };

        let env = dotenvy::from_path_iter(path)
            .map_err(to_error)?
            .collect::<Result<InMemoryEnv, _>>()
            .map_err(to_error)?;

        info!(path = %path.display(), entries = env.len(), "Loaded env file");
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReadEnv, Settings};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_entries() {
        let file = env_file("# comment\nNOXENV_T_HOST=example.org\nNOXENV_T_LIST=\"a,b\"\nNOXENV_T_DEBUG=false\n");

        let env = InMemoryEnv::from_dotenv(file.path()).unwrap();
        let settings = Settings::new(env);

        assert_eq!(settings.env().len(), 3);
        assert_eq!(settings.get_str("NOXENV_T_HOST", ""), "example.org");
        assert_eq!(settings.get_list("NOXENV_T_LIST", None), vec!["a", "b"]);
        assert!(!settings.get_bool("NOXENV_T_DEBUG", true));
    }

    #[test]
    fn test_process_env_untouched() {
        let file = env_file("NOXENV_T_SNAPSHOT_ONLY=1\n");

        let env = InMemoryEnv::from_dotenv(file.path()).unwrap();

        assert_eq!(env.lookup("NOXENV_T_SNAPSHOT_ONLY").as_deref(), Some("1"));
        assert!(std::env::var("NOXENV_T_SNAPSHOT_ONLY").is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");

        let err = InMemoryEnv::from_dotenv(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv { path: p, .. } if p == path));
    }

    #[test]
    fn test_malformed_file() {
        let file = env_file("NOT A VALID LINE\n");

        assert!(matches!(
            InMemoryEnv::from_dotenv(file.path()),
            Err(ConfigError::Dotenv { .. })
        ));
    }
}
