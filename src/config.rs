use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::chunker::DEFAULT_MAX_TOKENS;

pub const DEFAULT_CONFIG_FILE: &str = "sanitizer.toml";
const ENV_PREFIX: &str = "ACORDAOS";

/// Run settings: built-in defaults, then an optional TOML file, then
/// `ACORDAOS_*` environment variables. CLI flags are applied on top by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_tokens: usize,
    pub generate_chunks: bool,
    pub parallel: bool,
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let (name, required) = match file {
            Some(path) => (path.to_string_lossy().into_owned(), true),
            None => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        Config::builder()
            .set_default("input_dir", "./pdfs")?
            .set_default("output_dir", "./dados_sanitizados")?
            .set_default("max_tokens", DEFAULT_MAX_TOKENS as u64)?
            .set_default("generate_chunks", true)?
            .set_default("parallel", true)?
            .add_source(File::with_name(&name).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "input_dir = \"/dados/vlex\"\nmax_tokens = 400\ngenerate_chunks = false\n",
        )
        .unwrap();

        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.input_dir, PathBuf::from("/dados/vlex"));
        assert_eq!(s.output_dir, PathBuf::from("./dados_sanitizados"));
        assert_eq!(s.max_tokens, 400);
        assert!(!s.generate_chunks);
        assert!(s.parallel);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
