use std::{env, num::ParseIntError, path::PathBuf};

use dotenv::dotenv;

const DEFAULT_MODEL_PATH: &str = "model.onnx";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid PORT value \"{value}\": {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub model_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Read `MODEL_PATH`, `HOST` and `PORT`, honouring a `.env` file.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let port = match var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| SettingsError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            model_path: var("MODEL_PATH")
                .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_owned())
                .into(),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
        })
    }
}
