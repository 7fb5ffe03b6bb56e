use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON document holding every section.
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            data_file: env::var("DATA_FILE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "data.json".into())
                .into(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
        })
    }
}
