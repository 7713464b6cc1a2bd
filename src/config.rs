use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Context;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024; // 5MB

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://products.db".into());
        let upload_dir = lookup("UPLOAD_DIR").unwrap_or_else(|| "static/uploads".into());

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("PORT").unwrap_or_else(|| "3000".into());
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .with_context(|| format!("invalid HOST/PORT: {host}:{port}"))?;

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid MAX_UPLOAD_BYTES: {raw}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url,
            upload_dir: upload_dir.into(),
            addr,
            max_upload_bytes,
        })
    }
}
