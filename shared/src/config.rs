use anyhow::{Context, Result};
use std::{env, str::FromStr};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: required("DATABASE_HOST")?,
            port: parsed("DATABASE_PORT", None)?,
            username: required("DATABASE_USERNAME")?,
            password: required("DATABASE_PASSWORD")?,
            database: required("DATABASE_NAME")?,
        };
        let server = ServerConfig {
            port: parsed("SERVER_PORT", Some(8080))?,
        };
        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("environment variable {key} is not set"))
}

fn parsed<T>(key: &str, default: Option<T>) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match (env::var(key), default) {
        (Ok(raw), _) => raw
            .trim()
            .parse()
            .with_context(|| format!("environment variable {key} has an invalid value {raw:?}")),
        (Err(_), Some(default)) => Ok(default),
        (Err(e), None) => Err(e).with_context(|| format!("environment variable {key} is not set")),
    }
}
