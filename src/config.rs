use anyhow::{anyhow, Result};
use std::env;

use crate::dialogue::Locale;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/flights.db";
pub const DEFAULT_HTTP_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let locale = match env::var("BOT_LOCALE") {
            Ok(code) if !code.trim().is_empty() => Locale::parse(&code)
                .ok_or_else(|| anyhow!("Invalid BOT_LOCALE '{}': expected 'ru' or 'en'", code))?,
            _ => Locale::default(),
        };

        Ok(Config {
            telegram_bot_token: token,
            database_url: Self::database_url_from_env(),
            http_port,
            locale,
        })
    }

    /// `DATABASE_URL`, falling back to the default when unset or blank.
    pub fn database_url_from_env() -> String {
        match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_DATABASE_URL.to_string(),
        }
    }
}
