use anyhow::{bail, Context, Result};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
    /// Per-field character cap on analysis input. `None` forwards any length.
    pub max_input_chars: Option<usize>,
    /// Deserialize model output into the typed report before returning it.
    pub strict_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'OPENAI_API_KEY' is not set")?;

        let allowed_origins = parse_origins(
            &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let max_input_chars = match lookup("MAX_INPUT_CHARS") {
            Some(raw) => {
                let cap = raw
                    .trim()
                    .parse::<usize>()
                    .context("MAX_INPUT_CHARS must be a positive integer")?;
                if cap == 0 {
                    bail!("MAX_INPUT_CHARS must be a positive integer");
                }
                Some(cap)
            }
            None => None,
        };

        Ok(Config {
            openai_api_key,
            openai_api_url: lookup("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            allowed_origins,
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_input_chars,
            strict_schema: lookup("STRICT_SCHEMA")
                .map(|v| parse_flag(&v))
                .transpose()?
                .unwrap_or(false),
        })
    }
}

/// Splits a comma-separated origin list, dropping blank entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("STRICT_SCHEMA must be a boolean, got '{other}'"),
    }
}
