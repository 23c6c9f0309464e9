use std::env;

use serenity::all::ApplicationId;

use crate::error::{BotError, BotResult};
use crate::logging::LogLevel;
use crate::{hey, peek, psst};

pub const DEFAULT_NODE_ENV: &str = "dev";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Secrets and runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct ConfigSettings {
    pub discord_token: String,
    pub application_id: ApplicationId,
    pub node_env: String,
    pub log_level: LogLevel,
}

impl ConfigSettings {
    /// Loads `.env.<NODE_ENV>` from the working directory and reads the process environment.
    /// The caller applies `log_level`.
    pub fn get() -> BotResult<Self> {
        psst!("Loading environment variables...");

        let node_env = env::var("NODE_ENV").unwrap_or_else(|_| DEFAULT_NODE_ENV.to_string());
        let env_file = format!(".env.{}", node_env);
        peek!("Loading environment variables from {}...", env_file);

        if let Err(e) = dotenv::from_filename(&env_file) {
            hey!("Could not load {}: {}", env_file, e);
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = get_env_var(&lookup, "DISCORD_BOT_TOKEN", None)?;
        let raw_application_id = get_env_var(&lookup, "APPLICATION_ID", None)?;
        let node_env = get_env_var(&lookup, "NODE_ENV", Some(DEFAULT_NODE_ENV))?;
        let log_level = get_env_var(&lookup, "LOG_LEVEL", Some(DEFAULT_LOG_LEVEL))?;

        let application_id = match raw_application_id.trim().parse::<u64>() {
            Ok(id) if id != 0 => ApplicationId::new(id),
            _ => {
                return Err(BotError::InvalidEnvVar {
                    name: "APPLICATION_ID".to_string(),
                    reason: "expected a non-zero numeric id".to_string(),
                })
            }
        };

        Ok(Self {
            discord_token,
            application_id,
            node_env,
            log_level: LogLevel::parse(&log_level),
        })
    }
}

/// Reads `name` through `lookup`, using `fallback` when it is unset.
pub fn get_env_var<F>(lookup: &F, name: &str, fallback: Option<&str>) -> BotResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => {
            peek!("Environment variable {} is set to {}.", name, mask_secret(&value));
            Ok(value)
        }
        None => {
            peek!("Environment variable {} is not set, trying fallback...", name);
            fallback
                .map(str::to_string)
                .ok_or_else(|| BotError::MissingEnvVar(name.to_string()))
        }
    }
}

/// Keeps the first quarter of a value visible and stars out the rest.
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len <= 4 {
        return value.to_string();
    }
    let visible = len.div_ceil(4);
    let mut masked: String = value.chars().take(visible).collect();
    masked.push_str(&"*".repeat(len - visible));
    masked
}
