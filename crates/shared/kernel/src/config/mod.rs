use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix for environment overrides (`AGENCY__SITE__BASE_URL` → `site.base_url`).
pub const ENV_PREFIX: &str = "AGENCY";
/// Config file used when no path is given (extension resolved by the `config` crate).
pub const DEFAULT_CONFIG_FILE: &str = "site";

/// Custom error type for config loading.
#[agency_derive::agency_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a required config file overlaid with `AGENCY__` environment variables.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path`, or `site` in the working directory. Any format the
///    `config` crate recognises by extension (`site.toml`, `site.json`, …).
/// 2. **Environment Overrides**: variables prefixed with `AGENCY__`; nested keys
///    are separated by double underscores.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does
/// not match the shape of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = effective_path(path);
    info!("Loading config from {}", effective_path.display());
    build(&effective_path, true)
}

/// Same layering as [`load_config`], but a missing file is not an error:
/// `T`'s serde defaults apply and environment overrides still take effect.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a file exists but is malformed, or if an
/// environment override cannot be deserialized into `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = effective_path(path);
    debug!("Loading optional config from {}", effective_path.display());
    build(&effective_path, false)
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf())
}

fn build<T>(path: &Path, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
