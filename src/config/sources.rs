use super::models::Config;
use config::{ConfigError, Environment, File, FileFormat, Map};
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "FNBOX_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/fnbox.toml";
const DOTENV_PATH: &str = ".env";
const ENV_PREFIX: &str = "FNBOX";
const ENV_SEPARATOR: &str = "__";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (`FNBOX_CONFIG` must exist when set; the default path is optional)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    let (config_path, required) = match env::var(CONFIG_ENV_VAR) {
        Ok(path) => (PathBuf::from(path), true),
        Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    load_from_sources_with(&config_path, required, environment(Path::new(DOTENV_PATH)))
}

/// Load configuration from a path the caller chose; the file must exist
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    load_from_sources_with(&config_path, true, environment(Path::new(DOTENV_PATH)))
}

/// Process environment layered over the entries of a `.env` file
///
/// Variables already set in the process win, as with `dotenvy::dotenv`.
/// A missing or unreadable `.env` contributes nothing.
pub fn environment(dotenv_path: &Path) -> Map<String, String> {
    let mut vars: Map<String, String> = dotenvy::from_path_iter(dotenv_path)
        .into_iter()
        .flatten()
        .filter_map(Result::ok)
        .collect();

    vars.extend(
        env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    );

    vars
}

/// Load from a file plus an explicit set of environment variables
pub fn load_from_sources_with(
    config_path: &Path,
    required: bool,
    env_vars: Map<String, String>,
) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    let use_file = required || config_path.exists();
    if use_file {
        builder = builder.add_source(
            File::from(config_path)
                .format(FileFormat::Toml)
                .required(true),
        );
    }

    // FNBOX__HTTP__TIMEOUT -> http.timeout
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(Some(env_vars)),
    );

    let mut config: Config = builder.build()?.try_deserialize()?;
    config.source = use_file.then(|| config_path.to_path_buf());
    Ok(config)
}
