//! Layered configuration: defaults, then a TOML file named by `LUMO_CONFIG`,
//! then `LUMO_*` environment variables. Command-line flags are applied by the
//! individual commands on top of the resolved values.

use lumo_engine::challenge::{GameKind, QuestionSettings, MAX_OPTION_COUNT};
use lumo_engine::selector::DEFAULT_STEP_SEED;
use lumo_engine::session::{SessionConfig, MAX_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const ENV_CONFIG: &str = "LUMO_CONFIG";
pub const ENV_LEVEL: &str = "LUMO_LEVEL";
pub const ENV_MAX_LEVEL: &str = "LUMO_MAX_LEVEL";
pub const ENV_LIVES: &str = "LUMO_LIVES";
pub const ENV_OPTIONS: &str = "LUMO_OPTIONS";
pub const ENV_HISTORY: &str = "LUMO_HISTORY";
pub const ENV_STEP_SEED: &str = "LUMO_STEP_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Level a new session starts on
    pub level: u32,
    pub max_level: u32,
    pub lives: u8,
    /// Answer options shown per question
    pub options: usize,
    /// Recent-history capacity used for repetition avoidance
    pub history: usize,
    pub step_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 1,
            max_level: 20,
            lives: 3,
            options: 4,
            history: 5,
            step_seed: DEFAULT_STEP_SEED,
        }
    }
}

impl Config {
    pub fn question_settings(&self) -> QuestionSettings {
        QuestionSettings {
            option_count: self.options,
            step_seed: self.step_seed,
        }
    }

    pub fn session_config(&self, game: GameKind) -> SessionConfig {
        SessionConfig {
            game,
            start_level: self.level,
            max_level: self.max_level,
            lives: self.lives,
            option_count: self.options,
            history_capacity: self.history,
            step_seed: self.step_seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub level: ValueSource,
    pub max_level: ValueSource,
    pub lives: ValueSource,
    pub options: ValueSource,
    pub history: ValueSource,
    pub step_seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            level: ValueSource::Default,
            max_level: ValueSource::Default,
            lives: ValueSource::Default,
            options: ValueSource::Default,
            history: ValueSource::Default,
            step_seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolves configuration with `lookup` standing in for the process
/// environment.
pub fn resolve<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(path) = env(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.level {
            cfg.level = v;
            sources.level = ValueSource::File;
        }
        if let Some(v) = f.max_level {
            cfg.max_level = v;
            sources.max_level = ValueSource::File;
        }
        if let Some(v) = f.lives {
            cfg.lives = v;
            sources.lives = ValueSource::File;
        }
        if let Some(v) = f.options {
            cfg.options = v;
            sources.options = ValueSource::File;
        }
        if let Some(v) = f.history {
            cfg.history = v;
            sources.history = ValueSource::File;
        }
        if let Some(v) = f.step_seed {
            cfg.step_seed = v;
            sources.step_seed = ValueSource::File;
        }
    }

    if let Some(v) = env(ENV_LEVEL) {
        cfg.level = parse_env(ENV_LEVEL, &v)?;
        sources.level = ValueSource::Env;
    }
    if let Some(v) = env(ENV_MAX_LEVEL) {
        cfg.max_level = parse_env(ENV_MAX_LEVEL, &v)?;
        sources.max_level = ValueSource::Env;
    }
    if let Some(v) = env(ENV_LIVES) {
        cfg.lives = parse_env(ENV_LIVES, &v)?;
        sources.lives = ValueSource::Env;
    }
    if let Some(v) = env(ENV_OPTIONS) {
        cfg.options = parse_env(ENV_OPTIONS, &v)?;
        sources.options = ValueSource::Env;
    }
    if let Some(v) = env(ENV_HISTORY) {
        cfg.history = parse_env(ENV_HISTORY, &v)?;
        sources.history = ValueSource::Env;
    }
    if let Some(v) = env(ENV_STEP_SEED) {
        cfg.step_seed = parse_env(ENV_STEP_SEED, &v)?;
        sources.step_seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    level: Option<u32>,
    #[serde(default)]
    max_level: Option<u32>,
    #[serde(default)]
    lives: Option<u8>,
    #[serde(default)]
    options: Option<usize>,
    #[serde(default)]
    history: Option<usize>,
    #[serde(default)]
    step_seed: Option<u64>,
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("invalid value for {}: {:?}", key, raw)))
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.level == 0 {
        return Err(ConfigError::Invalid("level must be >= 1".into()));
    }
    if cfg.max_level < cfg.level {
        return Err(ConfigError::Invalid(
            "max_level must be >= level".into(),
        ));
    }
    if cfg.lives == 0 {
        return Err(ConfigError::Invalid("lives must be >= 1".into()));
    }
    if cfg.options < 2 {
        return Err(ConfigError::Invalid("options must be >= 2".into()));
    }
    if cfg.options > MAX_OPTION_COUNT {
        return Err(ConfigError::Invalid(format!(
            "options must be <= {}",
            MAX_OPTION_COUNT
        )));
    }
    if cfg.history > MAX_HISTORY_CAPACITY {
        return Err(ConfigError::Invalid(format!(
            "history must be <= {}",
            MAX_HISTORY_CAPACITY
        )));
    }
    Ok(())
}
