use crate::core::payroll::{DEFAULT_BLOCK_MINUTES, DEFAULT_BLOCK_RATE, PayrollRule};
use crate::core::scope::ScopeSet;
use crate::errors::{AppError, AppResult};
use crate::models::scope::ScopeDefinition;
use crate::models::shift_type::ShiftType;
use crate::utils::path::expand_tilde;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "SHIFTLEDGER_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_public_data_file")]
    pub public_data_file: String,
    #[serde(default = "default_block_minutes")]
    pub ot_block_minutes: i64,
    #[serde(default = "default_block_rate")]
    pub ot_block_rate: i64,
    #[serde(default = "default_self_marker")]
    pub self_marker: String,
    #[serde(default = "default_outsourced_label")]
    pub outsourced_label: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<ScopeDefinition>,
    #[serde(default = "default_shift_types")]
    pub shift_types: BTreeMap<String, ShiftType>,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("shifts.csv")
        .to_string_lossy()
        .to_string()
}
fn default_public_data_file() -> String {
    Config::config_dir()
        .join("shifts_public.csv")
        .to_string_lossy()
        .to_string()
}
fn default_block_minutes() -> i64 {
    DEFAULT_BLOCK_MINUTES
}
fn default_block_rate() -> i64 {
    DEFAULT_BLOCK_RATE
}
fn default_self_marker() -> String {
    "Tự làm".to_string()
}
fn default_outsourced_label() -> String {
    "Thuê ngoài".to_string()
}
fn default_recent_limit() -> usize {
    20
}
fn default_scopes() -> Vec<ScopeDefinition> {
    vec![
        ScopeDefinition::keyword("dem_nhac", "Đêm nhạc", &["Đêm nhạc", "dem nhac"]),
        ScopeDefinition::keyword("open_mic", "Open mic", &["Open mic", "openmic"]),
    ]
}
fn default_shift_types() -> BTreeMap<String, ShiftType> {
    let mut types = BTreeMap::new();
    types.insert(
        "dem_nhac".to_string(),
        ShiftType::new("Đêm nhạc", "19:30", "23:00", 600_000),
    );
    types.insert(
        "openmic".to_string(),
        ShiftType::new("Openmic", "20:00", "22:30", 500_000),
    );
    types
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            public_data_file: default_public_data_file(),
            ot_block_minutes: default_block_minutes(),
            ot_block_rate: default_block_rate(),
            self_marker: default_self_marker(),
            outsourced_label: default_outsourced_label(),
            recent_limit: default_recent_limit(),
            scopes: default_scopes(),
            shift_types: default_shift_types(),
        }
    }
}

impl Config {
    /// Configuration directory: `$SHIFTLEDGER_HOME`, else the platform
    /// config dir, else `./.shiftledger`.
    pub fn config_dir() -> PathBuf {
        if let Ok(home) = env::var(HOME_ENV)
            && !home.trim().is_empty()
        {
            return expand_tilde(&home);
        }
        dirs::config_dir()
            .map(|d| d.join("shiftledger"))
            .unwrap_or_else(|| PathBuf::from(".shiftledger"))
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftledger.conf")
    }

    /// Load the configuration file, or defaults when there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.ot_block_minutes <= 0 {
            return Err(AppError::Config(
                "ot_block_minutes must be greater than zero".into(),
            ));
        }
        if self.ot_block_rate < 0 {
            return Err(AppError::Config("ot_block_rate cannot be negative".into()));
        }
        for (key, shift) in &self.shift_types {
            shift
                .start()
                .and(shift.end())
                .map_err(|e| AppError::Config(format!("shift type '{key}': {e}")))?;
        }
        self.scope_set().validate()
    }

    pub fn payroll_rule(&self) -> PayrollRule {
        PayrollRule::new(self.ot_block_minutes, Decimal::from(self.ot_block_rate))
    }

    pub fn scope_set(&self) -> ScopeSet {
        ScopeSet::new(&self.scopes)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn public_data_path(&self) -> PathBuf {
        expand_tilde(&self.public_data_file)
    }
}
