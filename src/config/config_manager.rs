// ==========================================
// 板材下料规划 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::planner_config::{ConfigError, PlannerConfig};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// 配置键（环境变量）
// ==========================================
pub mod config_keys {
    pub const UNIT_SCALE: &str = "PLANK_PLANNER_UNIT_SCALE";
    pub const LOCALE: &str = "PLANK_PLANNER_LOCALE";
    pub const MATERIALS: &str = "PLANK_PLANNER_MATERIALS";
}

/// 应用目录名
pub const APP_DIR_NAME: &str = "plank-cut-planner";

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: PlannerConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 从默认路径加载并应用进程环境变量
    pub fn load_default() -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        match default_config_path() {
            Some(path) => Self::load(&path, &env),
            None => Self::from_config(PlannerConfig::default(), &env, None),
        }
    }

    /// 从指定文件加载（文件不存在时使用默认值），再应用覆写
    ///
    /// # 参数
    /// - path: 配置文件路径
    /// - env: 覆写来源（通常为进程环境变量）
    pub fn load(path: &Path, env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            serde_json::from_str(&raw).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            debug!(path = %path.display(), "配置文件不存在, 使用默认配置");
            PlannerConfig::default()
        };

        Self::from_config(config, env, Some(path.to_path_buf()))
    }

    fn from_config(
        mut config: PlannerConfig,
        env: &HashMap<String, String>,
        source: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        apply_overrides(&mut config, env)?;
        config.validate()?;

        info!(
            unit_scale = config.model_unit_scale,
            locale = %config.locale,
            materials = ?config.materials_path,
            "配置加载完成"
        );
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 配置文件来源
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// 应用环境变量覆写
fn apply_overrides(config: &mut PlannerConfig, env: &HashMap<String, String>) -> Result<(), ConfigError> {
    if let Some(value) = env.get(config_keys::UNIT_SCALE) {
        config.model_unit_scale = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: config_keys::UNIT_SCALE.to_string(),
            value: value.clone(),
            message: "不是合法数字".to_string(),
        })?;
    }
    if let Some(value) = env.get(config_keys::LOCALE).filter(|v| !v.trim().is_empty()) {
        config.locale = value.trim().to_string();
    }
    if let Some(value) = env.get(config_keys::MATERIALS).filter(|v| !v.trim().is_empty()) {
        config.materials_path = Some(PathBuf::from(value.trim()));
    }
    Ok(())
}
