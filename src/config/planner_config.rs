use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// 规划参数（持久化对象）
///
/// 存储位置：`<config_dir>/plank-cut-planner/config.json`，缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 模型空间 -> 毫米的换算系数（模型以米为单位时填 1000）
    #[serde(default = "default_unit_scale")]
    pub model_unit_scale: f64,

    /// 报告语言（en / zh-CN）
    #[serde(default = "default_locale")]
    pub locale: String,

    /// 默认材料清单路径（可选）
    #[serde(default)]
    pub materials_path: Option<PathBuf>,
}

fn default_unit_scale() -> f64 {
    1.0
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            model_unit_scale: default_unit_scale(),
            locale: default_locale(),
            materials_path: None,
        }
    }
}

impl PlannerConfig {
    /// 校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.model_unit_scale.is_finite() && self.model_unit_scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "model_unit_scale".to_string(),
                value: self.model_unit_scale.to_string(),
                message: "必须为正数".to_string(),
            });
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                value: self.locale.clone(),
                message: "不能为空".to_string(),
            });
        }
        Ok(())
    }
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}
