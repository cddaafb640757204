// ==========================================
// 板材下料规划 - 配置层
// ==========================================
// 职责: 规划参数加载, 支持环境变量覆写
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod planner_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use planner_config::{ConfigError, PlannerConfig};
