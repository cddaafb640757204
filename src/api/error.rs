// ==========================================
// 板材下料规划 - API层错误类型
// ==========================================
// 职责: 将导入/配置/引擎错误转换为用户可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::PlannerError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("计算已取消: {0}")]
    Cancelled(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            // 数据质量问题属于用户输入问题
            ImportError::DuplicateMaterialId { .. } | ImportError::ValueRangeError { .. } => {
                ApiError::InvalidInput(err.to_string())
            }
            _ => ApiError::ImportError(err.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        ApiError::Cancelled(err.to_string())
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
