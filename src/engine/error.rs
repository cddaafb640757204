// ==========================================
// 板材下料规划 - 引擎层错误类型
// ==========================================
// 核心阶段对合法数值输入不产生错误；仅取消会中断流水线
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("下料计算已取消 (阶段: {stage})")]
    Cancelled { stage: &'static str },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
