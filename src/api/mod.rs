// ==========================================
// 板材下料规划 - API层
// ==========================================
// 职责: 面向调用方（CLI / 渲染 / 打印）的业务接口
// ==========================================

pub mod error;
pub mod plan_api;
pub mod report;

// 重导出
pub use error::{ApiError, ApiResult};
pub use plan_api::{PieceColor, PlanApi, PlanResponse};
pub use report::render_text;
