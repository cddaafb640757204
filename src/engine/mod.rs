// ==========================================
// 板材下料规划 - 引擎层
// ==========================================
// 职责: 提取 -> 分组 -> 摆向优化 -> 排料 -> 汇总
// 红线: 各阶段为纯函数, 不修改前一阶段输出; 不做 I/O
// ==========================================

pub mod display_color;
pub mod error;
pub mod geometry_ingest;
pub mod orchestrator;
pub mod orientation;
pub mod piece_grouping;
pub mod plan_summary;
pub mod plank_packer;

// 重导出核心引擎
pub use error::{PlannerError, PlannerResult};
pub use geometry_ingest::{ExtractedPiece, GeometryIngest};
pub use orchestrator::{CuttingPlanner, PlanOutcome};
pub use orientation::{OptimizeResult, OrientationChoice, OrientationOptimizer};
pub use piece_grouping::PieceGrouper;
pub use plan_summary::{MaterialUsage, PlanSummary};
pub use plank_packer::PlankPacker;
