// ==========================================
// 板材下料规划 - 核心库
// ==========================================
// 流水线: 几何提取 -> 零件分组 -> 摆向优化 -> 线性排料 -> 汇总
// 系统定位: 为小型加工者给出原材料采购数量与下料顺序
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 下料算法
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 规划参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CuttingPlan, Material, MeshObject, MeshSource, OptimizedPiece, Orientation, PieceGroup,
    PlacedPiece, Plank, PlanWarning, RawDimension, WarningReason,
};

// 引擎
pub use engine::{
    CuttingPlanner, GeometryIngest, OrientationOptimizer, PieceGrouper, PlanSummary, PlankPacker,
};

// API
pub use api::{ApiError, PlanApi, PlanResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "plank-cut-planner";
