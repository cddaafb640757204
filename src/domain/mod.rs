// ==========================================
// 板材下料规划 - 领域模型层
// ==========================================
// 职责: 定义网格源、零件、材料、下料方案实体
// 红线: 不含解析逻辑,不含引擎逻辑
// ==========================================

pub mod material;
pub mod mesh;
pub mod piece;
pub mod plank;
pub mod types;

// 重导出核心类型
pub use material::Material;
pub use mesh::{MeshObject, MeshSource, Vertex};
pub use piece::{DimensionKey, OptimizedPiece, PieceGroup, PlanWarning, RawDimension};
pub use plank::{CuttingPlan, PlacedPiece, Plank};
pub use types::{Orientation, WarningReason};
