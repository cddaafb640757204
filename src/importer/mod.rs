// ==========================================
// 板材下料规划 - 导入层
// ==========================================
// 职责: 外部数据导入,生成领域数据
// 支持: OBJ 网格文本, 材料清单 (CSV / Excel / JSON)
// ==========================================

pub mod error;
pub mod material_catalog;
pub mod mesh_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use material_catalog::{map_records, validate_materials, MaterialCatalogLoader};
pub use mesh_parser::{ObjMeshParser, ParseReport};
