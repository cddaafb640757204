// ==========================================
// 板材下料规划 - 零件领域模型
// ==========================================
// RawDimension -> PieceGroup -> OptimizedPiece
// 红线: 适配零件的三向尺寸必须是原始尺寸的排列
// ==========================================

use crate::domain::material::Material;
use crate::domain::types::{Orientation, WarningReason};
use serde::{Deserialize, Serialize};

/// 分组精度: 0.1 mm
pub const GROUPING_SCALE: f64 = 10.0;

/// 规范化分组键（单位 0.1 mm 的整数）
pub type DimensionKey = (i64, i64, i64);

// ==========================================
// RawDimension - 原始包围盒尺寸
// ==========================================
// 对应实体局部 X/Y/Z 的包围盒跨度，无固定轴向含义
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawDimension {
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
}

impl RawDimension {
    pub fn new(length: f64, width: f64, thickness: f64) -> Self {
        Self {
            length,
            width,
            thickness,
        }
    }

    /// 乘以单位换算系数（模型空间 -> 毫米）
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.length * factor,
            self.width * factor,
            self.thickness * factor,
        )
    }

    /// 分组键：每个分量四舍五入到 0.1 mm
    pub fn canonical_key(&self) -> DimensionKey {
        (
            round_to_key(self.length),
            round_to_key(self.width),
            round_to_key(self.thickness),
        )
    }

}

fn round_to_key(value: f64) -> i64 {
    (value * GROUPING_SCALE).round() as i64
}

// ==========================================
// PieceGroup - 零件组
// ==========================================
// 相同规范尺寸的实体合并为一个优化单元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceGroup {
    pub id: usize,                 // 显示顺序 (从 1 开始)
    pub dims: RawDimension,        // 代表尺寸 (首个成员的原始尺寸)
    pub count: usize,              // 件数 (>= 1)
    pub source_names: Vec<String>, // 来源实体名 (按出现顺序)
}

impl PieceGroup {
    /// 显示名：首个来源实体名
    pub fn display_name(&self) -> &str {
        self.source_names.first().map(String::as_str).unwrap_or("")
    }
}

// ==========================================
// OptimizedPiece - 摆向优化结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedPiece {
    pub piece_group: PieceGroup,
    pub cutting_length: f64,
    pub final_width: f64,
    pub final_thickness: f64,
    pub orientation: Option<Orientation>,
    pub assigned_material: Option<Material>,
    pub score: Option<f64>,
    pub can_fit: bool,
    pub count: usize,
}

impl OptimizedPiece {
    /// 无可用材料时的结果（保留原始尺寸）
    pub fn unfit(piece_group: PieceGroup) -> Self {
        let dims = piece_group.dims;
        let count = piece_group.count;
        Self {
            piece_group,
            cutting_length: dims.length,
            final_width: dims.width,
            final_thickness: dims.thickness,
            orientation: None,
            assigned_material: None,
            score: None,
            can_fit: false,
            count,
        }
    }

    pub fn orientation_label(&self) -> &'static str {
        self.orientation.map(Orientation::label).unwrap_or("-")
    }

    /// 已分配材料的ID
    pub fn material_id(&self) -> Option<i64> {
        self.assigned_material.as_ref().map(|m| m.id)
    }
}

// ==========================================
// PlanWarning - 非致命告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWarning {
    pub piece_group_id: usize,
    pub source_names: Vec<String>,
    pub original_dims: RawDimension,
    pub reason: WarningReason,
}

impl PlanWarning {
    pub fn for_piece(piece: &OptimizedPiece, reason: WarningReason) -> Self {
        Self {
            piece_group_id: piece.piece_group.id,
            source_names: piece.piece_group.source_names.clone(),
            original_dims: piece.piece_group.dims,
            reason,
        }
    }
}
