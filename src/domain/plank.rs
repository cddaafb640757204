// ==========================================
// 板材下料规划 - 下料方案领域模型
// ==========================================
// 红线: used_length + waste_length == material.length
// 持久化: 仅 planks + materials 为事实来源，汇总由引擎层按需重算
// ==========================================

use crate::domain::material::Material;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// PlacedPiece - 板上已排零件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub piece_group_id: usize, // 来源零件组
    pub label: String,         // 来源零件组显示名
    pub cutting_length: f64,
    pub final_width: f64,
    pub final_thickness: f64,
}

// ==========================================
// Plank - 一根/一张原材料
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plank {
    pub number: usize, // 全局编号 (从 1 开始)
    pub material: Material,
    pub placed_pieces: Vec<PlacedPiece>,
    pub used_length: f64,  // 零件 + 零件间锯缝
    pub waste_length: f64, // 尾料 (不含锯缝)
}

impl Plank {
    /// 板上零件间的锯缝总长
    pub fn kerf_length(&self) -> f64 {
        self.placed_pieces.len().saturating_sub(1) as f64 * self.material.saw_kerf
    }

    /// 利用率 (0.0 - 1.0)
    pub fn utilization(&self) -> f64 {
        if self.material.length <= 0.0 {
            return 0.0;
        }
        self.used_length / self.material.length
    }

    /// 指定零件组在本板上的件数
    pub fn count_of(&self, piece_group_id: usize) -> usize {
        self.placed_pieces
            .iter()
            .filter(|p| p.piece_group_id == piece_group_id)
            .count()
    }
}

// ==========================================
// CuttingPlan - 可持久化的下料方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    pub plan_id: String,
    pub created_at: DateTime<Utc>,
    pub materials: Vec<Material>,
    pub planks: Vec<Plank>,
}

impl CuttingPlan {
    pub fn new(materials: Vec<Material>, planks: Vec<Plank>) -> Self {
        Self {
            plan_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            materials,
            planks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.planks.is_empty()
    }
}
