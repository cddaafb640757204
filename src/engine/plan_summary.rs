// ==========================================
// 板材下料规划 - 方案汇总
// ==========================================
// 职责: 从板列表派生只读统计（纯函数，可随时重算）
// 红线: 汇总不作为事实来源落库
// ==========================================

use crate::domain::plank::{CuttingPlan, Plank};
use serde::{Deserialize, Serialize};

/// 单材料用量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub material_id: i64,
    pub material_name: String,
    pub plank_count: usize,
    pub used_length: f64,
    pub waste_length: f64,
    pub cost: Option<f64>, // 仅当材料有单价
}

/// 方案汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub plank_count: usize,
    pub placed_piece_count: usize,
    pub total_waste_length: f64,
    pub efficiency: f64, // Σ used / Σ material.length; 无板时为 0
    pub materials: Vec<MaterialUsage>, // 顺序 = 首次出现顺序
    pub total_cost: Option<f64>,       // 无任何有价材料时缺省（不是 0）
}

impl PlanSummary {
    /// 重算方案汇总（不落库）
    pub fn from_plan(plan: &CuttingPlan) -> Self {
        Self::from_planks(&plan.planks)
    }

    /// 从板列表归约
    pub fn from_planks(planks: &[Plank]) -> Self {
        let mut materials: Vec<MaterialUsage> = Vec::new();
        let mut placed_piece_count = 0usize;
        let mut total_waste_length = 0.0;
        let mut total_used = 0.0;
        let mut total_stock = 0.0;

        for plank in planks {
            placed_piece_count += plank.placed_pieces.len();
            total_waste_length += plank.waste_length;
            total_used += plank.used_length;
            total_stock += plank.material.length;

            let idx = match materials.iter().position(|u| u.material_id == plank.material.id) {
                Some(idx) => idx,
                None => {
                    materials.push(MaterialUsage {
                        material_id: plank.material.id,
                        material_name: plank.material.name.clone(),
                        plank_count: 0,
                        used_length: 0.0,
                        waste_length: 0.0,
                        cost: None,
                    });
                    materials.len() - 1
                }
            };
            let usage = &mut materials[idx];
            usage.plank_count += 1;
            usage.used_length += plank.used_length;
            usage.waste_length += plank.waste_length;
            let units = usage.plank_count as f64;
            usage.cost = plank.material.price_per_unit.map(|price| units * price);
        }

        let total_cost = materials
            .iter()
            .filter_map(|u| u.cost)
            .fold(None, |acc: Option<f64>, c| Some(acc.unwrap_or(0.0) + c));

        let efficiency = if total_stock > 0.0 {
            total_used / total_stock
        } else {
            0.0
        };

        Self {
            plank_count: planks.len(),
            placed_piece_count,
            total_waste_length,
            efficiency,
            materials,
            total_cost,
        }
    }

    /// 指定材料的板数
    pub fn planks_of(&self, material_id: i64) -> usize {
        self.materials
            .iter()
            .find(|u| u.material_id == material_id)
            .map(|u| u.plank_count)
            .unwrap_or(0)
    }
}
