// ==========================================
// 板材下料规划 - 摆向优化引擎
// ==========================================
// 职责: 为每个零件组选出唯一最优 (材料, 摆向)
// 输入: 零件组列表 + 材料列表（只读）
// 输出: OptimizedPiece 列表（含放不下的零件）+ 告警
// ==========================================
// 规则:
// 1) 单材料内: 可行摆向中 cut 最小者; 平局取枚举序靠前者
// 2) 跨材料: score 最小者; 平局取材料列表中靠前者
// 3) score = cut + 100 × (厚度余量) + 0.1 × (宽度余量)
// ==========================================

use crate::domain::material::Material;
use crate::domain::piece::{OptimizedPiece, PieceGroup, PlanWarning};
use crate::domain::types::{Orientation, WarningReason};
use tracing::{debug, info, instrument, warn};

/// 厚度余量权重
pub const THICKNESS_SLACK_WEIGHT: f64 = 100.0;

/// 宽度余量权重
pub const WIDTH_SLACK_WEIGHT: f64 = 0.1;

/// 单材料下选中的摆向
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationChoice {
    pub orientation: Orientation,
    pub cut: f64,
    pub width: f64,
    pub thick: f64,
    pub score: f64,
}

/// 优化输出
#[derive(Debug, Clone, Default)]
pub struct OptimizeResult {
    pub pieces: Vec<OptimizedPiece>,
    pub warnings: Vec<PlanWarning>,
}

impl OptimizeResult {
    /// 可排料的零件
    pub fn fit_pieces(&self) -> impl Iterator<Item = &OptimizedPiece> {
        self.pieces.iter().filter(|p| p.can_fit)
    }
}

// ==========================================
// OrientationOptimizer - 摆向优化引擎
// ==========================================
pub struct OrientationOptimizer {
    // 无状态引擎，不需要注入依赖
}

impl OrientationOptimizer {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 优化全部零件组
    #[instrument(skip(self, groups, materials), fields(
        groups = groups.len(),
        materials = materials.len()
    ))]
    pub fn optimize(&self, groups: &[PieceGroup], materials: &[Material]) -> OptimizeResult {
        let mut result = OptimizeResult::default();

        for group in groups {
            let piece = self.optimize_group(group, materials);
            if !piece.can_fit {
                let reason = if materials.is_empty() {
                    WarningReason::NoMaterialsConfigured
                } else {
                    WarningReason::NoMaterialFits
                };
                warn!(
                    piece_group_id = group.id,
                    name = %group.display_name(),
                    length = group.dims.length,
                    width = group.dims.width,
                    thickness = group.dims.thickness,
                    reason = %reason,
                    "零件组无可用材料"
                );
                result.warnings.push(PlanWarning::for_piece(&piece, reason));
            }
            result.pieces.push(piece);
        }

        info!(
            fit = result.pieces.len() - result.warnings.len(),
            unfit = result.warnings.len(),
            "摆向优化完成"
        );
        result
    }

    /// 优化单个零件组
    pub fn optimize_group(&self, group: &PieceGroup, materials: &[Material]) -> OptimizedPiece {
        let mut best: Option<(&Material, OrientationChoice)> = None;

        for material in materials {
            let choice = match self.best_orientation(group, material) {
                Some(c) => c,
                None => continue,
            };
            debug!(
                piece_group_id = group.id,
                material_id = material.id,
                orientation = %choice.orientation,
                score = choice.score,
                "候选材料"
            );

            // 严格小于：平局保留先出现的材料
            let better = match &best {
                Some((_, current)) => choice.score < current.score,
                None => true,
            };
            if better {
                best = Some((material, choice));
            }
        }

        match best {
            Some((material, choice)) => OptimizedPiece {
                piece_group: group.clone(),
                cutting_length: choice.cut,
                final_width: choice.width,
                final_thickness: choice.thick,
                orientation: Some(choice.orientation),
                assigned_material: Some(material.clone()),
                score: Some(choice.score),
                can_fit: true,
                count: group.count,
            },
            None => OptimizedPiece::unfit(group.clone()),
        }
    }

    /// 单材料下的最优摆向
    ///
    /// # 返回
    /// - `Some`: 可行摆向中 cut 最小者（平局取枚举序靠前）
    /// - `None`: 六种摆向均不可行
    pub fn best_orientation(&self, group: &PieceGroup, material: &Material) -> Option<OrientationChoice> {
        let dims = group.dims;
        let mut best: Option<(Orientation, f64, f64, f64)> = None;

        for orientation in Orientation::ALL {
            let (cut, width, thick) = orientation.apply(dims.length, dims.width, dims.thickness);
            if !material.admits(cut, width, thick) {
                continue;
            }
            let better = match best {
                Some((_, best_cut, _, _)) => cut < best_cut,
                None => true,
            };
            if better {
                best = Some((orientation, cut, width, thick));
            }
        }

        best.map(|(orientation, cut, width, thick)| OrientationChoice {
            orientation,
            cut,
            width,
            thick,
            score: score(material, cut, width, thick),
        })
    }
}

/// 评分（越小越优）
pub fn score(material: &Material, cut: f64, width: f64, thick: f64) -> f64 {
    cut + THICKNESS_SLACK_WEIGHT * (material.thickness - thick)
        + WIDTH_SLACK_WEIGHT * (material.width - width)
}

impl Default for OrientationOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
