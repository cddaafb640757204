// ==========================================
// 板材下料规划 - 线性排料引擎
// ==========================================
// 职责: 按材料分区, 沿长度方向逐板贪心排料
// 输入: 摆向优化结果（仅 can_fit 的零件参与）
// 输出: Vec<Plank>（全局连续编号）
// ==========================================
// 红线:
// - 锯缝只计在同板相邻零件之间（首件前、末件后均不计）
// - 每放置一件后从排序列表头部重新扫描（不可改为续扫）
// - used_length + waste_length == material.length
// ==========================================

use crate::domain::material::Material;
use crate::domain::piece::OptimizedPiece;
use crate::domain::plank::{PlacedPiece, Plank};
use std::cmp::Ordering;
use tracing::{debug, error, info, instrument};

/// 排料工作副本（件数会被递减）
#[derive(Debug, Clone)]
struct WorkingGroup<'a> {
    piece: &'a OptimizedPiece,
    remaining: usize,
}

/// 同一材料的分区
struct MaterialPartition<'a> {
    material: &'a Material,
    groups: Vec<WorkingGroup<'a>>,
}

// ==========================================
// PlankPacker - 线性排料引擎
// ==========================================
pub struct PlankPacker {
    // 无状态引擎，不需要注入依赖
}

impl PlankPacker {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排料
    ///
    /// 规则:
    /// 1) 按 assigned_material.id 分区, 分区顺序 = 该材料首个零件组出现的顺序
    /// 2) 分区内按 cutting_length 降序稳定排序
    /// 3) 逐板填充: 找到第一个放得下的组放一件, 然后从头重扫; 一轮无放置则封板
    #[instrument(skip(self, pieces), fields(pieces = pieces.len()))]
    pub fn pack(&self, pieces: &[OptimizedPiece]) -> Vec<Plank> {
        let partitions = self.partition(pieces);
        let mut planks = Vec::new();
        let mut next_number = 1usize;

        for mut partition in partitions {
            // 稳定排序: 平局保持优化输出顺序
            partition.groups.sort_by(|a, b| {
                b.piece
                    .cutting_length
                    .partial_cmp(&a.piece.cutting_length)
                    .unwrap_or(Ordering::Equal)
            });

            let before = planks.len();
            self.pack_partition(&mut partition, &mut next_number, &mut planks);

            info!(
                material_id = partition.material.id,
                material = %partition.material.name,
                planks = planks.len() - before,
                "材料分区排料完成"
            );
        }

        planks
    }

    /// 按材料分区（忽略放不下的零件）
    fn partition<'a>(&self, pieces: &'a [OptimizedPiece]) -> Vec<MaterialPartition<'a>> {
        let mut partitions: Vec<MaterialPartition<'a>> = Vec::new();

        for piece in pieces {
            let material = match (&piece.assigned_material, piece.can_fit) {
                (Some(m), true) => m,
                _ => continue,
            };
            if piece.count == 0 {
                continue;
            }

            let working = WorkingGroup {
                piece,
                remaining: piece.count,
            };
            match partitions.iter_mut().find(|p| p.material.id == material.id) {
                Some(partition) => partition.groups.push(working),
                None => partitions.push(MaterialPartition {
                    material,
                    groups: vec![working],
                }),
            }
        }

        partitions
    }

    /// 填充单个材料分区
    fn pack_partition(
        &self,
        partition: &mut MaterialPartition<'_>,
        next_number: &mut usize,
        planks: &mut Vec<Plank>,
    ) {
        let material = partition.material;

        while partition.groups.iter().any(|g| g.remaining > 0) {
            let mut remaining_length = material.length;
            let mut placed: Vec<PlacedPiece> = Vec::new();

            // 内层: 每放一件从头重扫
            while let Some(idx) = self.first_fitting(&partition.groups, remaining_length, !placed.is_empty(), material.saw_kerf) {
                let group = &mut partition.groups[idx];
                let required = required_length(group.piece.cutting_length, !placed.is_empty(), material.saw_kerf);

                remaining_length -= required;
                group.remaining -= 1;
                placed.push(PlacedPiece {
                    piece_group_id: group.piece.piece_group.id,
                    label: group.piece.piece_group.display_name().to_string(),
                    cutting_length: group.piece.cutting_length,
                    final_width: group.piece.final_width,
                    final_thickness: group.piece.final_thickness,
                });

                debug!(
                    plank = *next_number,
                    piece_group_id = group.piece.piece_group.id,
                    required,
                    remaining_length,
                    "放置零件"
                );
            }

            if placed.is_empty() {
                // 可行性已在摆向优化阶段保证, 此处仅防止死循环
                error!(
                    material_id = material.id,
                    "空板无法放置任何零件, 终止该材料排料"
                );
                break;
            }

            planks.push(Plank {
                number: *next_number,
                material: material.clone(),
                placed_pieces: placed,
                used_length: material.length - remaining_length,
                waste_length: remaining_length,
            });
            *next_number += 1;
        }
    }

    /// 排序列表中第一个仍有剩余且放得下的组
    fn first_fitting(
        &self,
        groups: &[WorkingGroup<'_>],
        remaining_length: f64,
        has_pieces: bool,
        saw_kerf: f64,
    ) -> Option<usize> {
        groups.iter().position(|g| {
            g.remaining > 0
                && required_length(g.piece.cutting_length, has_pieces, saw_kerf) <= remaining_length
        })
    }
}

/// 放置一件所需长度（非首件需加锯缝）
fn required_length(cutting_length: f64, has_pieces: bool, saw_kerf: f64) -> f64 {
    if has_pieces {
        cutting_length + saw_kerf
    } else {
        cutting_length
    }
}

impl Default for PlankPacker {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::piece::{PieceGroup, RawDimension};
    use crate::domain::types::Orientation;

    fn fit_piece(id: usize, cut: f64, count: usize, material: &Material) -> OptimizedPiece {
        OptimizedPiece {
            piece_group: PieceGroup {
                id,
                dims: RawDimension::new(cut, 100.0, 18.0),
                count,
                source_names: vec![format!("P{}", id)],
            },
            cutting_length: cut,
            final_width: 100.0,
            final_thickness: 18.0,
            orientation: Some(Orientation::Lwt),
            assigned_material: Some(material.clone()),
            score: Some(cut),
            can_fit: true,
            count,
        }
    }

    fn plank_material() -> Material {
        Material::new(1, "Plank", 4000.0, 400.0, 37.0).with_kerf(2.0)
    }

    #[test]
    fn test_scenario_a_single_piece() {
        let m = plank_material();
        let planks = PlankPacker::new().pack(&[fit_piece(1, 2000.0, 1, &m)]);

        assert_eq!(planks.len(), 1);
        assert_eq!(planks[0].number, 1);
        assert_eq!(planks[0].used_length, 2000.0);
        assert_eq!(planks[0].waste_length, 2000.0);
    }

    #[test]
    fn test_scenario_b_kerf_forces_new_plank() {
        let m = plank_material();
        let planks = PlankPacker::new().pack(&[fit_piece(1, 1500.0, 1, &m), fit_piece(2, 2500.0, 1, &m)]);

        assert_eq!(planks.len(), 2);
        assert_eq!(planks[0].placed_pieces[0].cutting_length, 2500.0);
        assert_eq!(planks[0].waste_length, 1500.0);
        assert_eq!(planks[1].placed_pieces[0].cutting_length, 1500.0);
        assert_eq!(planks[1].waste_length, 2500.0);
    }

    #[test]
    fn test_kerf_between_pieces_only() {
        let m = plank_material();
        let planks = PlankPacker::new().pack(&[fit_piece(1, 1000.0, 3, &m)]);

        assert_eq!(planks.len(), 1);
        // 1000 + 2 + 1000 + 2 + 1000
        assert_eq!(planks[0].used_length, 3004.0);
        assert_eq!(planks[0].waste_length, 996.0);
        assert_eq!(planks[0].kerf_length(), 4.0);
    }

    #[test]
    fn test_restart_scan_prefers_largest_remaining() {
        // 排序后: 3000(1 件), 900(2 件), 500(3 件)
        // 板1: 3000 -> 剩1000, 900+2 -> 剩98
        // 板2: 900 -> 剩3100, 500+2 ×3 -> 剩1594
        let m = plank_material();
        let planks = PlankPacker::new().pack(&[
            fit_piece(1, 500.0, 3, &m),
            fit_piece(2, 3000.0, 1, &m),
            fit_piece(3, 900.0, 2, &m),
        ]);

        assert_eq!(planks.len(), 2);
        let lens = |p: &Plank| p.placed_pieces.iter().map(|x| x.cutting_length).collect::<Vec<_>>();
        assert_eq!(lens(&planks[0]), vec![3000.0, 900.0]);
        assert_eq!(lens(&planks[1]), vec![900.0, 500.0, 500.0, 500.0]);
        assert_eq!(planks[0].waste_length, 98.0);
        assert_eq!(planks[1].waste_length, 1594.0);
    }

    #[test]
    fn test_equal_lengths_keep_input_order() {
        let m = plank_material();
        let planks = PlankPacker::new().pack(&[fit_piece(7, 1000.0, 1, &m), fit_piece(3, 1000.0, 1, &m)]);
        let ids: Vec<usize> = planks[0].placed_pieces.iter().map(|p| p.piece_group_id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn test_global_numbering_across_materials() {
        let a = plank_material();
        let b = Material::new(2, "Sheet", 2500.0, 1250.0, 18.0).with_kerf(3.0);
        let planks = PlankPacker::new().pack(&[
            fit_piece(1, 2400.0, 2, &b),
            fit_piece(2, 3500.0, 2, &a),
            fit_piece(3, 100.0, 1, &b),
        ]);

        let summary: Vec<(usize, i64)> = planks.iter().map(|p| (p.number, p.material.id)).collect();
        // 材料 2 先出现; 2400 后剩 100, 100 + 3 锯缝放不下
        assert_eq!(summary, vec![(1, 2), (2, 2), (3, 2), (4, 1), (5, 1)]);
        assert_eq!(planks[0].placed_pieces.len(), 1);
        assert_eq!(planks[1].placed_pieces[0].cutting_length, 2400.0);
        assert_eq!(planks[2].placed_pieces[0].cutting_length, 100.0);
        assert_eq!(planks[2].waste_length, 2400.0);
    }

    #[test]
    fn test_unfit_pieces_excluded() {
        let m = plank_material();
        let mut unfit = fit_piece(2, 5000.0, 1, &m);
        unfit.can_fit = false;
        unfit.assigned_material = None;

        let planks = PlankPacker::new().pack(&[fit_piece(1, 1000.0, 1, &m), unfit]);
        assert_eq!(planks.len(), 1);
        assert!(planks.iter().all(|p| p.count_of(2) == 0));
    }

    #[test]
    fn test_empty_input() {
        assert!(PlankPacker::new().pack(&[]).is_empty());
    }
}
