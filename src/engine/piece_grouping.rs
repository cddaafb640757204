// ==========================================
// 板材下料规划 - 零件分组引擎
// ==========================================
// 职责: 规范化近似相等的尺寸三元组, 合并为零件组
// 规则: 每分量取整到 0.1 mm 仅作分组键, 组尺寸保留首个成员的原始值; 插入顺序稳定
// ==========================================

use crate::domain::piece::{DimensionKey, PieceGroup};
use crate::engine::geometry_ingest::ExtractedPiece;
use std::collections::HashMap;
use tracing::{info, instrument};

// ==========================================
// PieceGrouper - 零件分组引擎
// ==========================================
pub struct PieceGrouper {
    // 无状态引擎，不需要注入依赖
}

impl PieceGrouper {
    pub fn new() -> Self {
        Self {}
    }

    /// 分组
    ///
    /// # 参数
    /// - `pieces`: 几何提取结果（按声明顺序）
    ///
    /// # 返回
    /// 零件组列表，顺序 = 各分组键首次出现的顺序；id 从 1 开始
    #[instrument(skip(self, pieces), fields(pieces = pieces.len()))]
    pub fn group(&self, pieces: &[ExtractedPiece]) -> Vec<PieceGroup> {
        let mut groups: Vec<PieceGroup> = Vec::new();
        let mut index_by_key: HashMap<DimensionKey, usize> = HashMap::new();

        for piece in pieces {
            let key = piece.dims.canonical_key();
            match index_by_key.get(&key) {
                Some(&idx) => {
                    let group = &mut groups[idx];
                    group.count += 1;
                    group.source_names.push(piece.name.clone());
                }
                None => {
                    index_by_key.insert(key, groups.len());
                    groups.push(PieceGroup {
                        id: groups.len() + 1,
                        dims: piece.dims,
                        count: 1,
                        source_names: vec![piece.name.clone()],
                    });
                }
            }
        }

        info!(groups = groups.len(), "零件分组完成");
        groups
    }
}

impl Default for PieceGrouper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::piece::RawDimension;

    fn extracted(name: &str, l: f64, w: f64, t: f64) -> ExtractedPiece {
        ExtractedPiece {
            name: name.to_string(),
            dims: RawDimension::new(l, w, t),
        }
    }

    #[test]
    fn test_noise_merged_and_order_stable() {
        let pieces = vec![
            extracted("Side_L", 720.0, 560.0, 18.0),
            extracted("Shelf_1", 764.0, 540.0, 18.0),
            extracted("Side_R", 720.00004, 559.99997, 18.0),
            extracted("Shelf_2", 764.0, 540.0, 18.0),
            extracted("Back", 800.0, 764.0, 3.0),
        ];

        let groups = PieceGrouper::new().group(&pieces);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].id, 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].source_names, vec!["Side_L", "Side_R"]);
        assert_eq!(groups[0].dims, RawDimension::new(720.0, 560.0, 18.0));
        assert_eq!(groups[1].source_names, vec!["Shelf_1", "Shelf_2"]);
        assert_eq!(groups[2].id, 3);
        assert_eq!(groups[2].count, 1);
    }

    #[test]
    fn test_group_keeps_first_member_raw_dims() {
        // 4000.04 与 4000.0 同键, 但组尺寸不能被取整改写
        let pieces = vec![
            extracted("Beam_A", 4000.04, 300.0, 18.0),
            extracted("Beam_B", 4000.0, 300.0, 18.0),
        ];

        let groups = PieceGrouper::new().group(&pieces);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].dims, RawDimension::new(4000.04, 300.0, 18.0));
    }

    #[test]
    fn test_axis_order_matters_for_key() {
        // 分组键按轴区分, 相同尺寸不同轴向视为不同组
        let pieces = vec![
            extracted("A", 100.0, 50.0, 18.0),
            extracted("B", 50.0, 100.0, 18.0),
        ];
        assert_eq!(PieceGrouper::new().group(&pieces).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(PieceGrouper::new().group(&[]).is_empty());
    }
}
