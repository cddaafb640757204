// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 构造网格源、材料与 proptest 策略，校验方案不变量
// ==========================================

#![allow(dead_code)]

use plank_cut_planner::domain::{MeshObject, MeshSource, OptimizedPiece, Plank};
use plank_cut_planner::Material;
use proptest::prelude::*;

pub const EPS: f64 = 1e-6;

/// 两个对角顶点构成的长方体对象
pub fn box_object(name: &str, l: f64, w: f64, t: f64) -> MeshObject {
    MeshObject::with_vertices(
        name,
        vec![[0.0, 0.0, 0.0], [l, 0.0, 0.0], [0.0, w, 0.0], [l, w, t]],
    )
}

/// 常用板材: 4000 x 400 x 37, 锯缝 2
pub fn plank_material() -> Material {
    Material::new(1, "Plank 37", 4000.0, 400.0, 37.0).with_kerf(2.0)
}

/// 常用芯板: 2500 x 1250 x 18, 锯缝 3, 有单价
pub fn sheet_material() -> Material {
    Material::new(2, "Ply 18", 2500.0, 1250.0, 18.0)
        .with_kerf(3.0)
        .with_price(42.0)
}

// ==========================================
// proptest 策略
// ==========================================

/// 零件尺寸 (L, W, T)，不预先取整；部分超出所有材料
pub fn arb_dims() -> impl Strategy<Value = (f64, f64, f64)> {
    (1.0f64..4500.0, 1.0f64..600.0, 0.5f64..45.0)
}

/// 家具模型: 每个基础零件复制 1..=3 件，副本带 ±0.04 mm 的建模噪声
pub fn arb_source() -> impl Strategy<Value = MeshSource> {
    prop::collection::vec((arb_dims(), 1usize..=3, -0.04f64..0.04), 1..25).prop_map(|parts| {
        let mut objects = Vec::new();
        for (i, ((l, w, t), copies, noise)) in parts.into_iter().enumerate() {
            for c in 0..copies {
                let jitter = if c == 0 { 0.0 } else { noise };
                objects.push(box_object(
                    &format!("Part_{:03}_{}", i, c),
                    l + jitter,
                    w - jitter,
                    t,
                ));
            }
        }
        MeshSource::new(objects)
    })
}

/// 材料清单: 0..4 种, id 从 1 开始唯一, 锯缝 0..5 mm
pub fn arb_materials() -> impl Strategy<Value = Vec<Material>> {
    prop::collection::vec(
        (500.0f64..5000.0, 50.0f64..1300.0, 3.0f64..40.0, 0.0f64..5.0),
        0..4,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (length, width, thickness, kerf))| {
                Material::new(i as i64 + 1, format!("Stock {}", i + 1), length, width, thickness)
                    .with_kerf(kerf)
            })
            .collect()
    })
}

/// 校验长度守恒与放置可行性
pub fn assert_plank_invariants(planks: &[Plank]) {
    for (i, plank) in planks.iter().enumerate() {
        assert_eq!(plank.number, i + 1, "板编号必须全局连续");
        assert!(
            (plank.used_length + plank.waste_length - plank.material.length).abs() < EPS,
            "板 {} 长度不守恒",
            plank.number
        );
        assert!(plank.waste_length >= -EPS);
        assert!(!plank.placed_pieces.is_empty());

        let mut consumed = 0.0;
        for (j, piece) in plank.placed_pieces.iter().enumerate() {
            let required = if j == 0 {
                piece.cutting_length
            } else {
                piece.cutting_length + plank.material.saw_kerf
            };
            assert!(consumed + required <= plank.material.length + EPS);
            assert!(piece.final_width <= plank.material.width);
            assert!(piece.final_thickness <= plank.material.thickness);
            consumed += required;
        }
        assert!((consumed - plank.used_length).abs() < EPS);
    }
}

/// 校验件数守恒
pub fn assert_count_conservation(pieces: &[OptimizedPiece], planks: &[Plank]) {
    for piece in pieces {
        let placed: usize = planks.iter().map(|p| p.count_of(piece.piece_group.id)).sum();
        if piece.can_fit {
            assert_eq!(placed, piece.piece_group.count, "零件组 {} 件数不守恒", piece.piece_group.id);
        } else {
            assert_eq!(placed, 0, "放不下的零件组 {} 不应出现在板上", piece.piece_group.id);
        }
    }
}

/// 排序后的三元组
pub fn sorted3(a: f64, b: f64, c: f64) -> [f64; 3] {
    let mut v = [a, b, c];
    v.sort_by(|x, y| x.partial_cmp(y).unwrap());
    v
}
