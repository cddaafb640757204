// ==========================================
// 线性排料引擎集成测试
// ==========================================
// 覆盖: 场景B, 锯缝, 从头重扫, 件数/长度守恒, 确定性
// ==========================================

#[path = "test_helpers.rs"]
mod test_helpers;

use plank_cut_planner::domain::{OptimizedPiece, PieceGroup, RawDimension};
use plank_cut_planner::{Material, Orientation, OrientationOptimizer, PieceGrouper, PlankPacker};
use proptest::prelude::*;
use test_helpers::*;

/// 已分配材料的零件（Lwt 摆向）
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
        score: None,
        can_fit: true,
        count,
    }
}

// ==========================================
// 测试1: 场景B - 2500 + 2 + 1500 > 4000
// ==========================================
#[test]
fn test_scenario_b_opens_second_plank() {
    println!("\n=== 测试: 场景B ===");
    let material = plank_material();
    let pieces = vec![fit_piece(1, 2500.0, 1, &material), fit_piece(2, 1500.0, 1, &material)];

    let planks = PlankPacker::new().pack(&pieces);

    assert_eq!(planks.len(), 2);
    assert_eq!(planks[0].placed_pieces.len(), 1);
    assert_eq!(planks[0].placed_pieces[0].cutting_length, 2500.0);
    assert_eq!(planks[0].waste_length, 1500.0);
    assert_eq!(planks[1].placed_pieces[0].cutting_length, 1500.0);
    assert_eq!(planks[1].waste_length, 2500.0);
    assert_plank_invariants(&planks);
    println!("✓ 板数: {}", planks.len());
}

// ==========================================
// 测试2: 恰好填满（首件不计锯缝）
// ==========================================
#[test]
fn test_exact_fill_with_kerf() {
    let material = plank_material();
    // 1999 + 2 + 1999 = 4000
    let pieces = vec![fit_piece(1, 1999.0, 2, &material)];
    let planks = PlankPacker::new().pack(&pieces);

    assert_eq!(planks.len(), 1);
    assert_eq!(planks[0].used_length, 4000.0);
    assert_eq!(planks[0].waste_length, 0.0);
    assert_eq!(planks[0].kerf_length(), 2.0);
}

// ==========================================
// 测试3: 每放一件从最长组重扫
// ==========================================
#[test]
fn test_restart_scan_prefers_longest() {
    let material = Material::new(1, "Rail", 3000.0, 400.0, 37.0);
    let pieces = vec![
        fit_piece(1, 500.0, 4, &material),
        fit_piece(2, 1200.0, 2, &material),
    ];
    let planks = PlankPacker::new().pack(&pieces);

    // 板1: 1200 1200 500; 板2: 500 500 500
    let cuts: Vec<Vec<f64>> = planks
        .iter()
        .map(|p| p.placed_pieces.iter().map(|x| x.cutting_length).collect())
        .collect();
    assert_eq!(cuts, vec![vec![1200.0, 1200.0, 500.0], vec![500.0, 500.0, 500.0]]);
    assert_eq!(planks[0].waste_length, 100.0);
    assert_plank_invariants(&planks);
}

// ==========================================
// 测试4: 任意模型与材料清单的守恒性质
// ==========================================
proptest! {
    #[test]
    fn test_conservation_on_arbitrary_models(source in arb_source(), materials in arb_materials()) {
        let extracted = plank_cut_planner::GeometryIngest::new().extract(&source);
        let groups = PieceGrouper::new().group(&extracted);
        let optimized = OrientationOptimizer::new().optimize(&groups, &materials);
        let planks = PlankPacker::new().pack(&optimized.pieces);

        assert_plank_invariants(&planks);
        assert_count_conservation(&optimized.pieces, &planks);

        // 每块板只使用一种材料, 且与零件分配一致
        for plank in &planks {
            for placed in &plank.placed_pieces {
                let owner = optimized
                    .pieces
                    .iter()
                    .find(|p| p.piece_group.id == placed.piece_group_id)
                    .unwrap();
                prop_assert_eq!(owner.material_id(), Some(plank.material.id));
            }
        }
    }
}

// ==========================================
// 测试5: 确定性
// ==========================================
#[test]
fn test_packing_is_deterministic() {
    let material = plank_material();
    let pieces = vec![
        fit_piece(1, 900.0, 5, &material),
        fit_piece(2, 1300.0, 3, &material),
        fit_piece(3, 900.0, 2, &material),
    ];
    let packer = PlankPacker::new();
    assert_eq!(packer.pack(&pieces), packer.pack(&pieces));
}

// ==========================================
// 测试6: 放不下与件数为零的零件被忽略
// ==========================================
#[test]
fn test_skips_unfit_and_empty() {
    let material = plank_material();
    let mut unfit = fit_piece(1, 5000.0, 1, &material);
    unfit.can_fit = false;
    unfit.assigned_material = None;
    let empty = fit_piece(2, 800.0, 0, &material);

    assert!(PlankPacker::new().pack(&[unfit, empty]).is_empty());
}
