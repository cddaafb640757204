// ==========================================
// 板材下料规划 - 引擎编排器
// ==========================================
// 用途: 协调 提取 -> 分组 -> 摆向优化 -> 排料
// 取消: 仅在顶层阶段之间检查，阶段内部不中断
// ==========================================

use crate::domain::material::Material;
use crate::domain::mesh::MeshSource;
use crate::domain::piece::{OptimizedPiece, PieceGroup, PlanWarning};
use crate::domain::plank::{CuttingPlan, Plank};
use crate::engine::error::{PlannerError, PlannerResult};
use crate::engine::orientation::OptimizeResult;
use crate::engine::{GeometryIngest, OrientationOptimizer, PieceGrouper, PlankPacker};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, instrument};

// ==========================================
// PlanOutcome - 下料结果
// ==========================================
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    // 分组输出
    pub groups: Vec<PieceGroup>,

    // 摆向优化输出（含放不下的零件）
    pub pieces: Vec<OptimizedPiece>,
    pub warnings: Vec<PlanWarning>,

    // 排料输出
    pub plan: CuttingPlan,
}

// ==========================================
// CuttingPlanner - 引擎编排器
// ==========================================
pub struct CuttingPlanner {
    ingest: GeometryIngest,
    grouper: PieceGrouper,
    optimizer: OrientationOptimizer,
    packer: PlankPacker,
}

impl CuttingPlanner {
    /// 模型单位即毫米
    pub fn new() -> Self {
        Self::with_unit_scale(1.0)
    }

    /// 指定模型空间 -> 毫米的换算系数
    pub fn with_unit_scale(unit_scale: f64) -> Self {
        Self {
            ingest: GeometryIngest::with_unit_scale(unit_scale),
            grouper: PieceGrouper::new(),
            optimizer: OrientationOptimizer::new(),
            packer: PlankPacker::new(),
        }
    }

    /// 执行完整流水线
    pub fn plan(&self, source: &MeshSource, materials: &[Material]) -> PlanOutcome {
        let extracted = self.ingest.extract(source);
        let groups = self.grouper.group(&extracted);
        let optimized = self.optimizer.optimize(&groups, materials);
        let planks = self.packer.pack(&optimized.pieces);
        assemble(groups, optimized, planks, materials)
    }

    /// 执行完整流水线（可取消）
    ///
    /// 取消时丢弃全部中间结果，不返回截断的方案
    #[instrument(skip_all, fields(objects = source.objects.len(), materials = materials.len()))]
    pub fn plan_with_cancel(
        &self,
        source: &MeshSource,
        materials: &[Material],
        cancel: &AtomicBool,
    ) -> PlannerResult<PlanOutcome> {
        check_cancel(cancel, "ingest")?;
        let extracted = self.ingest.extract(source);

        check_cancel(cancel, "grouping")?;
        let groups = self.grouper.group(&extracted);

        check_cancel(cancel, "optimize")?;
        let optimized = self.optimizer.optimize(&groups, materials);

        check_cancel(cancel, "pack")?;
        let planks = self.packer.pack(&optimized.pieces);

        Ok(assemble(groups, optimized, planks, materials))
    }
}

fn assemble(
    groups: Vec<PieceGroup>,
    optimized: OptimizeResult,
    planks: Vec<Plank>,
    materials: &[Material],
) -> PlanOutcome {
    let plan = CuttingPlan::new(materials.to_vec(), planks);
    info!(
        plan_id = %plan.plan_id,
        groups = groups.len(),
        planks = plan.planks.len(),
        warnings = optimized.warnings.len(),
        "下料方案生成完成"
    );

    PlanOutcome {
        groups,
        pieces: optimized.pieces,
        warnings: optimized.warnings,
        plan,
    }
}

fn check_cancel(cancel: &AtomicBool, stage: &'static str) -> PlannerResult<()> {
    if cancel.load(Ordering::Relaxed) {
        info!(stage, "下料计算已取消");
        return Err(PlannerError::Cancelled { stage });
    }
    Ok(())
}

impl Default for CuttingPlanner {
    fn default() -> Self {
        Self::new()
    }
}
