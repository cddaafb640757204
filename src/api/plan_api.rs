// ==========================================
// 板材下料规划 - 下料方案 API
// ==========================================
// 职责: 输入校验 + 导入 + 调用引擎编排器
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::config::PlannerConfig;
use crate::domain::material::Material;
use crate::domain::mesh::MeshSource;
use crate::domain::piece::{OptimizedPiece, PlanWarning};
use crate::domain::plank::CuttingPlan;
use crate::engine::display_color::color_for;
use crate::engine::{CuttingPlanner, PlanOutcome, PlanSummary};
use crate::importer::{validate_materials, MaterialCatalogLoader, ObjMeshParser, ParseReport};

// ==========================================
// PlanResponse - 下料方案响应
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub pieces: Vec<OptimizedPiece>,
    pub warnings: Vec<PlanWarning>,
    pub plan: CuttingPlan,
    pub summary: PlanSummary,
    pub parse_report: ParseReport,
    // 渲染层使用的零件组颜色（同尺寸同色）
    pub piece_colors: Vec<PieceColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceColor {
    pub piece_group_id: usize,
    pub color: String,
}

impl PlanResponse {
    fn from_outcome(outcome: PlanOutcome, parse_report: ParseReport) -> Self {
        let summary = PlanSummary::from_plan(&outcome.plan);
        let piece_colors = outcome
            .pieces
            .iter()
            .map(|p| PieceColor {
                piece_group_id: p.piece_group.id,
                color: color_for(&p.piece_group.dims).to_string(),
            })
            .collect();
        Self {
            piece_colors,
            pieces: outcome.pieces,
            warnings: outcome.warnings,
            plan: outcome.plan,
            summary,
            parse_report,
        }
    }
}

// ==========================================
// PlanApi - 下料方案 API
// ==========================================
pub struct PlanApi {
    config: PlannerConfig,
}

impl PlanApi {
    /// 创建新的PlanApi实例
    pub fn new(config: PlannerConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 从 OBJ 文本生成下料方案
    ///
    /// # 参数
    /// - text: OBJ 文本
    /// - materials: 材料列表（不会被修改）
    pub fn plan_from_obj_text(&self, text: &str, materials: &[Material]) -> ApiResult<PlanResponse> {
        let (source, report) = ObjMeshParser.parse_str(text);
        self.plan_from_source(&source, materials, report)
    }

    /// 从网格源生成下料方案
    pub fn plan_from_source(
        &self,
        source: &MeshSource,
        materials: &[Material],
        parse_report: ParseReport,
    ) -> ApiResult<PlanResponse> {
        self.plan_with_cancel(source, materials, parse_report, &AtomicBool::new(false))
    }

    /// 从网格源生成下料方案（可取消）
    pub fn plan_with_cancel(
        &self,
        source: &MeshSource,
        materials: &[Material],
        parse_report: ParseReport,
        cancel: &AtomicBool,
    ) -> ApiResult<PlanResponse> {
        // 材料列表为空是可报告的配置状态, 不是错误
        validate_materials(materials)?;

        let planner = CuttingPlanner::with_unit_scale(self.config.model_unit_scale);
        let outcome = planner.plan_with_cancel(source, materials, cancel)?;
        Ok(PlanResponse::from_outcome(outcome, parse_report))
    }

    /// 从文件生成下料方案
    ///
    /// # 参数
    /// - mesh_path: OBJ 文件
    /// - materials_path: 材料清单；为空时使用配置中的默认路径
    pub fn plan_from_files(
        &self,
        mesh_path: &Path,
        materials_path: Option<&Path>,
    ) -> ApiResult<PlanResponse> {
        let materials_path: PathBuf = materials_path
            .map(Path::to_path_buf)
            .or_else(|| self.config.materials_path.clone())
            .ok_or_else(|| ApiError::InvalidInput("未指定材料清单".to_string()))?;

        let materials = MaterialCatalogLoader.load(&materials_path)?;
        let (source, report) = ObjMeshParser.parse_file(mesh_path)?;

        info!(
            mesh = %mesh_path.display(),
            materials = %materials_path.display(),
            "开始生成下料方案"
        );
        self.plan_from_source(&source, &materials, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CABINET: &str = "\
o Side_L
v 0 0 0
v 2000 300 18
o Side_R
v 0 0 0
v 2000 300 18
o Shelf
v 0 0 0
v 300 1500 18
";

    #[test]
    fn test_plan_from_obj_text() {
        let api = PlanApi::new(PlannerConfig::default()).unwrap();
        let materials = vec![Material::new(1, "Plank", 4000.0, 400.0, 37.0).with_kerf(2.0)];

        let response = api.plan_from_obj_text(CABINET, &materials).unwrap();

        assert_eq!(response.pieces.len(), 2);
        assert!(response.warnings.is_empty());
        // Shelf 摆向: cut=1500, width=300, thick=18
        assert_eq!(response.pieces[1].cutting_length, 1500.0);
        // 板1: 2000 + 2 + 1500; 板2: 2000
        assert_eq!(response.summary.plank_count, 2);
        assert_eq!(response.summary.placed_piece_count, 3);
        assert_eq!(response.piece_colors.len(), 2);
        assert_eq!(response.piece_colors[0].piece_group_id, 1);
    }

    #[test]
    fn test_invalid_materials_rejected() {
        let api = PlanApi::new(PlannerConfig::default()).unwrap();
        let materials = vec![Material::new(1, "Bad", -1.0, 400.0, 37.0)];
        let result = api.plan_from_obj_text(CABINET, &materials);
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_materials_reported_not_failed() {
        let api = PlanApi::new(PlannerConfig::default()).unwrap();
        let response = api.plan_from_obj_text(CABINET, &[]).unwrap();
        assert_eq!(response.warnings.len(), 2);
        assert!(response.plan.planks.is_empty());
    }

    #[test]
    fn test_missing_materials_path() {
        let api = PlanApi::new(PlannerConfig::default()).unwrap();
        let result = api.plan_from_files(Path::new("model.obj"), None);
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlannerConfig {
            model_unit_scale: 0.0,
            ..PlannerConfig::default()
        };
        assert!(matches!(PlanApi::new(config), Err(ApiError::ConfigError(_))));
    }
}
