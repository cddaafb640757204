// ==========================================
// 板材下料规划 - 命令行入口
// ==========================================
// 用法:
//   plank-cut-planner <model.obj> [materials.csv|xlsx|json]
// 材料清单缺省时读取配置 (PLANK_PLANNER_MATERIALS / config.json)
// ==========================================

use anyhow::{bail, Context};
use plank_cut_planner::api::{render_text, PlanApi};
use plank_cut_planner::config::ConfigManager;
use plank_cut_planner::{i18n, logging};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    let mut args = std::env::args().skip(1);
    let mesh_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("用法: plank-cut-planner <model.obj> [materials.csv|xlsx|json]"),
    };
    let materials_path = args.next().map(PathBuf::from);

    tracing::info!("{} v{}", plank_cut_planner::APP_NAME, plank_cut_planner::VERSION);

    let manager = ConfigManager::load_default().context("加载配置失败")?;
    i18n::set_locale(&manager.config().locale);

    let api = PlanApi::new(manager.config().clone())?;
    let response = api
        .plan_from_files(&mesh_path, materials_path.as_deref())
        .with_context(|| format!("无法生成下料方案: {}", mesh_path.display()))?;

    print!("{}", render_text(&response));
    Ok(())
}
