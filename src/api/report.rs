// ==========================================
// 板材下料规划 - 文本报告
// ==========================================
// 用途: CLI 输出; 成本仅在有定义时显示
// ==========================================

use crate::api::plan_api::PlanResponse;
use crate::i18n::{t, t_with_args, warning_message};
use std::fmt::Write;

/// 渲染文本报告（使用当前 locale）
pub fn render_text(response: &PlanResponse) -> String {
    let mut out = String::new();

    if response.pieces.is_empty() {
        let _ = writeln!(out, "{}", t("report.no_pieces"));
        return out;
    }

    let _ = writeln!(out, "== {} ==", t("report.title"));
    for plank in &response.plan.planks {
        let _ = writeln!(
            out,
            "{}",
            t_with_args(
                "report.plank",
                &[
                    ("number", plank.number.to_string().as_str()),
                    ("material", plank.material.name.as_str()),
                    ("used", format_mm(plank.used_length).as_str()),
                    ("waste", format_mm(plank.waste_length).as_str()),
                ],
            )
        );
        for piece in &plank.placed_pieces {
            let _ = writeln!(
                out,
                "{}",
                t_with_args(
                    "report.piece",
                    &[
                        ("label", piece.label.as_str()),
                        ("cut", format_mm(piece.cutting_length).as_str()),
                        ("width", format_mm(piece.final_width).as_str()),
                        ("thick", format_mm(piece.final_thickness).as_str()),
                    ],
                )
            );
        }
    }

    if !response.warnings.is_empty() {
        let _ = writeln!(out, "\n== {} ==", t("warning.title"));
        for warning in &response.warnings {
            let _ = writeln!(out, "! {}", warning_message(warning));
        }
    }

    let summary = &response.summary;
    let _ = writeln!(out, "\n== {} ==", t("report.summary"));
    let _ = writeln!(
        out,
        "{}",
        t_with_args("report.plank_count", &[("count", summary.plank_count.to_string().as_str())])
    );
    let _ = writeln!(
        out,
        "{}",
        t_with_args(
            "report.piece_count",
            &[("count", summary.placed_piece_count.to_string().as_str())]
        )
    );
    let _ = writeln!(
        out,
        "{}",
        t_with_args("report.total_waste", &[("waste", format_mm(summary.total_waste_length).as_str())])
    );
    let _ = writeln!(
        out,
        "{}",
        t_with_args("report.efficiency", &[("pct", format!("{:.1}", summary.efficiency * 100.0).as_str())])
    );
    for usage in &summary.materials {
        let _ = writeln!(
            out,
            "{}",
            t_with_args(
                "report.material_usage",
                &[
                    ("material", usage.material_name.as_str()),
                    ("count", usage.plank_count.to_string().as_str()),
                ],
            )
        );
    }
    if let Some(cost) = summary.total_cost {
        let _ = writeln!(
            out,
            "{}",
            t_with_args("report.total_cost", &[("cost", format!("{:.2}", cost).as_str())])
        );
    }

    out
}

/// 毫米数值: 整数不带小数, 否则保留一位
fn format_mm(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}
