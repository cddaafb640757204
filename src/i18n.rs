// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::piece::PlanWarning;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use plank_cut_planner::i18n::t_with_args;
/// let msg = t_with_args("report.plank_count", &[("count", "3")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 告警的本地化文本
pub fn warning_message(warning: &PlanWarning) -> String {
    let d = &warning.original_dims;
    let dims = format!("{} x {} x {}", d.length, d.width, d.thickness);
    let names = if warning.source_names.is_empty() {
        t("common.none")
    } else {
        warning.source_names.join(", ")
    };
    let id = warning.piece_group_id.to_string();
    t_with_args(
        warning.reason.message_key(),
        &[("id", id.as_str()), ("names", names.as_str()), ("dims", dims.as_str())],
    )
}

// rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
// 涉及 locale 的测试通过该锁串行化。
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
