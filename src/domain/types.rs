// ==========================================
// 板材下料规划 - 领域类型定义
// ==========================================
// 摆向枚举顺序即平局裁决顺序，不可调整
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 摆向 (Orientation)
// ==========================================
// 将零件的 (L, W, T) 分配到 (切割长度, 宽度, 厚度) 三个角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    Lwt, // cut=L, width=W, thick=T
    Ltw, // cut=L, width=T, thick=W
    Wlt, // cut=W, width=L, thick=T
    Wtl, // cut=W, width=T, thick=L
    Tlw, // cut=T, width=L, thick=W
    Twl, // cut=T, width=W, thick=L
}

impl Orientation {
    /// 固定枚举顺序
    pub const ALL: [Orientation; 6] = [
        Orientation::Lwt,
        Orientation::Ltw,
        Orientation::Wlt,
        Orientation::Wtl,
        Orientation::Tlw,
        Orientation::Twl,
    ];

    /// 按角色重排 (L, W, T)
    ///
    /// # 返回
    /// (cut, width, thick)
    pub fn apply(self, length: f64, width: f64, thickness: f64) -> (f64, f64, f64) {
        match self {
            Orientation::Lwt => (length, width, thickness),
            Orientation::Ltw => (length, thickness, width),
            Orientation::Wlt => (width, length, thickness),
            Orientation::Wtl => (width, thickness, length),
            Orientation::Tlw => (thickness, length, width),
            Orientation::Twl => (thickness, width, length),
        }
    }

    /// 可追溯的人类可读标签
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Lwt => "cut=L, width=W, thick=T",
            Orientation::Ltw => "cut=L, width=T, thick=W",
            Orientation::Wlt => "cut=W, width=L, thick=T",
            Orientation::Wtl => "cut=W, width=T, thick=L",
            Orientation::Tlw => "cut=T, width=L, thick=W",
            Orientation::Twl => "cut=T, width=W, thick=L",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 告警原因 (Warning Reason)
// ==========================================
// 非致命：零件保留在优化输出中，但不参与排料
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningReason {
    NoMaterialFits,        // 所有材料、所有摆向均放不下
    NoMaterialsConfigured, // 材料列表为空
}

impl WarningReason {
    /// i18n 键
    pub fn message_key(self) -> &'static str {
        match self {
            WarningReason::NoMaterialFits => "warning.no_material_fits",
            WarningReason::NoMaterialsConfigured => "warning.no_materials_configured",
        }
    }
}

impl fmt::Display for WarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningReason::NoMaterialFits => write!(f, "NO_MATERIAL_FITS"),
            WarningReason::NoMaterialsConfigured => write!(f, "NO_MATERIALS_CONFIGURED"),
        }
    }
}
