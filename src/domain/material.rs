// ==========================================
// 板材下料规划 - 原材料领域模型
// ==========================================
// 由外部提供，核心只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Material - 原材料规格
// ==========================================
// 单位: 毫米
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,                        // 唯一ID
    pub name: String,                   // 显示名称
    pub length: f64,                    // 长度 (mm)
    pub width: f64,                     // 宽度 (mm)
    pub thickness: f64,                 // 厚度 (mm)
    #[serde(default)]
    pub saw_kerf: f64,                  // 锯缝 (mm)
    #[serde(default)]
    pub price_per_unit: Option<f64>,    // 单价 (可选)
}

impl Material {
    pub fn new(id: i64, name: impl Into<String>, length: f64, width: f64, thickness: f64) -> Self {
        Self {
            id,
            name: name.into(),
            length,
            width,
            thickness,
            saw_kerf: 0.0,
            price_per_unit: None,
        }
    }

    pub fn with_kerf(mut self, saw_kerf: f64) -> Self {
        self.saw_kerf = saw_kerf;
        self
    }

    pub fn with_price(mut self, price_per_unit: f64) -> Self {
        self.price_per_unit = Some(price_per_unit);
        self
    }

    /// 检查三向包络是否容纳指定的角色尺寸
    pub fn admits(&self, cut: f64, width: f64, thick: f64) -> bool {
        cut <= self.length && width <= self.width && thick <= self.thickness
    }
}
