// ==========================================
// 板材下料规划 - 几何提取引擎
// ==========================================
// 职责: 按对象计算轴对齐包围盒, 产出原始尺寸三元组
// 输入: MeshSource (模型空间)
// 输出: Vec<ExtractedPiece> (乘以单位换算系数后, 毫米)
// ==========================================

use crate::domain::mesh::MeshSource;
use crate::domain::piece::RawDimension;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// 单个对象的提取结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPiece {
    pub name: String,
    pub dims: RawDimension,
}

// ==========================================
// GeometryIngest - 几何提取引擎
// ==========================================
pub struct GeometryIngest {
    unit_scale: f64,
}

impl GeometryIngest {
    /// 构造函数（模型单位即毫米）
    pub fn new() -> Self {
        Self { unit_scale: 1.0 }
    }

    /// 指定模型空间 -> 毫米的换算系数
    pub fn with_unit_scale(unit_scale: f64) -> Self {
        Self { unit_scale }
    }

    /// 提取所有对象的包围盒尺寸
    ///
    /// 规则:
    /// 1) 每轴独立取 min/max, 尺寸 = |max - min|
    /// 2) 无顶点的对象跳过
    /// 3) 输出顺序 = 对象声明顺序
    #[instrument(skip(self, source), fields(objects = source.objects.len(), unit_scale = self.unit_scale))]
    pub fn extract(&self, source: &MeshSource) -> Vec<ExtractedPiece> {
        let mut pieces = Vec::with_capacity(source.objects.len());

        for object in &source.objects {
            let mut vertices = object.vertices.iter();
            let first = match vertices.next() {
                Some(v) => *v,
                None => {
                    debug!(name = %object.name, "对象无顶点, 跳过");
                    continue;
                }
            };

            let mut min = first;
            let mut max = first;
            for v in vertices {
                for axis in 0..3 {
                    min[axis] = min[axis].min(v[axis]);
                    max[axis] = max[axis].max(v[axis]);
                }
            }

            let raw = RawDimension::new(
                (max[0] - min[0]).abs(),
                (max[1] - min[1]).abs(),
                (max[2] - min[2]).abs(),
            );

            pieces.push(ExtractedPiece {
                name: object.name.clone(),
                dims: raw.scaled(self.unit_scale),
            });
        }

        info!(pieces = pieces.len(), "几何提取完成");
        pieces
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for GeometryIngest {
    fn default() -> Self {
        Self::new()
    }
}
