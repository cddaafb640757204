// ==========================================
// 板材下料规划 - 网格源领域模型
// ==========================================
// 输入形态: 按声明顺序排列的命名对象，每个对象携带顶点列表
// ==========================================

use serde::{Deserialize, Serialize};

/// 顶点坐标 (x, y, z)，模型空间单位
pub type Vertex = [f64; 3];

// ==========================================
// MeshObject - 命名实体
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshObject {
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl MeshObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
        }
    }

    pub fn with_vertices(name: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }
}

// ==========================================
// MeshSource - 网格源
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshSource {
    pub objects: Vec<MeshObject>,
}

impl MeshSource {
    pub fn new(objects: Vec<MeshObject>) -> Self {
        Self { objects }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// 顶点总数
    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.vertices.len()).sum()
    }
}
