// ==========================================
// 板材下料规划 - 网格文本解析器
// ==========================================
// 支持: Wavefront OBJ 风格文本 (o/g 命名对象 + v 顶点)
// 策略: 畸形顶点行仅丢弃该顶点（有损、非致命）
// ==========================================

use crate::domain::mesh::{MeshObject, MeshSource, Vertex};
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// 首个对象声明之前的顶点所属的隐式对象名
pub const DEFAULT_OBJECT_NAME: &str = "default";

// ==========================================
// ParseReport - 解析统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    pub object_count: usize,
    pub vertex_count: usize,
    pub skipped_vertex_lines: Vec<usize>, // 被丢弃的顶点行号 (从 1 开始)
}

// ==========================================
// ObjMeshParser
// ==========================================
pub struct ObjMeshParser;

impl ObjMeshParser {
    /// 从文件读取并解析
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<(MeshSource, ParseReport)> {
        let path = file_path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(self.parse_str(&text))
    }

    /// 解析文本（单次线性扫描，输出顺序 = 声明顺序）
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn parse_str(&self, text: &str) -> (MeshSource, ParseReport) {
        let mut objects: Vec<MeshObject> = Vec::new();
        let mut current = MeshObject::new(DEFAULT_OBJECT_NAME);
        let mut report = ParseReport::default();

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let keyword = match tokens.next() {
                Some(k) => k,
                None => continue,
            };

            match keyword {
                "o" | "g" => {
                    let name = tokens.collect::<Vec<_>>().join(" ");
                    let name = if name.is_empty() {
                        format!("object_{}", objects.len() + 1)
                    } else {
                        name
                    };
                    let finished = std::mem::replace(&mut current, MeshObject::new(name));
                    push_object(&mut objects, finished);
                }
                "v" => match parse_vertex(tokens) {
                    Some(vertex) => current.vertices.push(vertex),
                    None => {
                        debug!(line = line_no, content = %line, "跳过畸形顶点行");
                        report.skipped_vertex_lines.push(line_no);
                    }
                },
                // vn/vt/f/usemtl/mtllib/s 等与包围盒无关
                _ => {}
            }
        }
        push_object(&mut objects, current);

        let source = MeshSource::new(objects);
        report.object_count = source.objects.len();
        report.vertex_count = source.vertex_count();

        info!(
            objects = report.object_count,
            vertices = report.vertex_count,
            skipped = report.skipped_vertex_lines.len(),
            "网格解析完成"
        );

        (source, report)
    }
}

/// 隐式 default 对象仅在有顶点时保留；显式声明的对象总是保留
fn push_object(objects: &mut Vec<MeshObject>, object: MeshObject) {
    if object.name == DEFAULT_OBJECT_NAME && object.vertices.is_empty() && objects.is_empty() {
        return;
    }
    objects.push(object);
}

/// 解析顶点分量（仅取前三个，允许可选的 w）
fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Vertex> {
    let mut vertex = [0.0f64; 3];
    for slot in vertex.iter_mut() {
        let value: f64 = tokens.next()?.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    Some(vertex)
}
