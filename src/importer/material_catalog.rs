// ==========================================
// 板材下料规划 - 材料清单导入
// ==========================================
// 支持: CSV (.csv) / Excel (.xlsx/.xls) / JSON (.json)
// 表头: id,name,length,width,thickness,saw_kerf,price_per_unit
// ==========================================

use crate::domain::material::Material;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;
use tracing::{info, instrument};

/// 原始行: 源文件行号 + (表头 -> 单元格文本)
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub row: usize, // 源文件中的行号 (从 1 开始, 表头为第 1 行)
    pub fields: HashMap<String, String>,
}

impl RawRecord {
    fn get(&self, field: &str) -> Option<&String> {
        self.fields.get(field)
    }
}

// ==========================================
// 原始记录解析
// ==========================================

/// 读取 CSV 为原始记录
pub fn read_csv_records<R: std::io::Read>(reader: R) -> ImportResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 允许行长度不一致
        .from_reader(reader);

    // 读取表头（统一小写）
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // 空行不产生记录, 行号以解析器位置为准
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        let mut row_map = HashMap::new();

        for (col_idx, value) in record.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row_map.insert(header.clone(), value.trim().to_string());
            }
        }

        // 跳过完全空白的行
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }

        records.push(RawRecord {
            row,
            fields: row_map,
        });
    }

    Ok(records)
}

/// 读取 Excel 首个工作表为原始记录
///
/// 按扩展名选择 .xlsx / .xls 读取器
pub fn read_excel_records(path: &Path) -> ImportResult<Vec<RawRecord>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
    }

    let sheet_name = sheet_names[0].clone();
    let range = workbook
        .worksheet_range(&sheet_name)?;
    // 工作表可能不从第 1 行开始
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

    // 提取表头（第一行）
    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_lowercase())
        .collect();

    let mut records = Vec::new();
    for (idx, data_row) in rows.enumerate() {
        let mut row_map = HashMap::new();

        for (col_idx, cell) in data_row.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row_map.insert(header.clone(), cell.to_string().trim().to_string());
            }
        }

        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }

        records.push(RawRecord {
            row: first_row + idx + 2,
            fields: row_map,
        });
    }

    Ok(records)
}

// ==========================================
// 字段映射 + 数据质量校验
// ==========================================

/// 将原始记录映射为材料并校验
///
/// 错误中的行号为源文件行号
pub fn map_records(records: &[RawRecord]) -> ImportResult<Vec<Material>> {
    let mut materials = Vec::with_capacity(records.len());
    for record in records {
        let row = record.row;
        let id_text = required(record, row, "id")?;
        let id: i64 = id_text
            .parse()
            .map_err(|e: std::num::ParseIntError| ImportError::TypeConversionError {
                row,
                field: "id".to_string(),
                message: e.to_string(),
            })?;

        let name = record
            .get("name")
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Material {}", id));

        let material = Material {
            id,
            name,
            length: parse_number(record, row, "length")?,
            width: parse_number(record, row, "width")?,
            thickness: parse_number(record, row, "thickness")?,
            saw_kerf: parse_optional_number(record, row, "saw_kerf")?.unwrap_or(0.0),
            price_per_unit: parse_optional_number(record, row, "price_per_unit")?,
        };
        materials.push(material);
    }

    let rows: Vec<usize> = records.iter().map(|r| r.row).collect();
    check_materials(&materials, |idx| rows[idx])?;
    Ok(materials)
}

/// 校验材料列表
///
/// 规则:
/// - id 唯一
/// - length/width/thickness > 0 且有限
/// - saw_kerf >= 0 且有限
/// - price_per_unit 若存在则 > 0
///
/// 无源文件时行号按表格约定从 2 开始
pub fn validate_materials(materials: &[Material]) -> ImportResult<()> {
    check_materials(materials, |idx| idx + 2)
}

fn check_materials(materials: &[Material], row_of: impl Fn(usize) -> usize) -> ImportResult<()> {
    let mut seen = HashSet::new();
    for (idx, m) in materials.iter().enumerate() {
        let row = row_of(idx);
        if !seen.insert(m.id) {
            return Err(ImportError::DuplicateMaterialId { row, id: m.id });
        }
        for (field, value) in [("length", m.length), ("width", m.width), ("thickness", m.thickness)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(range_error(row, field, value, "> 0"));
            }
        }
        if !(m.saw_kerf.is_finite() && m.saw_kerf >= 0.0) {
            return Err(range_error(row, "saw_kerf", m.saw_kerf, ">= 0"));
        }
        if let Some(price) = m.price_per_unit {
            if !(price.is_finite() && price > 0.0) {
                return Err(range_error(row, "price_per_unit", price, "> 0"));
            }
        }
    }
    Ok(())
}

fn range_error(row: usize, field: &str, value: f64, rule: &str) -> ImportError {
    ImportError::ValueRangeError {
        row,
        field: field.to_string(),
        value,
        rule: rule.to_string(),
    }
}

fn required<'a>(record: &'a RawRecord, row: usize, field: &str) -> ImportResult<&'a str> {
    record
        .get(field)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ImportError::MissingField {
            row,
            field: field.to_string(),
        })
}

fn parse_number(record: &RawRecord, row: usize, field: &str) -> ImportResult<f64> {
    let text = required(record, row, field)?;
    text.parse().map_err(|e: std::num::ParseFloatError| ImportError::TypeConversionError {
        row,
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn parse_optional_number(record: &RawRecord, row: usize, field: &str) -> ImportResult<Option<f64>> {
    match record.get(field).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(_) => parse_number(record, row, field).map(Some),
        None => Ok(None),
    }
}

// ==========================================
// MaterialCatalogLoader - 按扩展名自动选择
// ==========================================
pub struct MaterialCatalogLoader;

impl MaterialCatalogLoader {
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<Material>> {
        let path = file_path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let materials = match ext.as_str() {
            "csv" => map_records(&read_csv_records(File::open(path)?)?)?,
            "xlsx" | "xls" => map_records(&read_excel_records(path)?)?,
            "json" => {
                let materials: Vec<Material> = serde_json::from_reader(File::open(path)?)?;
                validate_materials(&materials)?;
                materials
            }
            _ => return Err(ImportError::UnsupportedFormat(ext)),
        };

        info!(count = materials.len(), "材料清单导入完成");
        Ok(materials)
    }
}
