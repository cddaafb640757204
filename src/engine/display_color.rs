// ==========================================
// 板材下料规划 - 显示配色
// ==========================================
// 纯函数: 规范尺寸键 -> 稳定哈希 -> 调色板取模
// 与渲染顺序无关，同尺寸零件在任何进程中颜色一致
// ==========================================

use crate::domain::piece::{DimensionKey, RawDimension};

/// 固定调色板
pub const PALETTE: [&str; 12] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4",
    "#46f0f0", "#f032e6", "#bcf60c", "#fabebe", "#008080", "#e6beff",
];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 零件尺寸对应的显示颜色
pub fn color_for(dims: &RawDimension) -> &'static str {
    color_for_key(dims.canonical_key())
}

/// 分组键对应的显示颜色
pub fn color_for_key(key: DimensionKey) -> &'static str {
    let idx = (key_hash(key) % PALETTE.len() as u64) as usize;
    PALETTE[idx]
}

/// FNV-1a (64 位)，跨平台、跨版本稳定
fn key_hash(key: DimensionKey) -> u64 {
    let (l, w, t) = key;
    let mut hash = FNV_OFFSET_BASIS;
    for part in [l, w, t] {
        for byte in part.to_le_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_same_color() {
        let a = RawDimension::new(600.0, 300.0, 18.0);
        let b = RawDimension::new(600.00001, 299.99999, 18.0);
        assert_eq!(color_for(&a), color_for(&b));
    }

    #[test]
    fn test_color_from_palette() {
        for i in 0..50 {
            let c = color_for(&RawDimension::new(i as f64 * 10.0, 100.0, 18.0));
            assert!(PALETTE.contains(&c));
        }
    }

    #[test]
    fn test_hash_is_fixed() {
        assert_eq!(key_hash((0, 0, 0)), key_hash((0, 0, 0)));
        assert_eq!(color_for_key((6000, 3000, 180)), color_for_key((6000, 3000, 180)));
        assert_ne!(key_hash((1, 0, 0)), key_hash((0, 1, 0)));
    }
}
