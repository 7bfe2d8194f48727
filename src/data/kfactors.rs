//! # EDS k 因子数据库
//!
//! Bruker EDS 探测器（Hitachi HD2700 STEM）的 Cliff-Lorimer k 因子表。
//! 每个元素一行，分别给出 K、L、M 线系的 k 因子；0 表示该线系未标定，
//! 作为数据原样返回。
//!
//! ## 依赖关系
//! - 被 `eds/kfactor.rs` 调用
//! - 纯静态数据，使用 `models::LineFamily` 选择列

use crate::models::LineFamily;

use std::collections::HashMap;
use std::sync::LazyLock;

/// k 因子表中的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KFactorRow {
    /// 原子序数
    pub z: u32,
    pub symbol: &'static str,
    pub k: f64,
    pub l: f64,
    pub m: f64,
}

impl KFactorRow {
    /// 取指定线系的 k 因子
    pub fn factor(&self, family: LineFamily) -> f64 {
        match family {
            LineFamily::K => self.k,
            LineFamily::L => self.l,
            LineFamily::M => self.m,
        }
    }
}

/// HD2700 k 因子表，按原子序数排序 (H - Cf)
pub static KFACTORS_HD2700: [KFactorRow; 98] = [
    KFactorRow { z: 1, symbol: "H", k: 0.0, l: 0.0, m: 0.0 },
    KFactorRow { z: 2, symbol: "He", k: 0.0, l: 0.0, m: 0.0 },
    KFactorRow { z: 3, symbol: "Li", k: 0.0, l: 0.0, m: 0.0 },
    KFactorRow { z: 4, symbol: "Be", k: 181.983, l: 0.0, m: 0.0 },
    KFactorRow { z: 5, symbol: "B", k: 8.985, l: 0.0, m: 0.0 },
    KFactorRow { z: 6, symbol: "C", k: 11.907, l: 0.0, m: 0.0 },
    KFactorRow { z: 7, symbol: "N", k: 3.218, l: 0.0, m: 0.0 },
    KFactorRow { z: 8, symbol: "O", k: 1.7, l: 0.0, m: 0.0 },
    KFactorRow { z: 9, symbol: "F", k: 1.503, l: 0.0, m: 0.0 },
    KFactorRow { z: 10, symbol: "Ne", k: 0.966, l: 0.0, m: 0.0 },
    KFactorRow { z: 11, symbol: "Na", k: 0.932, l: 0.0, m: 0.0 },
    KFactorRow { z: 12, symbol: "Mg", k: 9.868, l: 0.0, m: 0.0 },
    KFactorRow { z: 13, symbol: "Al", k: 11.011, l: 0.0, m: 0.0 },
    KFactorRow { z: 14, symbol: "Si", k: 3.596, l: 0.0, m: 0.0 },
    KFactorRow { z: 15, symbol: "P", k: 1.05, l: 0.0, m: 0.0 },
    KFactorRow { z: 16, symbol: "S", k: 4.296, l: 0.0, m: 0.0 },
    KFactorRow { z: 17, symbol: "Cl", k: 1.049, l: 0.0, m: 0.0 },
    KFactorRow { z: 18, symbol: "Ar", k: 1.141, l: 0.0, m: 0.0 },
    KFactorRow { z: 19, symbol: "K", k: 1.077, l: 0.0, m: 0.0 },
    KFactorRow { z: 20, symbol: "Ca", k: 1.157, l: 92.905, m: 0.0 },
    KFactorRow { z: 21, symbol: "Sc", k: 1.191, l: 40.965, m: 0.0 },
    KFactorRow { z: 22, symbol: "Ti", k: 1.21, l: 29.213, m: 0.0 },
    KFactorRow { z: 23, symbol: "V", k: 1.259, l: 15.657, m: 0.0 },
    KFactorRow { z: 24, symbol: "Cr", k: 1.278, l: 7.943, m: 0.0 },
    KFactorRow { z: 25, symbol: "Mn", k: 3.469, l: 4.798, m: 0.0 },
    KFactorRow { z: 26, symbol: "Fe", k: 2.806, l: 2.863, m: 0.0 },
    KFactorRow { z: 27, symbol: "Co", k: 1.518, l: 2.311, m: 0.0 },
    KFactorRow { z: 28, symbol: "Ni", k: 1.556, l: 1.853, m: 0.0 },
    KFactorRow { z: 29, symbol: "Cu", k: 2.073, l: 1.677, m: 0.0 },
    KFactorRow { z: 30, symbol: "Zn", k: 1.86, l: 1.723, m: 0.0 },
    KFactorRow { z: 31, symbol: "Ga", k: 2.07, l: 2.123, m: 0.0 },
    KFactorRow { z: 32, symbol: "Ge", k: 2.265, l: 2.054, m: 0.0 },
    KFactorRow { z: 33, symbol: "As", k: 2.481, l: 2.136, m: 0.0 },
    KFactorRow { z: 34, symbol: "Se", k: 2.807, l: 2.154, m: 0.0 },
    KFactorRow { z: 35, symbol: "Br", k: 3.078, l: 2.113, m: 0.0 },
    KFactorRow { z: 36, symbol: "Kr", k: 3.546, l: 2.263, m: 0.0 },
    KFactorRow { z: 37, symbol: "Rb", k: 4.009, l: 2.233, m: 0.0 },
    KFactorRow { z: 38, symbol: "Sr", k: 4.616, l: 2.274, m: 0.0 },
    KFactorRow { z: 39, symbol: "Y", k: 5.295, l: 2.343, m: 0.0 },
    KFactorRow { z: 40, symbol: "Zr", k: 6.18, l: 2.36, m: 0.0 },
    KFactorRow { z: 41, symbol: "Nb", k: 7.262, l: 2.32, m: 0.0 },
    KFactorRow { z: 42, symbol: "Mo", k: 8.642, l: 2.361, m: 0.0 },
    KFactorRow { z: 43, symbol: "Tc", k: 10.257, l: 2.52, m: 0.0 },
    KFactorRow { z: 44, symbol: "Ru", k: 12.381, l: 2.493, m: 0.0 },
    KFactorRow { z: 45, symbol: "Rh", k: 14.768, l: 2.622, m: 0.0 },
    KFactorRow { z: 46, symbol: "Pd", k: 17.985, l: 2.738, m: 0.0 },
    KFactorRow { z: 47, symbol: "Ag", k: 21.47, l: 2.804, m: 0.0 },
    KFactorRow { z: 48, symbol: "Cd", k: 26.328, l: 2.939, m: 0.0 },
    KFactorRow { z: 49, symbol: "In", k: 31.736, l: 2.938, m: 0.0 },
    KFactorRow { z: 50, symbol: "Sn", k: 38.849, l: 3.303, m: 0.0 },
    KFactorRow { z: 51, symbol: "Sb", k: 47.074, l: 3.421, m: 0.0 },
    KFactorRow { z: 52, symbol: "Te", k: 58.429, l: 3.575, m: 0.0 },
    KFactorRow { z: 53, symbol: "I", k: 68.682, l: 3.557, m: 0.0 },
    KFactorRow { z: 54, symbol: "Xe", k: 83.757, l: 3.652, m: 0.0 },
    KFactorRow { z: 55, symbol: "Cs", k: 100.587, l: 3.678, m: 0.0 },
    KFactorRow { z: 56, symbol: "Ba", k: 122.888, l: 3.789, m: 251.024 },
    KFactorRow { z: 57, symbol: "La", k: 146.46, l: 3.779, m: 36.353 },
    KFactorRow { z: 58, symbol: "Ce", k: 174.287, l: 3.779, m: 21.616 },
    KFactorRow { z: 59, symbol: "Pr", k: 206.116, l: 3.772, m: 16.083 },
    KFactorRow { z: 60, symbol: "Nd", k: 248.193, l: 3.835, m: 12.61 },
    KFactorRow { z: 61, symbol: "Pm", k: 293.576, l: 3.847, m: 9.775 },
    KFactorRow { z: 62, symbol: "Sm", k: 357.046, l: 4.036, m: 9.526 },
    KFactorRow { z: 63, symbol: "Eu", k: 423.472, l: 4.054, m: 7.025 },
    KFactorRow { z: 64, symbol: "Gd", k: 513.709, l: 4.178, m: 3.642 },
    KFactorRow { z: 65, symbol: "Tb", k: 608.318, l: 4.188, m: 5.337 },
    KFactorRow { z: 66, symbol: "Dy", k: 726.462, l: 4.229, m: 4.202 },
    KFactorRow { z: 67, symbol: "Ho", k: 863.91, l: 4.297, m: 3.838 },
    KFactorRow { z: 68, symbol: "Er", k: 1020.079, l: 4.322, m: 3.737 },
    KFactorRow { z: 69, symbol: "Tm", k: 1203.458, l: 4.369, m: 2.699 },
    KFactorRow { z: 70, symbol: "Yb", k: 1435.566, l: 4.31, m: 2.588 },
    KFactorRow { z: 71, symbol: "Lu", k: 1690.141, l: 4.565, m: 1.928 },
    KFactorRow { z: 72, symbol: "Hf", k: 2008.353, l: 4.674, m: 1.839 },
    KFactorRow { z: 73, symbol: "Ta", k: 2366.031, l: 4.739, m: 1.768 },
    KFactorRow { z: 74, symbol: "W", k: 2793.954, l: 4.824, m: 1.74 },
    KFactorRow { z: 75, symbol: "Re", k: 3280.444, l: 4.813, m: 2.31 },
    KFactorRow { z: 76, symbol: "Os", k: 3894.591, l: 4.834, m: 0.734 },
    KFactorRow { z: 77, symbol: "Ir", k: 4566.981, l: 4.817, m: 1.275 },
    KFactorRow { z: 78, symbol: "Pt", k: 5378.208, l: 4.893, m: 1.438 },
    KFactorRow { z: 79, symbol: "Au", k: 6288.581, l: 4.892, m: 1.536 },
    KFactorRow { z: 80, symbol: "Hg", k: 7434.261, l: 4.991, m: 1.95 },
    KFactorRow { z: 81, symbol: "Tl", k: 8777.332, l: 5.122, m: 2.841 },
    KFactorRow { z: 82, symbol: "Pb", k: 10312.191, l: 5.257, m: 3.562 },
    KFactorRow { z: 83, symbol: "Bi", k: 12054.599, l: 5.395, m: 3.445 },
    KFactorRow { z: 84, symbol: "Po", k: 13950.156, l: 5.504, m: 3.495 },
    KFactorRow { z: 85, symbol: "At", k: 16250.293, l: 5.628, m: 3.475 },
    KFactorRow { z: 86, symbol: "Rn", k: 19882.856, l: 6.125, m: 3.419 },
    KFactorRow { z: 87, symbol: "Fr", k: 23123.224, l: 6.316, m: 3.577 },
    KFactorRow { z: 88, symbol: "Ra", k: 27146.164, l: 6.58, m: 3.493 },
    KFactorRow { z: 89, symbol: "Ac", k: 31583.326, l: 6.829, m: 3.39 },
    KFactorRow { z: 90, symbol: "Th", k: 37429.922, l: 7.223, m: 3.269 },
    KFactorRow { z: 91, symbol: "Pa", k: 43238.079, l: 7.315, m: 3.232 },
    KFactorRow { z: 92, symbol: "U", k: 51724.858, l: 7.22, m: 3.198 },
    KFactorRow { z: 93, symbol: "Np", k: 59588.09, l: 7.361, m: 3.125 },
    KFactorRow { z: 94, symbol: "Pu", k: 71681.625, l: 7.885, m: 3.223 },
    KFactorRow { z: 95, symbol: "Am", k: 83205.325, l: 8.187, m: 3.108 },
    KFactorRow { z: 96, symbol: "Cm", k: 98894.698, l: 9.382, m: 3.032 },
    KFactorRow { z: 97, symbol: "Bk", k: 15703.642, l: 9.892, m: 3.018 },
    KFactorRow { z: 98, symbol: "Cf", k: 37892.321, l: 10.56, m: 3.05 },
];

/// 元素符号 -> 行号索引
static KFACTOR_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    KFACTORS_HD2700
        .iter()
        .enumerate()
        .map(|(i, row)| (row.symbol, i))
        .collect()
});

/// 按元素符号查找 k 因子行（精确、区分大小写）
pub fn get_kfactor_row(symbol: &str) -> Option<&'static KFactorRow> {
    KFACTOR_INDEX.get(symbol).map(|&i| &KFACTORS_HD2700[i])
}
