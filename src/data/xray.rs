//! # X 射线特征谱线能量
//!
//! 各元素 Kα、Lα、Mα 线的能量 (eV)。未收录的线为 `None`，
//! 对应周期表选择器中不可选的线系。
//!
//! ## 依赖关系
//! - 被 `eds/lines.rs` 和 `eds/maps.rs` 调用
//! - 使用 `models::LineFamily`

use crate::models::LineFamily;

use std::collections::HashMap;
use std::sync::LazyLock;

/// 单个元素的 α 线能量 (eV)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrayEnergies {
    pub symbol: &'static str,
    pub ka: Option<f64>,
    pub la: Option<f64>,
    pub ma: Option<f64>,
}

impl XrayEnergies {
    /// 指定线系 α 线的能量 (eV)
    pub fn energy_ev(&self, family: LineFamily) -> Option<f64> {
        match family {
            LineFamily::K => self.ka,
            LineFamily::L => self.la,
            LineFamily::M => self.ma,
        }
    }

    /// 指定线系 α 线的能量 (keV)
    pub fn energy_kev(&self, family: LineFamily) -> Option<f64> {
        self.energy_ev(family).map(|e| e / 1000.0)
    }
}

/// Li - Am 的 α 线能量表
pub static XRAY_ENERGIES: [XrayEnergies; 93] = [
    XrayEnergies { symbol: "Li", ka: Some(54.3), la: None, ma: None },
    XrayEnergies { symbol: "Be", ka: Some(108.5), la: None, ma: None },
    XrayEnergies { symbol: "B", ka: Some(183.3), la: None, ma: None },
    XrayEnergies { symbol: "C", ka: Some(277.0), la: None, ma: None },
    XrayEnergies { symbol: "N", ka: Some(392.4), la: None, ma: None },
    XrayEnergies { symbol: "O", ka: Some(524.9), la: None, ma: None },
    XrayEnergies { symbol: "F", ka: Some(676.8), la: None, ma: None },
    XrayEnergies { symbol: "Ne", ka: Some(848.6), la: None, ma: None },
    XrayEnergies { symbol: "Na", ka: Some(1040.98), la: None, ma: None },
    XrayEnergies { symbol: "Mg", ka: Some(1253.6), la: None, ma: None },
    XrayEnergies { symbol: "Al", ka: Some(1486.7), la: None, ma: None },
    XrayEnergies { symbol: "Si", ka: Some(1739.98), la: None, ma: None },
    XrayEnergies { symbol: "P", ka: Some(2013.7), la: None, ma: None },
    XrayEnergies { symbol: "S", ka: Some(2307.84), la: None, ma: None },
    XrayEnergies { symbol: "Cl", ka: Some(2622.39), la: None, ma: None },
    XrayEnergies { symbol: "Ar", ka: Some(2957.7), la: None, ma: None },
    XrayEnergies { symbol: "K", ka: Some(3313.8), la: None, ma: None },
    XrayEnergies { symbol: "Ca", ka: Some(3691.68), la: Some(341.3), ma: None },
    XrayEnergies { symbol: "Sc", ka: Some(4090.6), la: Some(395.4), ma: None },
    XrayEnergies { symbol: "Ti", ka: Some(4510.84), la: Some(452.2), ma: None },
    XrayEnergies { symbol: "V", ka: Some(4952.2), la: Some(511.3), ma: None },
    XrayEnergies { symbol: "Cr", ka: Some(5414.72), la: Some(572.8), ma: None },
    XrayEnergies { symbol: "Mn", ka: Some(5898.75), la: Some(637.4), ma: None },
    XrayEnergies { symbol: "Fe", ka: Some(6403.84), la: Some(705.0), ma: None },
    XrayEnergies { symbol: "Co", ka: Some(6930.32), la: Some(776.2), ma: None },
    XrayEnergies { symbol: "Ni", ka: Some(7478.15), la: Some(851.5), ma: None },
    XrayEnergies { symbol: "Cu", ka: Some(8047.78), la: Some(929.7), ma: None },
    XrayEnergies { symbol: "Zn", ka: Some(8638.66), la: Some(1011.7), ma: None },
    XrayEnergies { symbol: "Ga", ka: Some(9251.74), la: Some(1097.92), ma: None },
    XrayEnergies { symbol: "Ge", ka: Some(9886.42), la: Some(1188.0), ma: None },
    XrayEnergies { symbol: "As", ka: Some(10543.72), la: Some(1282.0), ma: None },
    XrayEnergies { symbol: "Se", ka: Some(11222.4), la: Some(1379.1), ma: None },
    XrayEnergies { symbol: "Br", ka: Some(11924.2), la: Some(1480.43), ma: None },
    XrayEnergies { symbol: "Kr", ka: Some(12649.0), la: Some(1586.0), ma: None },
    XrayEnergies { symbol: "Rb", ka: Some(13395.3), la: Some(1694.13), ma: None },
    XrayEnergies { symbol: "Sr", ka: Some(14165.0), la: Some(1806.56), ma: None },
    XrayEnergies { symbol: "Y", ka: Some(14958.4), la: Some(1922.56), ma: None },
    XrayEnergies { symbol: "Zr", ka: Some(15775.1), la: Some(2042.36), ma: None },
    XrayEnergies { symbol: "Nb", ka: Some(16615.1), la: Some(2165.89), ma: None },
    XrayEnergies { symbol: "Mo", ka: Some(17479.34), la: Some(2293.16), ma: None },
    XrayEnergies { symbol: "Tc", ka: Some(18367.1), la: Some(2424.0), ma: None },
    XrayEnergies { symbol: "Ru", ka: Some(19279.2), la: Some(2558.55), ma: None },
    XrayEnergies { symbol: "Rh", ka: Some(20216.1), la: Some(2696.74), ma: None },
    XrayEnergies { symbol: "Pd", ka: Some(21177.1), la: Some(2838.61), ma: None },
    XrayEnergies { symbol: "Ag", ka: Some(22162.92), la: Some(2984.31), ma: None },
    XrayEnergies { symbol: "Cd", ka: Some(23173.6), la: Some(3133.73), ma: None },
    XrayEnergies { symbol: "In", ka: Some(24209.7), la: Some(3286.94), ma: None },
    XrayEnergies { symbol: "Sn", ka: Some(25271.3), la: Some(3443.93), ma: None },
    XrayEnergies { symbol: "Sb", ka: Some(26359.1), la: Some(3604.72), ma: None },
    XrayEnergies { symbol: "Te", ka: Some(27472.4), la: Some(3769.33), ma: None },
    XrayEnergies { symbol: "I", ka: Some(28612.0), la: Some(3937.65), ma: None },
    XrayEnergies { symbol: "Xe", ka: Some(29779.0), la: Some(4109.9), ma: None },
    XrayEnergies { symbol: "Cs", ka: Some(30972.8), la: Some(4286.5), ma: None },
    XrayEnergies { symbol: "Ba", ka: Some(32193.6), la: Some(4466.26), ma: None },
    XrayEnergies { symbol: "La", ka: Some(33441.8), la: Some(4650.97), ma: Some(833.0) },
    XrayEnergies { symbol: "Ce", ka: Some(34719.7), la: Some(4840.2), ma: Some(883.0) },
    XrayEnergies { symbol: "Pr", ka: Some(36026.3), la: Some(5037.7), ma: Some(929.0) },
    XrayEnergies { symbol: "Nd", ka: Some(37361.0), la: Some(5236.6), ma: Some(978.0) },
    XrayEnergies { symbol: "Pm", ka: Some(38724.7), la: Some(5432.5), ma: None },
    XrayEnergies { symbol: "Sm", ka: Some(40118.1), la: Some(5636.1), ma: Some(1081.0) },
    XrayEnergies { symbol: "Eu", ka: Some(41542.2), la: Some(5845.7), ma: Some(1131.0) },
    XrayEnergies { symbol: "Gd", ka: Some(42996.2), la: Some(6057.2), ma: Some(1185.0) },
    XrayEnergies { symbol: "Tb", ka: Some(44481.6), la: Some(6272.8), ma: Some(1240.0) },
    XrayEnergies { symbol: "Dy", ka: Some(45998.4), la: Some(6495.2), ma: Some(1293.0) },
    XrayEnergies { symbol: "Ho", ka: Some(47546.7), la: Some(6719.8), ma: Some(1348.0) },
    XrayEnergies { symbol: "Er", ka: Some(49127.7), la: Some(6948.7), ma: Some(1406.0) },
    XrayEnergies { symbol: "Tm", ka: Some(50741.6), la: Some(7179.9), ma: Some(1462.0) },
    XrayEnergies { symbol: "Yb", ka: Some(52388.9), la: Some(7415.6), ma: Some(1521.4) },
    XrayEnergies { symbol: "Lu", ka: Some(54069.8), la: Some(7655.5), ma: Some(1581.3) },
    XrayEnergies { symbol: "Hf", ka: Some(55790.2), la: Some(7899.0), ma: Some(1644.6) },
    XrayEnergies { symbol: "Ta", ka: Some(57532.0), la: Some(8146.1), ma: Some(1710.0) },
    XrayEnergies { symbol: "W", ka: Some(59318.24), la: Some(8397.6), ma: Some(1775.4) },
    XrayEnergies { symbol: "Re", ka: Some(61140.3), la: Some(8652.5), ma: Some(1842.5) },
    XrayEnergies { symbol: "Os", ka: Some(63000.5), la: Some(8911.7), ma: Some(1910.2) },
    XrayEnergies { symbol: "Ir", ka: Some(64995.6), la: Some(9175.1), ma: Some(1979.9) },
    XrayEnergies { symbol: "Pt", ka: Some(66832.0), la: Some(9442.3), ma: Some(2050.5) },
    XrayEnergies { symbol: "Au", ka: Some(68803.7), la: Some(9718.4), ma: Some(2122.9) },
    XrayEnergies { symbol: "Hg", ka: Some(70819.0), la: Some(9988.8), ma: Some(2195.3) },
    XrayEnergies { symbol: "Tl", ka: Some(72871.5), la: Some(10268.5), ma: Some(2270.6) },
    XrayEnergies { symbol: "Pb", ka: Some(74969.4), la: Some(10551.5), ma: Some(2345.5) },
    XrayEnergies { symbol: "Bi", ka: Some(77107.9), la: Some(10838.8), ma: Some(2422.6) },
    XrayEnergies { symbol: "Po", ka: Some(79290.0), la: Some(11130.8), ma: None },
    XrayEnergies { symbol: "At", ka: Some(81520.0), la: Some(11426.8), ma: None },
    XrayEnergies { symbol: "Rn", ka: Some(83780.0), la: Some(11727.0), ma: None },
    XrayEnergies { symbol: "Fr", ka: Some(86100.0), la: Some(12031.3), ma: None },
    XrayEnergies { symbol: "Ra", ka: Some(88470.0), la: Some(12339.7), ma: None },
    XrayEnergies { symbol: "Ac", ka: Some(90884.0), la: Some(12652.0), ma: None },
    XrayEnergies { symbol: "Th", ka: Some(93350.0), la: Some(12968.7), ma: Some(2996.1) },
    XrayEnergies { symbol: "Pa", ka: Some(95868.0), la: Some(13290.7), ma: Some(3082.3) },
    XrayEnergies { symbol: "U", ka: Some(98439.0), la: Some(13614.7), ma: Some(3170.8) },
    XrayEnergies { symbol: "Np", ka: None, la: Some(13944.1), ma: None },
    XrayEnergies { symbol: "Pu", ka: None, la: Some(14278.6), ma: None },
    XrayEnergies { symbol: "Am", ka: None, la: Some(14617.2), ma: None },
];

static XRAY_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    XRAY_ENERGIES
        .iter()
        .enumerate()
        .map(|(i, e)| (e.symbol, i))
        .collect()
});

/// 查找元素的谱线能量
pub fn get_xray_energies(symbol: &str) -> Option<&'static XrayEnergies> {
    XRAY_INDEX.get(symbol).map(|&i| &XRAY_ENERGIES[i])
}

/// 查找元素某线系 α 线能量 (keV)
pub fn line_energy_kev(symbol: &str, family: LineFamily) -> Option<f64> {
    get_xray_energies(symbol).and_then(|e| e.energy_kev(family))
}
