//! # 元素周期表数据
//!
//! 元素符号、名称、原子序数、周期表网格位置及分类，用于谱线选择和周期表打印。
//! 镧系与锕系放在主表下方的第 8、9 行。
//!
//! ## 依赖关系
//! - 被 `eds/lines.rs` 和 `commands/lines.rs` 使用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// 元素分类（用于着色）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarth,
    Metalloid,
    Halogen,
    TransitionMetal,
    PostTransitionMetal,
    Lanthanide,
    Actinide,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Nonmetal => "Nonmetal",
            Category::NobleGas => "Noble Gas",
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarth => "Alkaline Earth",
            Category::Metalloid => "Metalloid",
            Category::Halogen => "Halogen",
            Category::TransitionMetal => "Transition Metal",
            Category::PostTransitionMetal => "Post-transition Metal",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
        };
        write!(f, "{}", name)
    }
}

/// 元素信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub z: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    /// 周期表网格行（从 0 开始）
    pub row: usize,
    /// 周期表网格列（从 0 开始）
    pub column: usize,
    pub category: Category,
}

/// 周期表网格尺寸（行, 列）
pub const GRID_SIZE: (usize, usize) = (10, 18);

/// 全部 118 个元素，按原子序数排序
pub static ELEMENTS: [Element; 118] = [
    Element { z: 1, symbol: "H", name: "Hydrogen", row: 0, column: 0, category: Category::Nonmetal },
    Element { z: 2, symbol: "He", name: "Helium", row: 0, column: 17, category: Category::NobleGas },
    Element { z: 3, symbol: "Li", name: "Lithium", row: 1, column: 0, category: Category::AlkaliMetal },
    Element { z: 4, symbol: "Be", name: "Beryllium", row: 1, column: 1, category: Category::AlkalineEarth },
    Element { z: 5, symbol: "B", name: "Boron", row: 1, column: 12, category: Category::Metalloid },
    Element { z: 6, symbol: "C", name: "Carbon", row: 1, column: 13, category: Category::Nonmetal },
    Element { z: 7, symbol: "N", name: "Nitrogen", row: 1, column: 14, category: Category::Nonmetal },
    Element { z: 8, symbol: "O", name: "Oxygen", row: 1, column: 15, category: Category::Nonmetal },
    Element { z: 9, symbol: "F", name: "Fluorine", row: 1, column: 16, category: Category::Halogen },
    Element { z: 10, symbol: "Ne", name: "Neon", row: 1, column: 17, category: Category::NobleGas },
    Element { z: 11, symbol: "Na", name: "Sodium", row: 2, column: 0, category: Category::AlkaliMetal },
    Element { z: 12, symbol: "Mg", name: "Magnesium", row: 2, column: 1, category: Category::AlkalineEarth },
    Element { z: 13, symbol: "Al", name: "Aluminum", row: 2, column: 12, category: Category::PostTransitionMetal },
    Element { z: 14, symbol: "Si", name: "Silicon", row: 2, column: 13, category: Category::Metalloid },
    Element { z: 15, symbol: "P", name: "Phosphorus", row: 2, column: 14, category: Category::Nonmetal },
    Element { z: 16, symbol: "S", name: "Sulfur", row: 2, column: 15, category: Category::Nonmetal },
    Element { z: 17, symbol: "Cl", name: "Chlorine", row: 2, column: 16, category: Category::Halogen },
    Element { z: 18, symbol: "Ar", name: "Argon", row: 2, column: 17, category: Category::NobleGas },
    Element { z: 19, symbol: "K", name: "Potassium", row: 3, column: 0, category: Category::AlkaliMetal },
    Element { z: 20, symbol: "Ca", name: "Calcium", row: 3, column: 1, category: Category::AlkalineEarth },
    Element { z: 21, symbol: "Sc", name: "Scandium", row: 3, column: 2, category: Category::TransitionMetal },
    Element { z: 22, symbol: "Ti", name: "Titanium", row: 3, column: 3, category: Category::TransitionMetal },
    Element { z: 23, symbol: "V", name: "Vanadium", row: 3, column: 4, category: Category::TransitionMetal },
    Element { z: 24, symbol: "Cr", name: "Chromium", row: 3, column: 5, category: Category::TransitionMetal },
    Element { z: 25, symbol: "Mn", name: "Manganese", row: 3, column: 6, category: Category::TransitionMetal },
    Element { z: 26, symbol: "Fe", name: "Iron", row: 3, column: 7, category: Category::TransitionMetal },
    Element { z: 27, symbol: "Co", name: "Cobalt", row: 3, column: 8, category: Category::TransitionMetal },
    Element { z: 28, symbol: "Ni", name: "Nickel", row: 3, column: 9, category: Category::TransitionMetal },
    Element { z: 29, symbol: "Cu", name: "Copper", row: 3, column: 10, category: Category::TransitionMetal },
    Element { z: 30, symbol: "Zn", name: "Zinc", row: 3, column: 11, category: Category::TransitionMetal },
    Element { z: 31, symbol: "Ga", name: "Gallium", row: 3, column: 12, category: Category::PostTransitionMetal },
    Element { z: 32, symbol: "Ge", name: "Germanium", row: 3, column: 13, category: Category::Metalloid },
    Element { z: 33, symbol: "As", name: "Arsenic", row: 3, column: 14, category: Category::Metalloid },
    Element { z: 34, symbol: "Se", name: "Selenium", row: 3, column: 15, category: Category::Nonmetal },
    Element { z: 35, symbol: "Br", name: "Bromine", row: 3, column: 16, category: Category::Halogen },
    Element { z: 36, symbol: "Kr", name: "Krypton", row: 3, column: 17, category: Category::NobleGas },
    Element { z: 37, symbol: "Rb", name: "Rubidium", row: 4, column: 0, category: Category::AlkaliMetal },
    Element { z: 38, symbol: "Sr", name: "Strontium", row: 4, column: 1, category: Category::AlkalineEarth },
    Element { z: 39, symbol: "Y", name: "Yttrium", row: 4, column: 2, category: Category::TransitionMetal },
    Element { z: 40, symbol: "Zr", name: "Zirconium", row: 4, column: 3, category: Category::TransitionMetal },
    Element { z: 41, symbol: "Nb", name: "Niobium", row: 4, column: 4, category: Category::TransitionMetal },
    Element { z: 42, symbol: "Mo", name: "Molybdenum", row: 4, column: 5, category: Category::TransitionMetal },
    Element { z: 43, symbol: "Tc", name: "Technetium", row: 4, column: 6, category: Category::TransitionMetal },
    Element { z: 44, symbol: "Ru", name: "Ruthenium", row: 4, column: 7, category: Category::TransitionMetal },
    Element { z: 45, symbol: "Rh", name: "Rhodium", row: 4, column: 8, category: Category::TransitionMetal },
    Element { z: 46, symbol: "Pd", name: "Palladium", row: 4, column: 9, category: Category::TransitionMetal },
    Element { z: 47, symbol: "Ag", name: "Silver", row: 4, column: 10, category: Category::TransitionMetal },
    Element { z: 48, symbol: "Cd", name: "Cadmium", row: 4, column: 11, category: Category::TransitionMetal },
    Element { z: 49, symbol: "In", name: "Indium", row: 4, column: 12, category: Category::PostTransitionMetal },
    Element { z: 50, symbol: "Sn", name: "Tin", row: 4, column: 13, category: Category::PostTransitionMetal },
    Element { z: 51, symbol: "Sb", name: "Antimony", row: 4, column: 14, category: Category::Metalloid },
    Element { z: 52, symbol: "Te", name: "Tellurium", row: 4, column: 15, category: Category::Metalloid },
    Element { z: 53, symbol: "I", name: "Iodine", row: 4, column: 16, category: Category::Halogen },
    Element { z: 54, symbol: "Xe", name: "Xenon", row: 4, column: 17, category: Category::NobleGas },
    Element { z: 55, symbol: "Cs", name: "Cesium", row: 5, column: 0, category: Category::AlkaliMetal },
    Element { z: 56, symbol: "Ba", name: "Barium", row: 5, column: 1, category: Category::AlkalineEarth },
    Element { z: 57, symbol: "La", name: "Lanthanum", row: 8, column: 2, category: Category::Lanthanide },
    Element { z: 58, symbol: "Ce", name: "Cerium", row: 8, column: 3, category: Category::Lanthanide },
    Element { z: 59, symbol: "Pr", name: "Praseodymium", row: 8, column: 4, category: Category::Lanthanide },
    Element { z: 60, symbol: "Nd", name: "Neodymium", row: 8, column: 5, category: Category::Lanthanide },
    Element { z: 61, symbol: "Pm", name: "Promethium", row: 8, column: 6, category: Category::Lanthanide },
    Element { z: 62, symbol: "Sm", name: "Samarium", row: 8, column: 7, category: Category::Lanthanide },
    Element { z: 63, symbol: "Eu", name: "Europium", row: 8, column: 8, category: Category::Lanthanide },
    Element { z: 64, symbol: "Gd", name: "Gadolinium", row: 8, column: 9, category: Category::Lanthanide },
    Element { z: 65, symbol: "Tb", name: "Terbium", row: 8, column: 10, category: Category::Lanthanide },
    Element { z: 66, symbol: "Dy", name: "Dysprosium", row: 8, column: 11, category: Category::Lanthanide },
    Element { z: 67, symbol: "Ho", name: "Holmium", row: 8, column: 12, category: Category::Lanthanide },
    Element { z: 68, symbol: "Er", name: "Erbium", row: 8, column: 13, category: Category::Lanthanide },
    Element { z: 69, symbol: "Tm", name: "Thulium", row: 8, column: 14, category: Category::Lanthanide },
    Element { z: 70, symbol: "Yb", name: "Ytterbium", row: 8, column: 15, category: Category::Lanthanide },
    Element { z: 71, symbol: "Lu", name: "Lutetium", row: 8, column: 16, category: Category::Lanthanide },
    Element { z: 72, symbol: "Hf", name: "Hafnium", row: 5, column: 3, category: Category::TransitionMetal },
    Element { z: 73, symbol: "Ta", name: "Tantalum", row: 5, column: 4, category: Category::TransitionMetal },
    Element { z: 74, symbol: "W", name: "Tungsten", row: 5, column: 5, category: Category::TransitionMetal },
    Element { z: 75, symbol: "Re", name: "Rhenium", row: 5, column: 6, category: Category::TransitionMetal },
    Element { z: 76, symbol: "Os", name: "Osmium", row: 5, column: 7, category: Category::TransitionMetal },
    Element { z: 77, symbol: "Ir", name: "Iridium", row: 5, column: 8, category: Category::TransitionMetal },
    Element { z: 78, symbol: "Pt", name: "Platinum", row: 5, column: 9, category: Category::TransitionMetal },
    Element { z: 79, symbol: "Au", name: "Gold", row: 5, column: 10, category: Category::TransitionMetal },
    Element { z: 80, symbol: "Hg", name: "Mercury", row: 5, column: 11, category: Category::TransitionMetal },
    Element { z: 81, symbol: "Tl", name: "Thallium", row: 5, column: 12, category: Category::PostTransitionMetal },
    Element { z: 82, symbol: "Pb", name: "Lead", row: 5, column: 13, category: Category::PostTransitionMetal },
    Element { z: 83, symbol: "Bi", name: "Bismuth", row: 5, column: 14, category: Category::PostTransitionMetal },
    Element { z: 84, symbol: "Po", name: "Polonium", row: 5, column: 15, category: Category::Metalloid },
    Element { z: 85, symbol: "At", name: "Astatine", row: 5, column: 16, category: Category::Halogen },
    Element { z: 86, symbol: "Rn", name: "Radon", row: 5, column: 17, category: Category::NobleGas },
    Element { z: 87, symbol: "Fr", name: "Francium", row: 6, column: 0, category: Category::AlkaliMetal },
    Element { z: 88, symbol: "Ra", name: "Radium", row: 6, column: 1, category: Category::AlkalineEarth },
    Element { z: 89, symbol: "Ac", name: "Actinium", row: 9, column: 2, category: Category::Actinide },
    Element { z: 90, symbol: "Th", name: "Thorium", row: 9, column: 3, category: Category::Actinide },
    Element { z: 91, symbol: "Pa", name: "Protactinium", row: 9, column: 4, category: Category::Actinide },
    Element { z: 92, symbol: "U", name: "Uranium", row: 9, column: 5, category: Category::Actinide },
    Element { z: 93, symbol: "Np", name: "Neptunium", row: 9, column: 6, category: Category::Actinide },
    Element { z: 94, symbol: "Pu", name: "Plutonium", row: 9, column: 7, category: Category::Actinide },
    Element { z: 95, symbol: "Am", name: "Americium", row: 9, column: 8, category: Category::Actinide },
    Element { z: 96, symbol: "Cm", name: "Curium", row: 9, column: 9, category: Category::Actinide },
    Element { z: 97, symbol: "Bk", name: "Berkelium", row: 9, column: 10, category: Category::Actinide },
    Element { z: 98, symbol: "Cf", name: "Californium", row: 9, column: 11, category: Category::Actinide },
    Element { z: 99, symbol: "Es", name: "Einsteinium", row: 9, column: 12, category: Category::Actinide },
    Element { z: 100, symbol: "Fm", name: "Fermium", row: 9, column: 13, category: Category::Actinide },
    Element { z: 101, symbol: "Md", name: "Mendelevium", row: 9, column: 14, category: Category::Actinide },
    Element { z: 102, symbol: "No", name: "Nobelium", row: 9, column: 15, category: Category::Actinide },
    Element { z: 103, symbol: "Lr", name: "Lawrencium", row: 9, column: 16, category: Category::Actinide },
    Element { z: 104, symbol: "Rf", name: "Rutherfordium", row: 6, column: 3, category: Category::TransitionMetal },
    Element { z: 105, symbol: "Db", name: "Dubnium", row: 6, column: 4, category: Category::TransitionMetal },
    Element { z: 106, symbol: "Sg", name: "Seaborgium", row: 6, column: 5, category: Category::TransitionMetal },
    Element { z: 107, symbol: "Bh", name: "Bohrium", row: 6, column: 6, category: Category::TransitionMetal },
    Element { z: 108, symbol: "Hs", name: "Hassium", row: 6, column: 7, category: Category::TransitionMetal },
    Element { z: 109, symbol: "Mt", name: "Meitnerium", row: 6, column: 8, category: Category::TransitionMetal },
    Element { z: 110, symbol: "Ds", name: "Darmstadtium", row: 6, column: 9, category: Category::TransitionMetal },
    Element { z: 111, symbol: "Rg", name: "Roentgenium", row: 6, column: 10, category: Category::TransitionMetal },
    Element { z: 112, symbol: "Cn", name: "Copernicium", row: 6, column: 11, category: Category::TransitionMetal },
    Element { z: 113, symbol: "Nh", name: "Nihonium", row: 6, column: 12, category: Category::PostTransitionMetal },
    Element { z: 114, symbol: "Fl", name: "Flerovium", row: 6, column: 13, category: Category::PostTransitionMetal },
    Element { z: 115, symbol: "Mc", name: "Moscovium", row: 6, column: 14, category: Category::PostTransitionMetal },
    Element { z: 116, symbol: "Lv", name: "Livermorium", row: 6, column: 15, category: Category::PostTransitionMetal },
    Element { z: 117, symbol: "Ts", name: "Tennessine", row: 6, column: 16, category: Category::Halogen },
    Element { z: 118, symbol: "Og", name: "Oganesson", row: 6, column: 17, category: Category::NobleGas },
];

static ELEMENT_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    ELEMENTS
        .iter()
        .enumerate()
        .map(|(i, e)| (e.symbol, i))
        .collect()
});

/// 按元素符号查找（区分大小写）
pub fn get_element(symbol: &str) -> Option<&'static Element> {
    ELEMENT_INDEX.get(symbol).map(|&i| &ELEMENTS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_ordered_by_z() {
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.z as usize, i + 1);
        }
    }

    #[test]
    fn test_grid_positions_unique_and_in_bounds() {
        let mut seen = std::collections::HashSet::new();
        for e in ELEMENTS.iter() {
            assert!(e.row < GRID_SIZE.0 && e.column < GRID_SIZE.1, "{}", e.symbol);
            assert!(seen.insert((e.row, e.column)), "duplicate cell for {}", e.symbol);
        }
    }

    #[test]
    fn test_lookup() {
        let fe = get_element("Fe").unwrap();
        assert_eq!(fe.z, 26);
        assert_eq!(fe.category, Category::TransitionMetal);
        assert!(get_element("fe").is_none());
    }
}
