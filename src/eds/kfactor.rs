//! # k 因子查询
//!
//! 根据 X 射线谱线编码（如 `"Al_Ka"`）查找 k 因子。
//!
//! ## 规则
//! - 元素符号取第一个 `_` 之前的部分（没有 `_` 时取整个字符串）
//! - 线系字母取编码倒数第二个字符（`K`、`L` 或 `M`）
//! - 两个键均精确匹配、区分大小写，缺失时返回 `KeyNotFound`
//! - 表中存储的 0 是有效数据，原样返回
//!
//! ## 依赖关系
//! - 被 `commands/kfactor.rs` 调用
//! - 使用 `data/kfactors.rs` 的静态表

use crate::data::kfactors;
use crate::error::{Cv4emError, Result};
use crate::models::{LineFamily, SpectralImage};

/// 编码中的元素符号
pub fn line_element(line: &str) -> &str {
    line.split_once('_').map(|(el, _)| el).unwrap_or(line)
}

/// 编码倒数第二个字符对应的线系
pub fn line_family(line: &str) -> Result<LineFamily> {
    let letter = line.chars().rev().nth(1);
    letter.and_then(LineFamily::from_letter).ok_or_else(|| {
        Cv4emError::key_not_found(
            "k-factor line",
            letter.map(String::from).unwrap_or_default(),
        )
    })
}

/// 查询单条谱线的 k 因子
pub fn lookup_kfactor(line: &str) -> Result<f64> {
    let symbol = line_element(line);
    let row = kfactors::get_kfactor_row(symbol)
        .ok_or_else(|| Cv4emError::key_not_found("k-factor element", symbol))?;
    Ok(row.factor(line_family(line)?))
}

/// 按输入顺序返回每条谱线的 k 因子
pub fn find_kfactors<S: AsRef<str>>(lines: &[S]) -> Result<Vec<f64>> {
    lines
        .iter()
        .map(|line| lookup_kfactor(line.as_ref()))
        .collect()
}

/// 使用谱图像元数据中记录的谱线列表查询 k 因子
pub fn find_kfactors_for(signal: &SpectralImage) -> Result<Vec<f64>> {
    if signal.metadata.xray_lines.is_empty() {
        return Err(Cv4emError::InvalidArgument(format!(
            "signal '{}' has no X-ray lines; use a list like ['Al_Ka', 'O_Ka']",
            signal.metadata.title
        )));
    }
    find_kfactors(&signal.metadata.xray_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_kfactors_in_order() {
        let values = find_kfactors(&["Al_Ka", "Zr_Ka", "O_Ka", "Ti_Ka"]).unwrap();
        assert_eq!(values, vec![11.011, 6.18, 1.7, 1.21]);
    }

    #[test]
    fn test_l_and_m_columns() {
        let values = find_kfactors(&["Zr_La", "Au_Ma", "Ba_Ma"]).unwrap();
        assert_eq!(values, vec![2.36, 1.536, 251.024]);
    }

    #[test]
    fn test_stored_zero_is_returned() {
        // Al 的 L 线未标定，表中为 0
        assert_eq!(find_kfactors(&["Al_La"]).unwrap(), vec![0.0]);
        assert_eq!(find_kfactors(&["H_Ka"]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_unknown_element() {
        let err = find_kfactors(&["Al_Ka", "Xx_Ka"]).unwrap_err();
        match err {
            Cv4emError::KeyNotFound { key, .. } => assert_eq!(key, "Xx"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_element_lookup_is_case_sensitive() {
        assert!(matches!(
            find_kfactors(&["al_Ka"]),
            Err(Cv4emError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_line_family() {
        let err = lookup_kfactor("Al_Na").unwrap_err();
        match err {
            Cv4emError::KeyNotFound { key, .. } => assert_eq!(key, "N"),
            other => panic!("unexpected error: {other:?}"),
        }
        // 小写线系字母同样不存在
        assert!(lookup_kfactor("Al_ka").is_err());
    }

    #[test]
    fn test_family_taken_from_second_last_char() {
        // 子线序号不影响线系判定
        assert_eq!(line_family("Cu_Kb").unwrap(), LineFamily::K);
        assert_eq!(lookup_kfactor("Cu_Kb").unwrap(), 2.073);
    }

    #[test]
    fn test_identifier_without_separator() {
        // 没有 "_" 时整个字符串作为元素符号；"Al" 不是完整编码但仍按规则查找
        assert!(matches!(
            lookup_kfactor("AlKa"),
            Err(Cv4emError::KeyNotFound { .. })
        ));
        // 单字符：元素 "K" 存在，但没有线系字母
        assert!(matches!(lookup_kfactor("K"), Err(Cv4emError::KeyNotFound { .. })));
        assert_eq!(line_element("K"), "K");
        assert_eq!(line_element("Fe_La"), "Fe");
    }

    #[test]
    fn test_find_kfactors_for_signal() {
        let mut signal = SpectralImage::from_cube(vec![0.0; 4], [1, 1, 4]).unwrap();
        assert!(matches!(
            find_kfactors_for(&signal),
            Err(Cv4emError::InvalidArgument(_))
        ));

        signal.metadata.xray_lines = vec!["Fe_Ka".to_string(), "Fe_La".to_string()];
        assert_eq!(find_kfactors_for(&signal).unwrap(), vec![2.806, 2.863]);
    }
}
