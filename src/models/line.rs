//! # X 射线谱线族
//!
//! K / L / M 线系及其 α 线的编码与显示名。
//!
//! ## 依赖关系
//! - 被 `data/`, `eds/` 使用
//! - 无外部模块依赖

use std::fmt;

/// X 射线线系（壳层跃迁系列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineFamily {
    K,
    L,
    M,
}

impl LineFamily {
    /// 全部线系，按 K, L, M 排序
    pub const ALL: [LineFamily; 3] = [LineFamily::K, LineFamily::L, LineFamily::M];

    /// 从线系字母解析（区分大小写）
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'K' => Some(LineFamily::K),
            'L' => Some(LineFamily::L),
            'M' => Some(LineFamily::M),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            LineFamily::K => 'K',
            LineFamily::L => 'L',
            LineFamily::M => 'M',
        }
    }

    /// α 线编码，如 "Ka"
    pub fn alpha_code(self) -> &'static str {
        match self {
            LineFamily::K => "Ka",
            LineFamily::L => "La",
            LineFamily::M => "Ma",
        }
    }

    /// α 线显示名，如 "Kα"
    pub fn alpha_label(self) -> &'static str {
        match self {
            LineFamily::K => "Kα",
            LineFamily::L => "Lα",
            LineFamily::M => "Mα",
        }
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter_is_case_sensitive() {
        assert_eq!(LineFamily::from_letter('K'), Some(LineFamily::K));
        assert_eq!(LineFamily::from_letter('M'), Some(LineFamily::M));
        assert_eq!(LineFamily::from_letter('k'), None);
        assert_eq!(LineFamily::from_letter('N'), None);
    }

    #[test]
    fn test_alpha_code_and_label() {
        assert_eq!(LineFamily::L.alpha_code(), "La");
        assert_eq!(LineFamily::L.alpha_label(), "Lα");
        assert_eq!(LineFamily::K.to_string(), "K");
    }
}
