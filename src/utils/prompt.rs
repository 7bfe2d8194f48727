//! # 终端交互输入
//!
//! 使用 `console` 从终端读取数值，供相机长度缺失时的交互式回退使用。
//!
//! ## 依赖关系
//! - 被 `commands/calibrate.rs` 使用
//! - 使用 `console` crate

use console::{style, Term};

/// 解析用户输入的数值；空行或无法解析返回 `None`
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 在终端提示并读取一个数值
///
/// 非交互终端或读取失败时返回 `None`。
pub fn ask_number(question: &str) -> Option<f64> {
    let term = Term::stderr();
    if !term.is_term() {
        log::warn!("Not an interactive terminal, cannot ask: {}", question);
        return None;
    }

    if term
        .write_str(&format!("{} {} ", style("?").yellow().bold(), question))
        .is_err()
    {
        return None;
    }

    let line = term.read_line().ok()?;
    let value = parse_number(&line);
    if value.is_none() && !line.trim().is_empty() {
        let _ = term.write_line(&format!("{} '{}' is not a number", style("!").red(), line.trim()));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1.255\n"), Some(1.255));
        assert_eq!(parse_number("  200 "), Some(200.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
