//! # 元素与谱线选择
//!
//! 周期表选择器的核心逻辑（不含界面）：维护已选元素和已选谱线列表，
//! 生成谱线编码（`Al_Ka`）和带能量的显示文本（`Al_Kα: 1.49 keV`）。
//!
//! ## 依赖关系
//! - 被 `commands/lines.rs`, `commands/kfactor.rs` 和 `eds/maps.rs` 使用
//! - 使用 `data/elements.rs`, `data/xray.rs`

use crate::data::{elements, xray};
use crate::error::{Cv4emError, Result};
use crate::models::LineFamily;

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static LINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]?)_([KLM])a$").unwrap());

/// 解析后的谱线编码
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineCode {
    pub element: String,
    pub family: LineFamily,
}

impl LineCode {
    /// 该谱线的 α 线能量 (keV)
    pub fn energy_kev(&self) -> Result<f64> {
        xray::line_energy_kev(&self.element, self.family)
            .ok_or_else(|| Cv4emError::key_not_found("X-ray energy", self.to_string()))
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.element, self.family.alpha_code())
    }
}

/// 严格解析谱线编码（仅接受 α 线，如 `Al_Ka`）
pub fn parse_line_code(code: &str) -> Result<LineCode> {
    let caps = LINE_CODE_RE
        .captures(code.trim())
        .ok_or_else(|| Cv4emError::InvalidLineCode(code.to_string()))?;

    let family = caps[2]
        .chars()
        .next()
        .and_then(LineFamily::from_letter)
        .ok_or_else(|| Cv4emError::InvalidLineCode(code.to_string()))?;

    Ok(LineCode {
        element: caps[1].to_string(),
        family,
    })
}

/// 元素具有能量数据的线系
pub fn available_families(symbol: &str) -> Vec<LineFamily> {
    match xray::get_xray_energies(symbol) {
        Some(energies) => LineFamily::ALL
            .into_iter()
            .filter(|f| energies.energy_ev(*f).is_some())
            .collect(),
        None => Vec::new(),
    }
}

/// 已选谱线
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLine {
    pub element: &'static str,
    pub family: LineFamily,
    pub energy_kev: f64,
}

impl SelectedLine {
    /// 谱线编码，如 `Al_Ka`
    pub fn code(&self) -> String {
        format!("{}_{}", self.element, self.family.alpha_code())
    }

    /// 显示文本，如 `Al_Kα: 1.49 keV`
    pub fn display(&self) -> String {
        format!(
            "{}_{}: {:.2} keV",
            self.element,
            self.family.alpha_label(),
            self.energy_kev
        )
    }
}

/// 元素与谱线的选择状态
#[derive(Debug, Clone, Default)]
pub struct LineSelection {
    elements: Vec<&'static str>,
    lines: Vec<SelectedLine>,
}

impl LineSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择元素（重复选择无效果）
    pub fn select_element(&mut self, symbol: &str) -> Result<()> {
        let element = elements::get_element(symbol)
            .ok_or_else(|| Cv4emError::key_not_found("element", symbol))?;
        if !self.elements.contains(&element.symbol) {
            self.elements.push(element.symbol);
        }
        Ok(())
    }

    /// 取消选择元素，已添加的谱线保留
    pub fn remove_element(&mut self, symbol: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|s| *s != symbol);
        self.elements.len() != before
    }

    /// 为元素添加指定线系的 α 线；没有能量数据的线系被跳过。
    /// 返回实际新增的谱线数。
    pub fn add_lines(&mut self, symbol: &str, families: &[LineFamily]) -> Result<usize> {
        self.select_element(symbol)?;
        let element = elements::get_element(symbol)
            .ok_or_else(|| Cv4emError::key_not_found("element", symbol))?;

        let mut added = 0;
        for &family in families {
            let Some(energy_kev) = xray::line_energy_kev(element.symbol, family) else {
                continue;
            };
            let exists = self
                .lines
                .iter()
                .any(|l| l.element == element.symbol && l.family == family);
            if exists {
                continue;
            }
            self.lines.push(SelectedLine {
                element: element.symbol,
                family,
                energy_kev,
            });
            added += 1;
        }
        Ok(added)
    }

    /// 按编码删除谱线
    pub fn remove_line(&mut self, code: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.code() != code);
        self.lines.len() != before
    }

    pub fn elements(&self) -> &[&'static str] {
        &self.elements
    }

    pub fn lines(&self) -> &[SelectedLine] {
        &self.lines
    }

    /// 谱线编码列表，可直接传给 k 因子查询
    pub fn xray_lines(&self) -> Vec<String> {
        self.lines.iter().map(SelectedLine::code).collect()
    }

    /// 显示文本列表
    pub fn display_lines(&self) -> Vec<String> {
        self.lines.iter().map(SelectedLine::display).collect()
    }
}
