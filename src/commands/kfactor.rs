//! # kfactor 命令实现
//!
//! 查询 X 射线谱线的 k 因子并以表格显示，可导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/kfactor.rs` 定义的参数
//! - 使用 `eds/kfactor.rs`, `eds/lines.rs`
//! - 使用 `utils/output.rs`

use crate::cli::kfactor::KfactorArgs;
use crate::cli::to_families;
use crate::eds::{find_kfactors, line_element, line_family, LineSelection};
use crate::error::{Cv4emError, Result};
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct KFactorRow {
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "k-factor")]
    value: String,
}

/// CSV 记录
#[derive(Debug, Serialize, PartialEq)]
struct KFactorRecord {
    line: String,
    element: String,
    family: String,
    k_factor: f64,
}

impl KFactorRecord {
    fn new(line: &str, k_factor: f64) -> Self {
        KFactorRecord {
            line: line.to_string(),
            element: line_element(line).to_string(),
            family: line_family(line).map(|f| f.to_string()).unwrap_or_default(),
            k_factor,
        }
    }

    fn to_row(&self) -> KFactorRow {
        KFactorRow {
            line: self.line.clone(),
            element: self.element.clone(),
            family: self.family.clone(),
            value: format_value(self.k_factor),
        }
    }
}

/// 执行 kfactor 命令
pub fn execute(args: KfactorArgs) -> Result<()> {
    output::print_header("EDS k-factors (HD2700)");

    let lines = if args.elements.is_empty() {
        args.lines.clone()
    } else {
        lines_from_elements(&args)?
    };

    if lines.is_empty() {
        return Err(Cv4emError::InvalidArgument(
            "no X-ray lines to look up".to_string(),
        ));
    }

    let records = kfactor_records(&lines)?;
    let rows: Vec<KFactorRow> = records.iter().map(KFactorRecord::to_row).collect();
    println!("{}", Table::new(&rows));

    if records.iter().any(|r| r.k_factor == 0.0) {
        output::print_warning("A k-factor of 0 means the line is not tabulated for that element");
    }

    if let Some(path) = &args.csv {
        save_csv(&records, path)?;
        output::print_success(&format!("k-factors saved to '{}'", path.display()));
    }

    Ok(())
}

/// 查询全部谱线，任一谱线缺失即失败
fn kfactor_records(lines: &[String]) -> Result<Vec<KFactorRecord>> {
    let values = find_kfactors(lines)?;
    Ok(lines
        .iter()
        .zip(values)
        .map(|(line, k)| KFactorRecord::new(line, k))
        .collect())
}

/// 通过谱线选择器从元素列表生成谱线编码
fn lines_from_elements(args: &KfactorArgs) -> Result<Vec<String>> {
    let families = to_families(&args.family);
    let mut selection = LineSelection::new();
    for symbol in &args.elements {
        let added = selection.add_lines(symbol.trim(), &families)?;
        if added == 0 {
            output::print_skip(symbol, "has no tabulated line in the requested families");
        }
    }
    Ok(selection.xray_lines())
}

fn format_value(value: f64) -> String {
    if value == 0.0 {
        "0 (n/a)".to_string()
    } else {
        format!("{}", value)
    }
}

fn save_csv(records: &[KFactorRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(|e| Cv4emError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FamilyArg;

    #[test]
    fn test_lines_from_elements() {
        let args = KfactorArgs {
            lines: vec![],
            elements: vec!["Al".to_string(), "Cu".to_string()],
            family: vec![FamilyArg::K, FamilyArg::L],
            csv: None,
        };
        let lines = lines_from_elements(&args).unwrap();
        // Al 没有 Lα 能量数据
        assert_eq!(lines, vec!["Al_Ka", "Cu_Ka", "Cu_La"]);
    }

    #[test]
    fn test_save_csv() {
        let path = std::env::temp_dir().join("cv4em_test_kfactors.csv");
        let records = kfactor_records(&["Al_Ka".to_string(), "O_Ka".to_string()]).unwrap();
        save_csv(&records, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("line,element,family,k_factor"));
        assert_eq!(lines.next(), Some("Al_Ka,Al,K,11.011"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_kfactor_records() {
        let lines = vec!["Zr_La".to_string(), "Al_La".to_string()];
        let records = kfactor_records(&lines).unwrap();
        assert_eq!(
            records,
            vec![
                KFactorRecord {
                    line: "Zr_La".to_string(),
                    element: "Zr".to_string(),
                    family: "L".to_string(),
                    k_factor: 2.36,
                },
                KFactorRecord::new("Al_La", 0.0),
            ]
        );
        assert_eq!(records[1].to_row().value, "0 (n/a)");

        let lines = vec!["Al_Ka".to_string(), "Xx_Ka".to_string()];
        assert!(matches!(
            kfactor_records(&lines),
            Err(Cv4emError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_value(0.0), "0 (n/a)");
        assert_eq!(format_value(1.7), "1.7");
    }
}
