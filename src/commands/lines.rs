//! # lines 命令实现
//!
//! 选择元素、添加线系并列出 X 射线谱线；可打印按分类着色的周期表。
//!
//! ## 依赖关系
//! - 使用 `cli/lines.rs` 定义的参数
//! - 使用 `eds/lines.rs`, `data/elements.rs`, `data/xray.rs`
//! - 使用 `utils/output.rs`

use crate::cli::lines::LinesArgs;
use crate::cli::to_families;
use crate::data::elements::{Category, ELEMENTS, GRID_SIZE};
use crate::data::{get_element, get_xray_energies};
use crate::eds::{available_families, LineSelection};
use crate::error::Result;
use crate::models::LineFamily;
use crate::utils::output;

use colored::{ColoredString, Colorize};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct LineRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Line")]
    label: String,
    #[tabled(rename = "Energy (keV)")]
    energy: String,
}

/// 执行 lines 命令
pub fn execute(args: LinesArgs) -> Result<()> {
    let families = to_families(&args.family);

    let mut selection = LineSelection::new();
    for symbol in &args.elements {
        let symbol = symbol.trim();
        let added = selection.add_lines(symbol, &families)?;
        if added == 0 {
            let available: Vec<String> = available_families(symbol)
                .iter()
                .map(|f| f.alpha_label().to_string())
                .collect();
            output::print_skip(
                symbol,
                &format!("no line in requested families (available: {})", join_or_none(&available)),
            );
        }
    }

    for item in &args.exclude {
        if !exclude(&mut selection, item.trim()) {
            output::print_skip(item, "not in the selection");
        }
    }

    if args.table {
        output::print_header("Periodic Table");
        print_periodic_table(selection.elements());
        print_legend();
    }

    if selection.lines().is_empty() {
        if !args.table {
            output::print_warning("No X-ray lines selected.");
        }
        return Ok(());
    }

    output::print_header("Selected X-ray Lines");
    let rows: Vec<LineRow> = selection
        .lines()
        .iter()
        .map(|l| LineRow {
            code: l.code(),
            label: format!("{}_{}", l.element, l.family.alpha_label()),
            energy: format!("{:.3}", l.energy_kev),
        })
        .collect();
    println!("{}", Table::new(&rows));

    for line in selection.display_lines() {
        println!("  {}", line);
    }
    println!();
    output::print_info(&format!("xray_lines = [{}]", selection.xray_lines().join(", ")));
    Ok(())
}

/// 移除一条谱线，或移除元素及其全部谱线
fn exclude(selection: &mut LineSelection, item: &str) -> bool {
    if item.contains('_') {
        return selection.remove_line(item);
    }
    let mut removed = selection.remove_element(item);
    for family in LineFamily::ALL {
        removed |= selection.remove_line(&format!("{}_{}", item, family.alpha_code()));
    }
    removed
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// 按分类着色
fn paint(text: &str, category: Category) -> ColoredString {
    match category {
        Category::Nonmetal => text.bright_green(),
        Category::NobleGas => text.bright_cyan(),
        Category::AlkaliMetal => text.bright_red(),
        Category::AlkalineEarth => text.yellow(),
        Category::Metalloid => text.cyan(),
        Category::Halogen => text.bright_yellow(),
        Category::TransitionMetal => text.bright_blue(),
        Category::PostTransitionMetal => text.white(),
        Category::Lanthanide => text.magenta(),
        Category::Actinide => text.bright_magenta(),
    }
}

/// 周期表网格，每格为 `(符号, 分类)`
fn periodic_grid() -> Vec<Vec<Option<(&'static str, Category)>>> {
    let (rows, cols) = GRID_SIZE;
    let mut grid = vec![vec![None; cols]; rows];
    for el in ELEMENTS.iter() {
        grid[el.row][el.column] = Some((el.symbol, el.category));
    }
    grid
}

fn print_periodic_table(selected: &[&str]) {
    for row in periodic_grid() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some((symbol, category)) => {
                    let text = format!("{:<3}", symbol);
                    if selected.contains(symbol) {
                        text.black().on_bright_white().bold().to_string()
                    } else {
                        paint(&text, *category).to_string()
                    }
                }
                None => "   ".to_string(),
            })
            .collect();
        println!("  {}", line.join(" "));
    }
    println!();

    for symbol in selected {
        let Some(element) = get_element(symbol) else {
            continue;
        };
        let energies: Vec<String> = get_xray_energies(element.symbol)
            .map(|e| {
                LineFamily::ALL
                    .iter()
                    .filter_map(|&f| {
                        e.energy_kev(f)
                            .map(|kev| format!("{}: {:.2} keV", f.alpha_label(), kev))
                    })
                    .collect()
            })
            .unwrap_or_default();
        println!(
            "  {} {} ({}) {}",
            paint(&format!("{:<3}", element.symbol), element.category).bold(),
            element.name,
            element.z,
            join_or_none(&energies).dimmed()
        );
    }
}

fn print_legend() {
    let categories = [
        Category::AlkaliMetal,
        Category::AlkalineEarth,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];
    let legend: Vec<String> = categories
        .iter()
        .map(|c| paint(&c.to_string(), *c).to_string())
        .collect();
    println!("\n  {}", legend.join("  "));
}
