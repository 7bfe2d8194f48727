//! # 美化输出工具
//!
//! 提供统一的终端输出样式。库代码的诊断信息走 `log`，这里只负责面向用户的输出。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印被跳过的条目
pub fn print_skip(entry: &str, reason: &str) {
    println!("{} {} {}", "[SKIP]".dimmed(), entry, reason.dimmed());
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印键值对（标定结果等）
pub fn print_field(key: &str, value: &str) {
    println!("  {:<18} {}", format!("{}:", key).cyan(), value);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(RULE_WIDTH);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
