//! # cv4em 命令行入口
//!
//! 初始化日志后解析参数并执行子命令，出错时以状态码 1 退出。
//! 日志级别由 `RUST_LOG` 控制，默认只显示警告。

use clap::Parser;
use cv4em::cli::Cli;
use cv4em::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
