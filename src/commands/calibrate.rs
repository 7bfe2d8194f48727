//! # calibrate 命令实现
//!
//! 查找 NBED 相机长度标定，或对 HDF5 文件中的谱图像逐个标定。
//!
//! ## 功能
//! - `--list`: 打印标定表
//! - 未给出相机长度时在终端交互输入
//! - `--file`: 加载文件并写入空间轴标定
//! - 元数据缺少相机长度时：`--fallback` 给定值、`--no-prompt` 报错，否则交互输入
//!
//! ## 依赖关系
//! - 使用 `cli/calibrate.rs` 定义的参数
//! - 使用 `nbed/calibration.rs`, `loader/`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::cli::calibrate::CalibrateArgs;
use crate::error::{Cv4emError, Result};
use crate::loader;
use crate::nbed::calibration::{
    calibrate, resolve, CalibrationOutcome, CameraLengthSource, MatchRule, Microscope,
    FALLBACK_MICROSCOPE, NBED_UNITS,
};
use crate::utils::{output, prompt};

use std::path::Path;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct CalibrationRow {
    #[tabled(rename = "Camera length")]
    camera_length: String,
    #[tabled(rename = "Scale (1/nm per px)")]
    scale: String,
}

/// 执行 calibrate 命令
pub fn execute(args: CalibrateArgs) -> Result<()> {
    if args.list {
        return list_tables(args.microscope.as_deref());
    }

    if let Some(file) = &args.file {
        return calibrate_file(file, &args);
    }

    let microscope: Microscope = match &args.microscope {
        Some(name) => name.parse()?,
        None => FALLBACK_MICROSCOPE,
    };
    output::print_header(&format!("NBED Calibration ({})", microscope));

    let camera_length = match args.camera_length {
        Some(cl) => cl,
        None => prompt::ask_number(&format!("Camera length for {}:", microscope))
            .ok_or_else(|| Cv4emError::MissingMetadata("camera length".to_string()))?,
    };

    let entry = resolve(microscope, camera_length)?;
    output::print_field("Microscope", microscope.as_str());
    output::print_field("Camera length", &format!("{}", camera_length));
    output::print_field("Matched entry", &format!("{}", entry.camera_length));
    output::print_field("Scale", &format!("{} {}", entry.scale, NBED_UNITS));
    Ok(())
}

/// 打印一张或全部标定表
fn list_tables(microscope: Option<&str>) -> Result<()> {
    let microscopes = match microscope {
        Some(name) => vec![name.parse::<Microscope>()?],
        None => Microscope::ALL.to_vec(),
    };

    for microscope in microscopes {
        let table = microscope.table();
        output::print_header(&format!(
            "{} calibration ({})",
            microscope,
            describe_rule(table.rule)
        ));
        let rows: Vec<CalibrationRow> = table
            .entries
            .iter()
            .map(|e| CalibrationRow {
                camera_length: format!("{}", e.camera_length),
                scale: format!("{}", e.scale),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }
    Ok(())
}

fn describe_rule(rule: MatchRule) -> String {
    match rule {
        MatchRule::ExactInteger => "integer match".to_string(),
        MatchRule::Tolerance(tol) => format!("match within ±{}", tol),
    }
}

/// 元数据缺少相机长度时的回退策略
fn camera_length_source(args: &CalibrateArgs, title: &str) -> CameraLengthSource<'static> {
    if let Some(cl) = args.fallback {
        CameraLengthSource::Provided(cl)
    } else if args.no_prompt {
        CameraLengthSource::Fail
    } else {
        let question = format!("Camera length of '{}' (HD2700):", title);
        CameraLengthSource::Prompt(Box::new(move || prompt::ask_number(&question)))
    }
}

/// 标定文件中的所有谱图像
fn calibrate_file(path: &Path, args: &CalibrateArgs) -> Result<()> {
    output::print_header(&format!("NBED Calibration of '{}'", path.display()));

    let mut report = loader::load_file(path)?;
    if report.signals.is_empty() {
        output::print_warning("No spectrum images found in file");
        return Ok(());
    }

    let mut calibrated = 0;
    for signal in report.signals.iter_mut() {
        if let Some(cl) = args.camera_length {
            // 命令行给出的相机长度优先于文件元数据
            signal.metadata.acquisition.camera_length = Some(cl);
        }
        let title = signal.metadata.title.clone();
        let source = camera_length_source(args, &title);

        match calibrate(signal, args.microscope.as_deref(), source)? {
            CalibrationOutcome::Calibrated { microscope, entry } => {
                calibrated += 1;
                output::print_success(&format!(
                    "{}: {} CL {} -> {} {}",
                    title, microscope, entry.camera_length, entry.scale, NBED_UNITS
                ));
            }
            CalibrationOutcome::Unresolved { message } => {
                output::print_skip(&title, &message);
            }
        }
    }

    output::print_done(&format!(
        "Calibrated {}/{} spectrum images",
        calibrated,
        report.signals.len()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_rule() {
        assert_eq!(describe_rule(MatchRule::ExactInteger), "integer match");
        assert_eq!(describe_rule(MatchRule::Tolerance(0.01)), "match within ±0.01");
    }

    #[test]
    fn test_list_unknown_microscope() {
        assert!(matches!(
            list_tables(Some("JEM2100")),
            Err(Cv4emError::UnknownMicroscope(_))
        ));
    }

    #[test]
    fn test_camera_length_source() {
        let mut args = CalibrateArgs {
            microscope: None,
            camera_length: None,
            list: false,
            file: Some("scan.h5".into()),
            fallback: Some(1.1),
            no_prompt: false,
        };
        assert!(matches!(
            camera_length_source(&args, "a"),
            CameraLengthSource::Provided(cl) if cl == 1.1
        ));

        args.fallback = None;
        args.no_prompt = true;
        assert!(matches!(
            camera_length_source(&args, "a"),
            CameraLengthSource::Fail
        ));

        args.no_prompt = false;
        assert!(matches!(
            camera_length_source(&args, "a"),
            CameraLengthSource::Prompt(_)
        ));
    }

    #[test]
    fn test_execute_with_camera_length() {
        let args = CalibrateArgs {
            microscope: Some("HD2700".to_string()),
            camera_length: Some(1.255),
            list: false,
            file: None,
            fallback: None,
            no_prompt: false,
        };
        assert!(execute(args).is_ok());

        let args = CalibrateArgs {
            microscope: None,
            camera_length: Some(123.0),
            list: false,
            file: None,
            fallback: None,
            no_prompt: false,
        };
        assert!(matches!(
            execute(args),
            Err(Cv4emError::OutOfCalibrationRange { .. })
        ));
    }
}
