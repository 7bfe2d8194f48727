//! # load 命令实现
//!
//! 加载 EDAX HDF5 文件，汇总其中的谱图像与被跳过的条目。
//!
//! ## 功能
//! - 支持单文件和目录批量处理
//! - 并行加载（rayon），每个文件独立的加载状态
//! - 终端表格汇总，可导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/load.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `loader/` 加载文件
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::load::LoadArgs;
use crate::error::{Cv4emError, Result};
use crate::loader::{self, LoadReport};
use crate::models::SpectralImage;
use crate::utils::{output, progress};

use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Shape (y×x×E)")]
    shape: String,
    #[tabled(rename = "Pixel (um)")]
    pixel: String,
    #[tabled(rename = "keV/ch")]
    dispersion: String,
    #[tabled(rename = "HV (kV)")]
    beam_energy: String,
    #[tabled(rename = "Live time (s)")]
    live_time: String,
}

/// CSV 记录
#[derive(Debug, Serialize, PartialEq)]
struct SummaryRecord {
    file: String,
    title: String,
    height: usize,
    width: usize,
    channels: usize,
    x_scale: f64,
    y_scale: f64,
    energy_scale: f64,
    beam_energy: Option<f64>,
    live_time: Option<f64>,
    magnification: Option<f64>,
}

impl SummaryRecord {
    fn new(file: &Path, signal: &SpectralImage) -> Self {
        let acq = &signal.metadata.acquisition;
        let [height, width, channels] = signal.shape();
        SummaryRecord {
            file: file.display().to_string(),
            title: signal.metadata.title.clone(),
            height,
            width,
            channels,
            x_scale: signal.axes[0].scale,
            y_scale: signal.axes[1].scale,
            energy_scale: signal.axes[2].scale,
            beam_energy: acq.beam_energy,
            live_time: acq.detector.live_time,
            magnification: acq.magnification,
        }
    }

    fn to_row(&self) -> SummaryRow {
        let opt = |v: Option<f64>| v.map(|x| format!("{}", x)).unwrap_or_else(|| "-".to_string());
        let file = Path::new(&self.file)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file.clone());
        SummaryRow {
            file,
            title: self.title.clone(),
            shape: format!("{}×{}×{}", self.height, self.width, self.channels),
            pixel: format!("{:.4}", self.x_scale),
            dispersion: format!("{:.4}", self.energy_scale),
            beam_energy: opt(self.beam_energy),
            live_time: opt(self.live_time),
        }
    }
}

/// 执行 load 命令
pub fn execute(args: LoadArgs) -> Result<()> {
    output::print_header("Loading EDAX HDF5 Files");

    let loaded = if args.input.is_file() {
        load_single(&args.input)?
    } else if args.input.is_dir() {
        load_batch(&args)?
    } else {
        return Err(Cv4emError::FileNotFound {
            path: args.input.display().to_string(),
        });
    };

    let records: Vec<SummaryRecord> = loaded
        .iter()
        .flat_map(|(file, report)| report.signals.iter().map(move |s| SummaryRecord::new(file, s)))
        .collect();

    let skipped: usize = loaded.iter().map(|(_, r)| r.diagnostics.len()).sum();
    if skipped > 0 {
        output::print_header(&format!("Skipped {} entries", skipped));
        for (file, report) in &loaded {
            for d in &report.diagnostics {
                output::print_skip(&format!("{}:{}", file.display(), d.entry), &d.message);
            }
        }
    }

    if records.is_empty() {
        output::print_warning("No spectrum images found.");
        return Ok(());
    }

    output::print_header(&format!("{} Spectrum Images", records.len()));
    let rows: Vec<SummaryRow> = records.iter().map(SummaryRecord::to_row).collect();
    println!("{}", Table::new(&rows));

    if let Some(path) = &args.csv {
        save_csv(&records, path)?;
        output::print_success(&format!("Summary saved to '{}'", path.display()));
    }

    Ok(())
}

/// 单文件模式
fn load_single(path: &Path) -> Result<Vec<(PathBuf, LoadReport)>> {
    output::print_info(&format!("Single file mode: '{}'", path.display()));
    let spinner = progress::create_spinner(&format!("Reading {}", path.display()));
    let report = loader::load_file(path);
    spinner.finish_and_clear();
    Ok(vec![(path.to_path_buf(), report?)])
}

/// 目录批量模式
fn load_batch(args: &LoadArgs) -> Result<Vec<(PathBuf, LoadReport)>> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        return Err(Cv4emError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }
    output::print_info(&format!("Found {} HDF5 files", files.len()));

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| match loader::load_file(file) {
        Ok(report) => ProcessResult::Success(report),
        Err(e) => ProcessResult::Failed(e.to_string()),
    })?;

    for (file, err) in &result.failures {
        output::print_error(&format!("{}: {}", file.display(), err));
    }
    output::print_done(&format!(
        "Loaded {}/{} files",
        result.outputs.len(),
        result.total()
    ));

    Ok(result.outputs)
}

fn save_csv(records: &[SummaryRecord], path: &Path) -> Result<()> {
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

    fn sample() -> SpectralImage {
        let mut s = SpectralImage::from_cube(vec![0.0; 24], [2, 3, 4]).unwrap();
        s.metadata.title = "Area 1/SPD".to_string();
        s.axes[0].scale = 0.5;
        s.axes[1].scale = 0.5;
        s.axes[2].scale = 0.01;
        s.metadata.acquisition.beam_energy = Some(20.0);
        s
    }

    #[test]
    fn test_summary_record() {
        let r = SummaryRecord::new(Path::new("/data/run.h5"), &sample());
        assert_eq!((r.height, r.width, r.channels), (2, 3, 4));
        assert_eq!(r.energy_scale, 0.01);
        assert_eq!(r.live_time, None);

        let row = r.to_row();
        assert_eq!(row.file, "run.h5");
        assert_eq!(row.shape, "2×3×4");
        assert_eq!(row.beam_energy, "20");
        assert_eq!(row.live_time, "-");
    }

    #[test]
    fn test_save_csv() {
        let path = std::env::temp_dir().join("cv4em_test_summary.csv");
        let records = vec![SummaryRecord::new(Path::new("run.h5"), &sample())];
        save_csv(&records, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("file,title,height,width,channels,x_scale,y_scale,energy_scale,beam_energy,live_time,magnification")
        );
        assert_eq!(lines.next(), Some("run.h5,Area 1/SPD,2,3,4,0.5,0.5,0.01,20.0,,"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_input() {
        let args = LoadArgs {
            input: PathBuf::from("/nonexistent/dir"),
            pattern: "*.h5".to_string(),
            recursive: false,
            jobs: 1,
            csv: None,
        };
        assert!(matches!(execute(args), Err(Cv4emError::FileNotFound { .. })));
    }
}
