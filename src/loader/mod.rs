//! # 数据加载模块
//!
//! 读取 EDAX 导出的 HDF5 文件，生成带标定的谱图像列表。
//!
//! - `container`: 分层容器的只读接口
//! - `edax`: 按后缀关联数据立方体与其兄弟条目
//! - `h5`: HDF5 后端（`hdf5` feature）
//!
//! 不启用 `hdf5` feature 时 [`load_file`] 返回 `UnsupportedFormat`，
//! [`load_container`] 仍可用于其他 [`container::Container`] 实现。
//!
//! ## 依赖关系
//! - 被 `commands/load.rs`, `commands/overlay.rs`, `commands/calibrate.rs` 调用

pub mod container;
pub mod edax;
#[cfg(feature = "hdf5")]
pub mod h5;

pub use edax::{load_container, LoadReport};

use crate::error::{Cv4emError, Result};

use std::path::Path;
#[cfg(feature = "hdf5")]
use std::sync::Mutex;

/// HDF5 库全局锁
#[cfg(feature = "hdf5")]
static HDF5_LOCK: Mutex<()> = Mutex::new(());

/// 打开文件并加载全部谱图像，返回前关闭文件
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Cv4emError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    log::info!("Loading {}", path.display());
    let report = load_hdf5(path)?;
    log::info!(
        "{}: {} signal(s), {} skipped entr{}",
        path.display(),
        report.signals.len(),
        report.diagnostics.len(),
        if report.diagnostics.len() == 1 { "y" } else { "ies" }
    );
    Ok(report)
}

#[cfg(feature = "hdf5")]
fn load_hdf5(path: &Path) -> Result<LoadReport> {
    let _guard = HDF5_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let container = h5::Hdf5Container::open(path)?;
    load_container(&container)
}

#[cfg(not(feature = "hdf5"))]
fn load_hdf5(_path: &Path) -> Result<LoadReport> {
    Err(Cv4emError::UnsupportedFormat(
        "HDF5 support not compiled in; rebuild with `--features hdf5`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let result = load_file("/nonexistent/sample.h5");
        assert!(matches!(result, Err(Cv4emError::FileNotFound { .. })));
    }

    #[cfg(not(feature = "hdf5"))]
    #[test]
    fn test_load_without_backend() {
        let path = std::env::temp_dir().join("cv4em_test_no_backend.h5");
        std::fs::write(&path, b"\x89HDF\r\n\x1a\n").unwrap();
        let result = load_file(&path);
        let _ = std::fs::remove_file(&path);
        match result {
            Err(Cv4emError::UnsupportedFormat(msg)) => assert!(msg.contains("--features hdf5")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_container_without_file_backend() {
        use crate::loader::container::MemoryContainer;

        let container = MemoryContainer::new()
            .with_cube("Area 1/SPD", [2, 2, 8])
            .with_record("Area 1/SPC", &[("evPch", 20.0)]);
        let report = load_container(&container).unwrap();
        assert_eq!(report.signals.len(), 1);
        assert_eq!(report.signals[0].axes[2].scale, 0.02);
        assert!(report.diagnostics.is_empty());
    }
}
