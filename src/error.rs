//! # 统一错误处理模块
//!
//! 定义 cv4em 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 查表错误 (`KeyNotFound`): 直接返回给调用方
//! - 标定错误 (`OutOfCalibrationRange`, `UnknownMicroscope`): 终止当前操作
//! - 容器条目错误 (`MalformedRecord`, `MissingSibling`): 由加载器按条目吸收为诊断信息
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cv4em 统一错误类型
#[derive(Error, Debug)]
pub enum Cv4emError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 查表错误
    // ─────────────────────────────────────────────────────────────
    #[error("Key '{key}' not found in {table} table")]
    KeyNotFound { table: String, key: String },

    // ─────────────────────────────────────────────────────────────
    // 标定错误
    // ─────────────────────────────────────────────────────────────
    #[error("No calibration found for camera length {camera_length} on {microscope}")]
    OutOfCalibrationRange {
        microscope: String,
        camera_length: f64,
    },

    #[error("Unknown microscope '{0}' (expected F30 or HD2700)")]
    UnknownMicroscope(String),

    #[error("Missing metadata: {0}")]
    MissingMetadata(String),

    // ─────────────────────────────────────────────────────────────
    // 容器 / 数据条目错误
    // ─────────────────────────────────────────────────────────────
    #[error("Error accessing {entry}: {reason}")]
    MalformedRecord { entry: String, reason: String },

    #[error("No corresponding signal found for {entry} (expected '{expected}')")]
    MissingSibling { entry: String, expected: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[cfg(feature = "hdf5")]
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid X-ray line code '{0}' (expected e.g. 'Al_Ka')")]
    InvalidLineCode(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot error: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

impl Cv4emError {
    /// 构造查表失败错误
    pub fn key_not_found(table: &str, key: impl Into<String>) -> Self {
        Cv4emError::KeyNotFound {
            table: table.to_string(),
            key: key.into(),
        }
    }

    /// 构造条目损坏错误
    pub fn malformed(entry: &str, reason: impl std::fmt::Display) -> Self {
        Cv4emError::MalformedRecord {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Cv4emError>;
