//! # 批量执行器
//!
//! 并行处理多个文件，每个文件独立处理、互不共享状态。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代（结果保持输入顺序）
//! - 进度条显示
//! - 失败收集，由调用方统一报告
//!
//! ## 依赖关系
//! - 被 `commands/load.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行处理

use crate::error::{Cv4emError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug)]
pub enum ProcessResult<T> {
    Success(T),
    /// 错误信息
    Failed(String),
}

/// 批量处理结果
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功的文件及其输出，保持输入顺序
    pub outputs: Vec<(PathBuf, T)>,
    /// (文件路径, 错误信息)
    pub failures: Vec<(PathBuf, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    pub fn merge(&mut self, path: PathBuf, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(output) => self.outputs.push((path, output)),
            ProcessResult::Failed(err) => self.failures.push((path, err)),
        }
    }

    pub fn total(&self) -> usize {
        self.outputs.len() + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    jobs: usize,
}

impl BatchRunner {
    /// `jobs = 0` 时使用全部 CPU 核心
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理文件列表
    pub fn run<T, F>(&self, files: Vec<PathBuf>, processor: F) -> Result<BatchResult<T>>
    where
        T: Send,
        F: Fn(&Path) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Loading");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| Cv4emError::Other(format!("cannot start worker pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch = BatchResult::default();
        for (file, result) in files.into_iter().zip(results) {
            batch.merge(file, result);
        }
        Ok(batch)
    }
}
