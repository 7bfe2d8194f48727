//! # 文件收集器
//!
//! 根据输入路径和 glob 模式收集待加载的 HDF5 文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多个 glob 模式（`glob::Pattern`，匹配文件名）
//! - 可选递归搜索，结果按路径排序
//!
//! ## 依赖关系
//! - 被 `commands/load.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{Cv4emError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    input: PathBuf,
    patterns: Vec<Pattern>,
    recursive: bool,
}

impl FileCollector {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔），空模式匹配全部文件
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    Cv4emError::InvalidArgument(format!("invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件；单文件输入不做模式过滤
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }
        if !self.input.is_dir() {
            return Err(Cv4emError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.into_path())
            .collect();
        files.sort();
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cv4em_collector_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        for f in ["a.h5", "b.hdf5", "notes.txt", "nested/c.h5"] {
            fs::write(dir.join(f), b"").unwrap();
        }
        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_collect_flat() {
        let dir = scratch_dir("flat");
        let files = FileCollector::new(dir.clone())
            .with_pattern("*.h5,*.hdf5")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.h5", "b.hdf5"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_collect_recursive() {
        let dir = scratch_dir("recursive");
        let files = FileCollector::new(dir.clone())
            .with_pattern("*.h5")
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.h5", "c.h5"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_single_file_and_missing_dir() {
        let dir = scratch_dir("single");
        let file = dir.join("notes.txt");
        let files = FileCollector::new(file.clone())
            .with_pattern("*.h5")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(files, vec![file]);
        assert!(FileCollector::new(dir.join("missing")).collect().is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileCollector::new(PathBuf::from(".")).with_pattern("[").is_err());
    }
}
