//! # 分层容器访问接口
//!
//! 抽象出加载器需要的只读操作：列出数据集、读取三维数据立方体、
//! 读取复合数据集首条记录中的数值字段。HDF5 后端见 `loader/h5.rs`。
//!
//! ## 依赖关系
//! - 被 `loader/edax.rs` 使用
//! - 无外部模块依赖

use crate::error::Result;

/// 分层容器（组 / 数据集树）的只读访问
pub trait Container {
    /// 所有数据集的完整路径（不含开头的 `/`），按容器的遍历顺序
    fn dataset_names(&self) -> Result<Vec<String>>;

    /// 读取三维数据集，返回数据与形状 `(ny, nx, channels)`
    fn read_cube(&self, name: &str) -> Result<(Vec<f32>, [usize; 3])>;

    /// 读取复合数据集首条记录中的数值字段；字段不存在时返回 `Ok(None)`
    fn read_field(&self, name: &str, field: &str) -> Result<Option<f64>>;
}

#[cfg(test)]
pub use memory::{MemoryContainer, MemoryEntry};

#[cfg(test)]
mod memory {
    use super::Container;
    use crate::error::{Cv4emError, Result};

    /// 内存中的数据集
    #[derive(Debug, Clone)]
    pub enum MemoryEntry {
        Cube { data: Vec<f32>, shape: Vec<usize> },
        Record(Vec<(String, f64)>),
    }

    /// 按插入顺序遍历的内存容器
    #[derive(Debug, Default)]
    pub struct MemoryContainer {
        entries: Vec<(String, MemoryEntry)>,
    }

    impl MemoryContainer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_cube(mut self, name: &str, shape: [usize; 3]) -> Self {
            let len = shape.iter().product();
            let data = (0..len).map(|v| v as f32).collect();
            self.entries.push((
                name.to_string(),
                MemoryEntry::Cube {
                    data,
                    shape: shape.to_vec(),
                },
            ));
            self
        }

        pub fn with_entry(mut self, name: &str, entry: MemoryEntry) -> Self {
            self.entries.push((name.to_string(), entry));
            self
        }

        pub fn with_record(self, name: &str, fields: &[(&str, f64)]) -> Self {
            let fields = fields.iter().map(|(k, v)| (k.to_string(), *v)).collect();
            self.with_entry(name, MemoryEntry::Record(fields))
        }

        fn get(&self, name: &str) -> Result<&MemoryEntry> {
            self.entries
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, e)| e)
                .ok_or_else(|| Cv4emError::malformed(name, "no such dataset"))
        }
    }

    impl Container for MemoryContainer {
        fn dataset_names(&self) -> Result<Vec<String>> {
            Ok(self.entries.iter().map(|(n, _)| n.clone()).collect())
        }

        fn read_cube(&self, name: &str) -> Result<(Vec<f32>, [usize; 3])> {
            match self.get(name)? {
                MemoryEntry::Cube { data, shape } => match shape.as_slice() {
                    &[ny, nx, nch] => Ok((data.clone(), [ny, nx, nch])),
                    other => Err(Cv4emError::malformed(
                        name,
                        format!("expected a 3-D dataset, got shape {:?}", other),
                    )),
                },
                MemoryEntry::Record(_) => Err(Cv4emError::malformed(name, "not a data cube")),
            }
        }

        fn read_field(&self, name: &str, field: &str) -> Result<Option<f64>> {
            match self.get(name)? {
                MemoryEntry::Record(fields) => Ok(fields
                    .iter()
                    .find(|(k, _)| k == field)
                    .map(|(_, v)| *v)),
                MemoryEntry::Cube { .. } => {
                    Err(Cv4emError::malformed(name, "not a compound dataset"))
                }
            }
        }
    }
}
