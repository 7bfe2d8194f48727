//! # HDF5 容器后端
//!
//! 基于 `hdf5` crate 实现 [`Container`]。复合数据集的单个字段通过构造
//! 只含该字段的内存类型读取，由 HDF5 按字段名完成类型转换。
//!
//! HDF5 库本身不是线程安全的，调用方需在 `loader::HDF5_LOCK` 下使用。
//!
//! ## 依赖关系
//! - 被 `loader/mod.rs` 使用（仅在启用 `hdf5` feature 时编译）
//! - 使用 `loader/container.rs`

use crate::error::{Cv4emError, Result};
use crate::loader::container::Container;

use hdf5::types::{CompoundField, CompoundType, FloatSize, TypeDescriptor};
use hdf5::{Conversion, Dataset, Datatype, File, Group};
use hdf5_sys::h5d::H5Dread;
use hdf5_sys::h5p::H5P_DEFAULT;
use hdf5_sys::h5s::H5S_ALL;

use std::path::Path;

pub struct Hdf5Container {
    file: File,
}

impl Hdf5Container {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self { file })
    }

    fn dataset(&self, name: &str) -> Result<Dataset> {
        self.file
            .dataset(name)
            .map_err(|e| Cv4emError::malformed(name, e))
    }
}

/// 深度优先收集数据集路径：同一层先数据集后子组
fn collect_datasets(group: &Group, names: &mut Vec<String>) -> Result<()> {
    for ds in group.datasets()? {
        names.push(ds.name().trim_start_matches('/').to_string());
    }
    for child in group.groups()? {
        collect_datasets(&child, names)?;
    }
    Ok(())
}

/// 仅包含一个 f64 字段的复合内存类型
fn single_field_type(field: &str) -> TypeDescriptor {
    TypeDescriptor::Compound(CompoundType {
        fields: vec![CompoundField {
            name: field.to_string(),
            ty: TypeDescriptor::Float(FloatSize::U8),
            offset: 0,
            index: 0,
        }],
        size: std::mem::size_of::<f64>(),
    })
}

impl Container for Hdf5Container {
    fn dataset_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        collect_datasets(&self.file, &mut names)?;
        Ok(names)
    }

    fn read_cube(&self, name: &str) -> Result<(Vec<f32>, [usize; 3])> {
        let ds = self.dataset(name)?;
        let shape = match ds.shape().as_slice() {
            &[ny, nx, nch] => [ny, nx, nch],
            other => {
                return Err(Cv4emError::malformed(
                    name,
                    format!("expected a 3-D dataset, got shape {:?}", other),
                ))
            }
        };

        // 原始计数通常为整数类型
        let data = ds
            .as_reader()
            .conversion(Conversion::Hard)
            .read_raw::<f32>()
            .map_err(|e| Cv4emError::malformed(name, e))?;
        Ok((data, shape))
    }

    fn read_field(&self, name: &str, field: &str) -> Result<Option<f64>> {
        let ds = self.dataset(name)?;
        let descriptor = ds
            .dtype()
            .and_then(|dt| dt.to_descriptor())
            .map_err(|e| Cv4emError::malformed(name, e))?;

        let TypeDescriptor::Compound(compound) = descriptor else {
            return Err(Cv4emError::malformed(name, "not a compound dataset"));
        };
        if !compound.fields.iter().any(|f| f.name == field) {
            return Ok(None);
        }

        let records = ds.size();
        if records == 0 {
            return Err(Cv4emError::malformed(name, "empty record"));
        }

        let mem_type = Datatype::from_descriptor(&single_field_type(field))
            .map_err(|e| Cv4emError::malformed(name, e))?;
        let mut values = vec![0.0_f64; records];
        // SAFETY: 内存类型只含一个 f64 字段，`values` 为数据集的每条记录各留一个 f64，
        // H5S_ALL 读取的元素数与 `ds.size()` 相同；调用方持有 `HDF5_LOCK`。
        let status = unsafe {
            H5Dread(
                ds.id(),
                mem_type.id(),
                H5S_ALL,
                H5S_ALL,
                H5P_DEFAULT,
                values.as_mut_ptr().cast(),
            )
        };
        if status < 0 {
            return Err(Cv4emError::malformed(
                name,
                format!("cannot read field '{}'", field),
            ));
        }

        Ok(values.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::edax::DiagnosticKind;
    use crate::loader::{load_file, HDF5_LOCK};

    use hdf5::H5Type;
    use std::path::PathBuf;

    #[derive(H5Type, Clone, Copy)]
    #[repr(C)]
    struct PixelRecord {
        #[hdf5(rename = "MicronsPerPixelX")]
        x: f32,
        #[hdf5(rename = "MicronsPerPixelY")]
        y: f32,
    }

    /// 缺少 `MicronsPerPixelX`
    #[derive(H5Type, Clone, Copy)]
    #[repr(C)]
    struct PartialPixelRecord {
        #[hdf5(rename = "MicronsPerPixelY")]
        y: f32,
    }

    #[derive(H5Type, Clone, Copy)]
    #[repr(C)]
    struct SpectrumRecord {
        #[hdf5(rename = "evPch")]
        ev_per_channel: f32,
        #[hdf5(rename = "KV")]
        kv: f32,
        #[hdf5(rename = "LiveTime")]
        live_time: f32,
    }

    fn write_sample(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let _guard = HDF5_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let file = File::create(&path).unwrap();

        let area = file.create_group("Area 1").unwrap();
        let counts: Vec<u16> = (0..24).collect();
        area
            .new_dataset::<u16>()
            .shape((2, 3, 4))
            .create("SPD")
            .unwrap()
            .write_raw(counts.as_slice())
            .unwrap();
        area
            .new_dataset::<PixelRecord>()
            .shape(1)
            .create("MAPIMAGEIPR")
            .unwrap()
            .write_raw(&[PixelRecord { x: 0.25, y: 0.5 }])
            .unwrap();
        area
            .new_dataset::<SpectrumRecord>()
            .shape(1)
            .create("SPC")
            .unwrap()
            .write_raw(&[SpectrumRecord {
                ev_per_channel: 10.0,
                kv: 20.0,
                live_time: 35.5,
            }])
            .unwrap();

        let broken = file.create_group("Area 2").unwrap();
        broken
            .new_dataset::<u16>()
            .shape((1, 1, 4))
            .create("SPD")
            .unwrap()
            .write_raw(&[1u16, 2, 3, 4])
            .unwrap();
        broken
            .new_dataset::<PartialPixelRecord>()
            .shape(1)
            .create("MAPIMAGEIPR")
            .unwrap()
            .write_raw(&[PartialPixelRecord { y: 0.5 }])
            .unwrap();

        path
    }

    #[test]
    fn test_load_edax_file() {
        let path = write_sample("cv4em_test_edax_load.h5");
        let report = load_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(report.signals.len(), 2);
        let area = report
            .signals
            .iter()
            .find(|s| s.metadata.title == "Area 1/SPD")
            .unwrap();
        assert_eq!(area.shape(), [2, 3, 4]);
        // u16 计数转换为 f32
        assert_eq!(area.data[23], 23.0);
        assert_eq!(area.axes[0].scale, 0.25);
        assert_eq!(area.axes[1].scale, 0.25);
        assert_eq!(area.axes[2].scale, 0.01);
        assert_eq!(area.metadata.acquisition.beam_energy, Some(20.0));
        assert_eq!(area.metadata.acquisition.detector.live_time, Some(35.5));

        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.entry, "Area 2/MAPIMAGEIPR");
        assert_eq!(d.kind, DiagnosticKind::MalformedRecord);

        let broken = report
            .signals
            .iter()
            .find(|s| s.metadata.title == "Area 2/SPD")
            .unwrap();
        assert_eq!(broken.axes[0].scale, 1.0);
    }

    #[test]
    fn test_container_reads() {
        let path = write_sample("cv4em_test_edax_container.h5");
        let _guard = HDF5_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let container = Hdf5Container::open(&path).unwrap();

        let names = container.dataset_names().unwrap();
        assert!(names.contains(&"Area 1/SPD".to_string()));
        assert!(names.contains(&"Area 2/MAPIMAGEIPR".to_string()));

        assert_eq!(
            container.read_field("Area 1/SPC", "evPch").unwrap(),
            Some(10.0)
        );
        assert_eq!(
            container.read_field("Area 1/MAPIMAGEIPR", "MicronsPerPixelY").unwrap(),
            Some(0.5)
        );
        assert_eq!(
            container.read_field("Area 2/MAPIMAGEIPR", "MicronsPerPixelX").unwrap(),
            None
        );
        // 数据立方体不是复合类型
        assert!(matches!(
            container.read_field("Area 1/SPD", "evPch"),
            Err(Cv4emError::MalformedRecord { .. })
        ));
        // 非三维数据集不能作为数据立方体
        assert!(matches!(
            container.read_cube("Area 1/SPC"),
            Err(Cv4emError::MalformedRecord { .. })
        ));

        drop(container);
        let _ = std::fs::remove_file(&path);
    }
}
