//! # EDAX HDF5 谱图像加载器
//!
//! 遍历容器中的数据集，按名称后缀分类：
//!
//! | 后缀          | 类别                         |
//! |---------------|------------------------------|
//! | `SPD`         | 谱图像数据立方体             |
//! | `MAPIMAGEIPR` | 像素尺寸 (`MicronsPerPixelX`) |
//! | `SPC`         | 能量色散 (`evPch`)           |
//! | `HOSTPARAMS`  | 主机参数（样品台、放大倍数等） |
//!
//! 数据立方体生成 [`SpectralImage`] 并按路径建立索引；其余条目把自身后缀替换为
//! `SPD` 得到对应数据立方体的路径，找到后将数值写入其轴标定或元数据。
//!
//! ## 两遍处理
//! 第一遍只处理数据立方体，第二遍再关联其他条目，因此结果与容器遍历顺序无关。
//! 每个条目只读取一次。
//!
//! ## 错误处理
//! 单个条目读取失败 (`MalformedRecord`) 或找不到对应数据立方体 (`MissingSibling`)
//! 只记录诊断信息并跳过，不会中断整个文件的加载。
//!
//! ## 依赖关系
//! - 被 `loader/mod.rs` 调用
//! - 使用 `loader/container.rs` 的 `Container` 接口
//! - 使用 `models/signal.rs`

use crate::error::{Cv4emError, Result};
use crate::loader::container::Container;
use crate::models::SpectralImage;

use std::collections::HashMap;
use std::fmt;

/// 条目类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// 谱图像数据立方体
    Cube,
    /// 像素尺寸
    PixelSize,
    /// 能量色散
    Dispersion,
    /// 主机参数
    HostParams,
}

impl EntryKind {
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Cube,
        EntryKind::PixelSize,
        EntryKind::Dispersion,
        EntryKind::HostParams,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            EntryKind::Cube => "SPD",
            EntryKind::PixelSize => "MAPIMAGEIPR",
            EntryKind::Dispersion => "SPC",
            EntryKind::HostParams => "HOSTPARAMS",
        }
    }

    /// 按名称后缀分类，无法识别返回 `None`
    pub fn classify(name: &str) -> Option<EntryKind> {
        EntryKind::ALL
            .into_iter()
            .find(|kind| name.ends_with(kind.suffix()))
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Cube => "spectrum cube",
            EntryKind::PixelSize => "pixel size",
            EntryKind::Dispersion => "energy dispersion",
            EntryKind::HostParams => "host parameters",
        };
        write!(f, "{}", label)
    }
}

/// 把条目名末尾的后缀替换为数据立方体后缀
pub fn sibling_cube_name(name: &str, kind: EntryKind) -> String {
    let stem = name.strip_suffix(kind.suffix()).unwrap_or(name);
    format!("{}{}", stem, EntryKind::Cube.suffix())
}

/// 诊断类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingSibling,
    MalformedRecord,
}

/// 加载过程中被跳过的条目
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub entry: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    fn from_error(entry: &str, err: &Cv4emError) -> Self {
        let kind = match err {
            Cv4emError::MissingSibling { .. } => DiagnosticKind::MissingSibling,
            _ => DiagnosticKind::MalformedRecord,
        };
        Diagnostic {
            entry: entry.to_string(),
            kind,
            message: err.to_string(),
        }
    }
}

/// 加载结果
#[derive(Debug, Default)]
pub struct LoadReport {
    /// 按数据立方体的发现顺序
    pub signals: Vec<SpectralImage>,
    pub diagnostics: Vec<Diagnostic>,
}

/// 从兄弟条目读出、待写入数据立方体的数值
#[derive(Debug, Clone, PartialEq)]
enum SiblingUpdate {
    PixelSize {
        microns_per_pixel: f64,
    },
    Dispersion {
        ev_per_channel: f64,
        beam_energy: Option<f64>,
        live_time: Option<f64>,
        beam_current: Option<f64>,
    },
    HostParams(HostParams),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct HostParams {
    stage_x: Option<f64>,
    stage_y: Option<f64>,
    stage_z: Option<f64>,
    tilt: Option<f64>,
    rotation: Option<f64>,
    magnification: Option<f64>,
    working_distance: Option<f64>,
    beam_current: Option<f64>,
    beam_energy: Option<f64>,
}

impl SiblingUpdate {
    /// 读取条目的全部字段；必需字段缺失视为条目损坏
    fn read<C: Container + ?Sized>(container: &C, name: &str, kind: EntryKind) -> Result<Self> {
        let required = |field: &str| -> Result<f64> {
            container
                .read_field(name, field)?
                .ok_or_else(|| Cv4emError::malformed(name, format!("missing field '{}'", field)))
        };
        let optional = |field: &str| container.read_field(name, field);

        match kind {
            EntryKind::PixelSize => Ok(SiblingUpdate::PixelSize {
                microns_per_pixel: required("MicronsPerPixelX")?,
            }),
            EntryKind::Dispersion => Ok(SiblingUpdate::Dispersion {
                ev_per_channel: required("evPch")?,
                beam_energy: optional("KV")?,
                live_time: optional("LiveTime")?,
                beam_current: optional("BeamCurrent")?,
            }),
            EntryKind::HostParams => Ok(SiblingUpdate::HostParams(HostParams {
                stage_x: optional("StageXPosition")?,
                stage_y: optional("StageYPosition")?,
                stage_z: optional("StageZPosition")?,
                tilt: optional("Tilt")?,
                rotation: optional("Rotation")?,
                magnification: optional("Magnification")?,
                working_distance: optional("WD")?,
                beam_current: optional("BeamCurrent")?,
                beam_energy: optional("KV")?,
            })),
            EntryKind::Cube => Err(Cv4emError::malformed(name, "cube is not a sibling record")),
        }
    }

    fn apply(self, signal: &mut SpectralImage) {
        let acq = &mut signal.metadata.acquisition;
        match self {
            SiblingUpdate::PixelSize { microns_per_pixel } => {
                signal.axes[0].scale = microns_per_pixel;
                signal.axes[1].scale = microns_per_pixel;
            }
            SiblingUpdate::Dispersion {
                ev_per_channel,
                beam_energy,
                live_time,
                beam_current,
            } => {
                // eV -> keV
                signal.axes[2].scale = ev_per_channel / 1000.0;
                set_if_some(&mut acq.beam_energy, beam_energy);
                set_if_some(&mut acq.detector.live_time, live_time);
                set_if_some(&mut acq.detector.real_time, live_time);
                set_if_some(&mut acq.beam_current, beam_current);
            }
            SiblingUpdate::HostParams(p) => {
                set_if_some(&mut acq.stage.x, p.stage_x);
                set_if_some(&mut acq.stage.y, p.stage_y);
                set_if_some(&mut acq.stage.z, p.stage_z);
                set_if_some(&mut acq.stage.tilt_alpha, p.tilt);
                set_if_some(&mut acq.stage.rotation, p.rotation);
                set_if_some(&mut acq.magnification, p.magnification);
                set_if_some(&mut acq.working_distance, p.working_distance);
                set_if_some(&mut acq.beam_current, p.beam_current);
                set_if_some(&mut acq.beam_energy, p.beam_energy);
            }
        }
    }
}

fn set_if_some(target: &mut Option<f64>, value: Option<f64>) {
    if value.is_some() {
        *target = value;
    }
}

/// 由数据立方体创建谱图像，轴采用默认标定
fn build_signal(name: &str, data: Vec<f32>, shape: [usize; 3]) -> Result<SpectralImage> {
    let mut signal =
        SpectralImage::from_cube(data, shape).map_err(|e| Cv4emError::malformed(name, e))?;

    signal.axes[0].units = "um".to_string();
    signal.axes[1].units = "um".to_string();
    signal.axes[2].units = "keV".to_string();
    signal.axes[2].offset = 0.0;
    signal.metadata.title = name.to_string();
    signal.metadata.signal_type = "EDS_SEM".to_string();
    Ok(signal)
}

/// 单次加载的状态：结果列表与名称索引只属于这一次加载
struct EdaxLoader<'c, C: Container + ?Sized> {
    container: &'c C,
    signals: Vec<SpectralImage>,
    index: HashMap<String, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c, C: Container + ?Sized> EdaxLoader<'c, C> {
    fn new(container: &'c C) -> Self {
        Self {
            container,
            signals: Vec::new(),
            index: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    fn skip(&mut self, name: &str, err: Cv4emError) {
        log::warn!("{}", err);
        self.diagnostics.push(Diagnostic::from_error(name, &err));
    }

    fn load_cube(&mut self, name: &str) {
        let result = self
            .container
            .read_cube(name)
            .and_then(|(data, shape)| build_signal(name, data, shape));

        match result {
            Ok(signal) => {
                log::debug!("Loaded {} {:?}", name, signal.shape());
                self.index.insert(name.to_string(), self.signals.len());
                self.signals.push(signal);
            }
            Err(e) => self.skip(name, e),
        }
    }

    fn associate(&mut self, name: &str, kind: EntryKind) {
        let update = match SiblingUpdate::read(self.container, name, kind) {
            Ok(update) => update,
            Err(e) => return self.skip(name, e),
        };

        let target = sibling_cube_name(name, kind);
        match self.index.get(&target) {
            Some(&idx) => {
                log::debug!("Set {} of {} from {}", kind, target, name);
                update.apply(&mut self.signals[idx]);
            }
            None => self.skip(
                name,
                Cv4emError::MissingSibling {
                    entry: name.to_string(),
                    expected: target,
                },
            ),
        }
    }

    fn run(mut self) -> Result<LoadReport> {
        let classified: Vec<(String, EntryKind)> = self
            .container
            .dataset_names()?
            .into_iter()
            .filter_map(|name| {
                let kind = EntryKind::classify(&name);
                if kind.is_none() {
                    log::debug!("Ignoring dataset {}", name);
                }
                kind.map(|k| (name, k))
            })
            .collect();

        for (name, _) in classified.iter().filter(|(_, k)| *k == EntryKind::Cube) {
            self.load_cube(name);
        }

        for (name, kind) in classified.iter().filter(|(_, k)| *k != EntryKind::Cube) {
            self.associate(name, *kind);
        }

        Ok(LoadReport {
            signals: self.signals,
            diagnostics: self.diagnostics,
        })
    }
}

/// 加载容器中的全部谱图像
///
/// 只有列出数据集失败时返回错误；单个条目的问题记录在 [`LoadReport::diagnostics`] 中。
pub fn load_container<C: Container + ?Sized>(container: &C) -> Result<LoadReport> {
    EdaxLoader::new(container).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::container::{MemoryContainer, MemoryEntry};

    const CUBE: &str = "Area 1/SPD";
    const IPR: &str = "Area 1/MAPIMAGEIPR";
    const SPC: &str = "Area 1/SPC";
    const HOST: &str = "Area 1/HOSTPARAMS";

    #[test]
    fn test_classify() {
        assert_eq!(EntryKind::classify("a/b/SPD"), Some(EntryKind::Cube));
        assert_eq!(EntryKind::classify("a/MAPIMAGEIPR"), Some(EntryKind::PixelSize));
        assert_eq!(EntryKind::classify("a/SPC"), Some(EntryKind::Dispersion));
        assert_eq!(EntryKind::classify("a/HOSTPARAMS"), Some(EntryKind::HostParams));
        assert_eq!(EntryKind::classify("a/SPD/thumbnail"), None);
    }

    #[test]
    fn test_sibling_name_replaces_trailing_suffix_only() {
        assert_eq!(sibling_cube_name(IPR, EntryKind::PixelSize), CUBE);
        assert_eq!(sibling_cube_name(SPC, EntryKind::Dispersion), CUBE);
        assert_eq!(
            sibling_cube_name("SPC run/SPC", EntryKind::Dispersion),
            "SPC run/SPD"
        );
    }

    #[test]
    fn test_cube_defaults() {
        let c = MemoryContainer::new().with_cube(CUBE, [2, 3, 4]);
        let report = load_container(&c).unwrap();
        assert_eq!(report.signals.len(), 1);
        assert!(report.diagnostics.is_empty());

        let s = &report.signals[0];
        assert_eq!(s.shape(), [2, 3, 4]);
        assert_eq!(s.metadata.title, CUBE);
        assert_eq!(s.metadata.signal_type, "EDS_SEM");
        assert_eq!(
            (s.axes[0].name.as_str(), s.axes[0].units.as_str()),
            ("x", "um")
        );
        assert_eq!(
            (s.axes[2].name.as_str(), s.axes[2].units.as_str()),
            ("Energy", "keV")
        );
        assert_eq!(s.axes[2].offset, 0.0);
        assert_eq!(s.axes[0].scale, 1.0);
    }

    #[test]
    fn test_pixel_size_sets_both_spatial_scales() {
        let c = MemoryContainer::new()
            .with_cube(CUBE, [2, 2, 4])
            .with_record(IPR, &[("MicronsPerPixelX", 0.125)]);
        let report = load_container(&c).unwrap();
        let s = &report.signals[0];
        assert_eq!(s.axes[0].scale, 0.125);
        assert_eq!(s.axes[1].scale, 0.125);
        assert_eq!(s.axes[2].scale, 1.0);
    }

    #[test]
    fn test_dispersion_sets_energy_scale_and_metadata() {
        let c = MemoryContainer::new().with_cube(CUBE, [1, 1, 8]).with_record(
            SPC,
            &[
                ("evPch", 10.0),
                ("KV", 20.0),
                ("LiveTime", 35.5),
                ("Other", 1.0),
            ],
        );
        let report = load_container(&c).unwrap();
        let s = &report.signals[0];
        assert_eq!(s.axes[2].scale, 0.01);
        assert_eq!(s.metadata.acquisition.beam_energy, Some(20.0));
        assert_eq!(s.metadata.acquisition.detector.live_time, Some(35.5));
        assert_eq!(s.metadata.acquisition.detector.real_time, Some(35.5));
        assert_eq!(s.metadata.acquisition.beam_current, None);
    }

    #[test]
    fn test_host_params_populate_metadata() {
        let c = MemoryContainer::new().with_cube(CUBE, [1, 1, 2]).with_record(
            HOST,
            &[
                ("StageXPosition", 1.5),
                ("StageYPosition", -2.0),
                ("Tilt", 10.0),
                ("Magnification", 5000.0),
                ("WD", 10.2),
            ],
        );
        let report = load_container(&c).unwrap();
        let acq = &report.signals[0].metadata.acquisition;
        assert_eq!(acq.stage.x, Some(1.5));
        assert_eq!(acq.stage.y, Some(-2.0));
        assert_eq!(acq.stage.z, None);
        assert_eq!(acq.stage.tilt_alpha, Some(10.0));
        assert_eq!(acq.magnification, Some(5000.0));
        assert_eq!(acq.working_distance, Some(10.2));
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_sibling_before_cube_still_associates() {
        // 兄弟条目先于数据立方体被遍历
        let c = MemoryContainer::new()
            .with_record(IPR, &[("MicronsPerPixelX", 0.5)])
            .with_record(SPC, &[("evPch", 5.0)])
            .with_cube(CUBE, [2, 2, 4]);
        let report = load_container(&c).unwrap();
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.signals[0].axes[1].scale, 0.5);
        assert_eq!(report.signals[0].axes[2].scale, 0.005);
    }

    #[test]
    fn test_missing_sibling_is_skipped() {
        let c = MemoryContainer::new()
            .with_cube(CUBE, [2, 2, 4])
            .with_record("Area 2/MAPIMAGEIPR", &[("MicronsPerPixelX", 0.5)]);
        let report = load_container(&c).unwrap();

        assert_eq!(report.signals.len(), 1);
        assert_eq!(report.signals[0].axes[0].scale, 1.0);
        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.entry, "Area 2/MAPIMAGEIPR");
        assert_eq!(d.kind, DiagnosticKind::MissingSibling);
        assert!(d.message.contains("Area 2/SPD"));
    }

    #[test]
    fn test_malformed_sibling_does_not_abort() {
        let c = MemoryContainer::new()
            .with_cube(CUBE, [2, 2, 4])
            .with_record(IPR, &[("MicronsPerPixelY", 0.5)])
            .with_record(SPC, &[("evPch", 10.0)]);
        let report = load_container(&c).unwrap();

        assert_eq!(report.signals.len(), 1);
        assert_eq!(report.diagnostics.len(), 1);
        let d = &report.diagnostics[0];
        assert_eq!(d.entry, IPR);
        assert_eq!(d.kind, DiagnosticKind::MalformedRecord);
        assert!(d.message.contains("MicronsPerPixelX"));
        // 后续条目照常处理
        assert_eq!(report.signals[0].axes[0].scale, 1.0);
        assert_eq!(report.signals[0].axes[2].scale, 0.01);
    }

    #[test]
    fn test_malformed_cube_is_skipped() {
        let c = MemoryContainer::new()
            .with_entry(
                "Bad/SPD",
                MemoryEntry::Cube {
                    data: vec![0.0; 4],
                    shape: vec![2, 2],
                },
            )
            .with_cube(CUBE, [1, 2, 2])
            .with_record("Bad/SPC", &[("evPch", 10.0)]);
        let report = load_container(&c).unwrap();

        assert_eq!(report.signals.len(), 1);
        assert_eq!(report.signals[0].metadata.title, CUBE);
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::MalformedRecord, DiagnosticKind::MissingSibling]
        );
    }

    #[test]
    fn test_multiple_areas() {
        let c = MemoryContainer::new()
            .with_cube("Area 1/SPD", [1, 1, 2])
            .with_cube("Area 2/SPD", [1, 1, 2])
            .with_record("Area 2/MAPIMAGEIPR", &[("MicronsPerPixelX", 2.0)])
            .with_record("Area 1/MAPIMAGEIPR", &[("MicronsPerPixelX", 1.0 / 3.0)])
            .with_record("Area 1/Thumbnail", &[("x", 1.0)]);
        let report = load_container(&c).unwrap();

        assert_eq!(report.signals.len(), 2);
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.signals[0].axes[0].scale, 1.0 / 3.0);
        assert_eq!(report.signals[1].axes[0].scale, 2.0);
    }
}
