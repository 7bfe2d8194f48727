//! # NBED 相机长度标定
//!
//! 根据电镜型号与相机长度查找纳米束电子衍射图样的像素标定 (1/nm per pixel)。
//!
//! ## 匹配规则
//! - `F30`: 相机长度向零取整后与整数键精确比较
//! - `HD2700`: 与键的绝对差小于 0.01 即匹配
//!
//! 两张表都按表中顺序取第一个匹配项。两种规则各自保留，不做统一。
//!
//! ## 缺失元数据
//! 谱图像元数据中没有相机长度时，由调用方提供的 [`CameraLengthSource`]
//! 给出替代值，并且只在 HD2700 表中按容差规则查找。
//!
//! ## 依赖关系
//! - 被 `commands/calibrate.rs` 调用
//! - 使用 `models/signal.rs`

use crate::error::{Cv4emError, Result};
use crate::models::SpectralImage;

use std::fmt;
use std::str::FromStr;

/// 衍射图样空间轴单位
pub const NBED_UNITS: &str = "/nm";

/// HD2700 容差
pub const HD2700_TOLERANCE: f64 = 0.01;

/// 未指定且元数据中没有型号时使用的电镜
pub const FALLBACK_MICROSCOPE: Microscope = Microscope::F30;

/// 支持的电镜型号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Microscope {
    /// FEI Tecnai F30，相机长度单位 mm
    F30,
    /// Hitachi HD2700 STEM，相机长度为仪器单位
    Hd2700,
}

impl Microscope {
    pub const ALL: [Microscope; 2] = [Microscope::F30, Microscope::Hd2700];

    pub fn as_str(self) -> &'static str {
        match self {
            Microscope::F30 => "F30",
            Microscope::Hd2700 => "HD2700",
        }
    }

    /// 该型号的标定表
    pub fn table(self) -> &'static CalibrationTable {
        match self {
            Microscope::F30 => &F30_TABLE,
            Microscope::Hd2700 => &HD2700_TABLE,
        }
    }
}

impl FromStr for Microscope {
    type Err = Cv4emError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "F30" => Ok(Microscope::F30),
            "HD2700" => Ok(Microscope::Hd2700),
            _ => Err(Cv4emError::UnknownMicroscope(s.to_string())),
        }
    }
}

impl fmt::Display for Microscope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 相机长度匹配规则
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchRule {
    /// 输入向零取整后与整数键相等
    ExactInteger,
    /// |输入 - 键| < 容差
    Tolerance(f64),
}

impl MatchRule {
    pub fn matches(self, key: f64, camera_length: f64) -> bool {
        match self {
            MatchRule::ExactInteger => camera_length.trunc() == key,
            MatchRule::Tolerance(tol) => (camera_length - key).abs() < tol,
        }
    }
}

/// 标定表条目
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationEntry {
    /// 名义相机长度（表键）
    pub camera_length: f64,
    /// 像素标定 (1/nm)
    pub scale: f64,
}

const fn entry(camera_length: f64, scale: f64) -> CalibrationEntry {
    CalibrationEntry {
        camera_length,
        scale,
    }
}

/// 单台电镜的标定表
#[derive(Debug)]
pub struct CalibrationTable {
    pub microscope: Microscope,
    pub rule: MatchRule,
    pub entries: &'static [CalibrationEntry],
}

impl CalibrationTable {
    /// 按表顺序返回第一个匹配的条目
    pub fn lookup(&self, camera_length: f64) -> Result<CalibrationEntry> {
        self.entries
            .iter()
            .find(|e| self.rule.matches(e.camera_length, camera_length))
            .copied()
            .ok_or_else(|| Cv4emError::OutOfCalibrationRange {
                microscope: self.microscope.to_string(),
                camera_length,
            })
    }
}

static F30_ENTRIES: [CalibrationEntry; 12] = [
    entry(200.0, 0.2345746633560363),
    entry(250.0, 0.1862625415225771),
    entry(300.0, 0.1562169503514413),
    entry(380.0, 0.1225684262753367),
    entry(580.0, 0.0829012794983478),
    entry(750.0, 0.0621134215923645),
    entry(1000.0, 0.0463765534986008),
    entry(1200.0, 0.0385675398614808),
    entry(1500.0, 0.0304885392056699),
    entry(2000.0, 0.022962175785559),
    entry(3000.0, 0.0153784852837892),
    entry(4500.0, 0.0101846964140601),
];

static HD2700_ENTRIES: [CalibrationEntry; 21] = [
    entry(1.0, 0.268622),
    entry(1.049, 0.214803),
    entry(1.1, 0.175866),
    entry(1.149, 0.150919),
    entry(1.2, 0.129091),
    entry(1.251, 0.11219),
    entry(1.3, 0.09901),
    entry(1.351, 0.089018),
    entry(1.4, 0.079783),
    entry(1.451, 0.072484),
    entry(1.5, 0.066695),
    entry(1.551, 0.061213),
    entry(1.6, 0.056804),
    entry(1.651, 0.052335),
    entry(1.699, 0.048822),
    entry(1.751, 0.045686),
    entry(1.8, 0.04286),
    entry(1.851, 0.040391),
    entry(1.881, 0.039397),
    entry(1.951, 0.03637),
    entry(2.0, 0.03413),
];

pub static F30_TABLE: CalibrationTable = CalibrationTable {
    microscope: Microscope::F30,
    rule: MatchRule::ExactInteger,
    entries: &F30_ENTRIES,
};

pub static HD2700_TABLE: CalibrationTable = CalibrationTable {
    microscope: Microscope::Hd2700,
    rule: MatchRule::Tolerance(HD2700_TOLERANCE),
    entries: &HD2700_ENTRIES,
};

/// 查找标定
pub fn resolve(microscope: Microscope, camera_length: f64) -> Result<CalibrationEntry> {
    microscope.table().lookup(camera_length)
}

/// 按型号字符串查找标定
pub fn resolve_by_name(microscope: &str, camera_length: f64) -> Result<CalibrationEntry> {
    resolve(microscope.parse()?, camera_length)
}

/// 元数据缺少相机长度时的替代值来源
pub enum CameraLengthSource<'a> {
    /// 调用方直接给出
    Provided(f64),
    /// 回调获取（如终端交互输入），返回 `None` 表示放弃
    Prompt(Box<dyn FnMut() -> Option<f64> + 'a>),
    /// 直接报错
    Fail,
}

/// 标定结果
#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationOutcome {
    /// 已写入空间轴标定
    Calibrated {
        microscope: Microscope,
        entry: CalibrationEntry,
    },
    /// 无法标定，谱图像保持不变
    Unresolved { message: String },
}

/// 标定谱图像的两个空间轴
///
/// 型号依次取自 `microscope` 参数、元数据、[`FALLBACK_MICROSCOPE`]。
/// 相机长度取自元数据；缺失时走 `source` 回退路径。
pub fn calibrate(
    signal: &mut SpectralImage,
    microscope: Option<&str>,
    source: CameraLengthSource<'_>,
) -> Result<CalibrationOutcome> {
    let microscope_id = microscope
        .map(str::to_string)
        .or_else(|| signal.metadata.acquisition.microscope.clone())
        .unwrap_or_else(|| FALLBACK_MICROSCOPE.to_string());
    log::info!("Microscope is {}", microscope_id);

    let Some(camera_length) = signal.metadata.acquisition.camera_length else {
        return calibrate_from_source(signal, source);
    };
    log::info!("Camera length = {} mm", camera_length);

    let microscope: Microscope = microscope_id.parse()?;
    let entry = resolve(microscope, camera_length)?;
    log::info!(
        "Using calibration {} for camera length {}",
        entry.scale,
        entry.camera_length
    );

    signal.set_spatial_scale(entry.scale, NBED_UNITS);
    Ok(CalibrationOutcome::Calibrated { microscope, entry })
}

/// 回退路径：替代值只在 HD2700 表中查找
fn calibrate_from_source(
    signal: &mut SpectralImage,
    source: CameraLengthSource<'_>,
) -> Result<CalibrationOutcome> {
    let camera_length = match source {
        CameraLengthSource::Provided(value) => Some(value),
        CameraLengthSource::Prompt(mut ask) => ask(),
        CameraLengthSource::Fail => {
            return Err(Cv4emError::MissingMetadata(format!(
                "camera length of '{}'",
                signal.metadata.title
            )))
        }
    };

    let Some(camera_length) = camera_length else {
        return Ok(CalibrationOutcome::Unresolved {
            message: "No camera length provided".to_string(),
        });
    };
    log::info!("CL of HD2700 = {}", camera_length);

    match HD2700_TABLE.lookup(camera_length) {
        Ok(entry) => {
            signal.set_spatial_scale(entry.scale, NBED_UNITS);
            Ok(CalibrationOutcome::Calibrated {
                microscope: Microscope::Hd2700,
                entry,
            })
        }
        Err(e) => {
            log::warn!("{}", e);
            Ok(CalibrationOutcome::Unresolved {
                message: format!(
                    "Sorry, camera length {} is out of the calibrated range of HD2700",
                    camera_length
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(microscope: Option<&str>, camera_length: Option<f64>) -> SpectralImage {
        let mut s = SpectralImage::from_cube(vec![0.0; 8], [2, 2, 2]).unwrap();
        s.metadata.title = "nbed".to_string();
        s.metadata.acquisition.microscope = microscope.map(str::to_string);
        s.metadata.acquisition.camera_length = camera_length;
        s
    }

    #[test]
    fn test_f30_exact_values() {
        assert_eq!(
            resolve(Microscope::F30, 200.0).unwrap().scale,
            0.2345746633560363
        );
        assert_eq!(
            resolve(Microscope::F30, 750.0).unwrap().scale,
            0.0621134215923645
        );
    }

    #[test]
    fn test_f30_truncates_input() {
        assert_eq!(resolve(Microscope::F30, 200.9).unwrap().camera_length, 200.0);
        assert!(matches!(
            resolve(Microscope::F30, 199.99),
            Err(Cv4emError::OutOfCalibrationRange { .. })
        ));
    }

    #[test]
    fn test_hd2700_tolerance_first_match() {
        let e = resolve(Microscope::Hd2700, 1.255).unwrap();
        assert_eq!(e.camera_length, 1.251);
        assert_eq!(e.scale, 0.11219);
    }

    #[test]
    fn test_hd2700_out_of_range() {
        match resolve(Microscope::Hd2700, 50.0) {
            Err(Cv4emError::OutOfCalibrationRange {
                microscope,
                camera_length,
            }) => {
                assert_eq!(microscope, "HD2700");
                assert_eq!(camera_length, 50.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rules_are_not_unified() {
        // F30 不使用容差：1.255 不会匹配任何键
        assert!(resolve(Microscope::F30, 1.255).is_err());
        // HD2700 不取整：1.9 与 1.881 的差大于容差
        assert!(resolve(Microscope::Hd2700, 1.9).is_err());
    }

    #[test]
    fn test_unknown_microscope() {
        assert!(matches!(
            resolve_by_name("JEM2100", 200.0),
            Err(Cv4emError::UnknownMicroscope(_))
        ));
        assert!(matches!(
            "hd2700".parse::<Microscope>(),
            Err(Cv4emError::UnknownMicroscope(_))
        ));
    }

    #[test]
    fn test_calibrate_sets_both_spatial_axes() {
        let mut s = pattern(Some("HD2700"), Some(1.5));
        let outcome = calibrate(&mut s, None, CameraLengthSource::Fail).unwrap();
        assert_eq!(
            outcome,
            CalibrationOutcome::Calibrated {
                microscope: Microscope::Hd2700,
                entry: entry(1.5, 0.066695),
            }
        );
        for axis in &s.axes[..2] {
            assert_eq!(axis.scale, 0.066695);
            assert_eq!(axis.units, "/nm");
        }
    }

    #[test]
    fn test_calibrate_defaults_to_f30() {
        let mut s = pattern(None, Some(1000.0));
        let outcome = calibrate(&mut s, None, CameraLengthSource::Fail).unwrap();
        assert!(matches!(
            outcome,
            CalibrationOutcome::Calibrated {
                microscope: Microscope::F30,
                ..
            }
        ));
        assert_eq!(s.axes[0].scale, 0.0463765534986008);
    }

    #[test]
    fn test_explicit_microscope_overrides_metadata() {
        let mut s = pattern(Some("HD2700"), Some(300.0));
        calibrate(&mut s, Some("F30"), CameraLengthSource::Fail).unwrap();
        assert_eq!(s.axes[1].scale, 0.1562169503514413);
    }

    #[test]
    fn test_calibrate_out_of_range_is_error() {
        let mut s = pattern(Some("F30"), Some(123.0));
        assert!(matches!(
            calibrate(&mut s, None, CameraLengthSource::Fail),
            Err(Cv4emError::OutOfCalibrationRange { .. })
        ));
        assert_eq!(s.axes[0].scale, 1.0);
    }

    #[test]
    fn test_missing_camera_length_uses_hd2700_table() {
        // 型号为 F30，但回退值只在 HD2700 表中查找
        let mut s = pattern(Some("F30"), None);
        let outcome = calibrate(&mut s, None, CameraLengthSource::Provided(1.1)).unwrap();
        assert!(matches!(
            outcome,
            CalibrationOutcome::Calibrated {
                microscope: Microscope::Hd2700,
                ..
            }
        ));
        assert_eq!(s.axes[0].scale, 0.175866);
    }

    #[test]
    fn test_missing_camera_length_prompt() {
        let mut asked = 0;
        let mut s = pattern(None, None);
        let outcome = calibrate(
            &mut s,
            None,
            CameraLengthSource::Prompt(Box::new(|| {
                asked += 1;
                Some(2.004)
            })),
        )
        .unwrap();
        assert_eq!(asked, 1);
        assert!(matches!(outcome, CalibrationOutcome::Calibrated { .. }));
        assert_eq!(s.axes[1].scale, 0.03413);
    }

    #[test]
    fn test_missing_camera_length_unresolved() {
        let mut s = pattern(None, None);
        let outcome = calibrate(&mut s, None, CameraLengthSource::Provided(750.0)).unwrap();
        assert!(matches!(outcome, CalibrationOutcome::Unresolved { .. }));
        assert_eq!(s.axes[0].scale, 1.0);
        assert_eq!(s.axes[0].units, "");

        let outcome = calibrate(&mut s, None, CameraLengthSource::Prompt(Box::new(|| None))).unwrap();
        assert!(matches!(outcome, CalibrationOutcome::Unresolved { .. }));
    }

    #[test]
    fn test_missing_camera_length_fail() {
        let mut s = pattern(None, None);
        assert!(matches!(
            calibrate(&mut s, None, CameraLengthSource::Fail),
            Err(Cv4emError::MissingMetadata(_))
        ));
    }
}
