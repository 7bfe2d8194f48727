//! # 谱图像数据模型
//!
//! 定义三维谱图像（两个空间轴 + 一个能量轴）及其轴标定和元数据树，
//! 以及从谱图像积分得到的二维元素分布图。
//!
//! ## 数据布局
//! 数据按 `[y][x][channel]` 行优先存储；`axes` 的顺序为 `[x, y, Energy]`。
//!
//! ## 依赖关系
//! - 被 `loader/`, `nbed/`, `eds/`, `overlay/` 使用
//! - 无外部模块依赖

use crate::error::{Cv4emError, Result};

/// 坐标轴标定
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub name: String,
    pub units: String,
    pub scale: f64,
    pub offset: f64,
    pub size: usize,
}

impl Axis {
    /// 创建默认标定（scale = 1, offset = 0）的坐标轴
    pub fn new(name: impl Into<String>, units: impl Into<String>, size: usize) -> Self {
        Axis {
            name: name.into(),
            units: units.into(),
            scale: 1.0,
            offset: 0.0,
            size,
        }
    }

    /// 第 `index` 个通道的标定坐标
    pub fn value_at(&self, index: usize) -> f64 {
        self.offset + index as f64 * self.scale
    }
}

/// 样品台位置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub tilt_alpha: Option<f64>,
    pub rotation: Option<f64>,
}

/// EDS 探测器参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detector {
    pub live_time: Option<f64>,
    pub real_time: Option<f64>,
}

/// 采集仪器参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Acquisition {
    /// 加速电压 (kV)
    pub beam_energy: Option<f64>,
    pub beam_current: Option<f64>,
    pub magnification: Option<f64>,
    pub working_distance: Option<f64>,
    /// 电镜型号标识，如 "F30"、"HD2700"
    pub microscope: Option<String>,
    /// 相机长度（F30 为 mm，HD2700 为仪器单位）
    pub camera_length: Option<f64>,
    pub stage: Stage,
    pub detector: Detector,
}

/// 谱图像元数据树
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub signal_type: String,
    pub acquisition: Acquisition,
    /// 样品的 X 射线谱线列表，如 ["Al_Ka", "O_Ka"]
    pub xray_lines: Vec<String>,
}

/// 三维谱图像
#[derive(Debug, Clone)]
pub struct SpectralImage {
    /// 行优先 `[y][x][channel]`
    pub data: Vec<f32>,
    /// `[x, y, Energy]`
    pub axes: [Axis; 3],
    pub metadata: Metadata,
}

impl SpectralImage {
    /// 从 `(ny, nx, channels)` 形状的数据立方体创建，轴采用默认标定
    pub fn from_cube(data: Vec<f32>, shape: [usize; 3]) -> Result<Self> {
        let [ny, nx, channels] = shape;
        let expected = ny * nx * channels;
        if data.len() != expected {
            return Err(Cv4emError::InvalidArgument(format!(
                "cube of shape {:?} needs {} values, got {}",
                shape,
                expected,
                data.len()
            )));
        }

        Ok(SpectralImage {
            data,
            axes: [
                Axis::new("x", "", nx),
                Axis::new("y", "", ny),
                Axis::new("Energy", "", channels),
            ],
            metadata: Metadata::default(),
        })
    }

    /// 数据形状 `(ny, nx, channels)`
    pub fn shape(&self) -> [usize; 3] {
        [self.axes[1].size, self.axes[0].size, self.axes[2].size]
    }

    pub fn width(&self) -> usize {
        self.axes[0].size
    }

    pub fn height(&self) -> usize {
        self.axes[1].size
    }

    pub fn channels(&self) -> usize {
        self.axes[2].size
    }

    /// 像素 (x, y) 处的能谱
    pub fn spectrum(&self, x: usize, y: usize) -> &[f32] {
        let channels = self.channels();
        let start = (y * self.width() + x) * channels;
        &self.data[start..start + channels]
    }

    /// 同时设置两个空间轴的标定
    pub fn set_spatial_scale(&mut self, scale: f64, units: &str) {
        for axis in self.axes.iter_mut().take(2) {
            axis.scale = scale;
            axis.units = units.to_string();
        }
    }
}

/// 二维元素分布图
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMap {
    /// 标签，如 "Al_Ka"
    pub label: String,
    pub width: usize,
    pub height: usize,
    /// 行优先 `[y][x]`
    pub data: Vec<f32>,
}

impl ElementMap {
    pub fn new(label: impl Into<String>, width: usize, height: usize, data: Vec<f32>) -> Self {
        ElementMap {
            label: label.into(),
            width,
            height,
            data,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// 最大强度（空图返回 0）
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(0.0_f32, f32::max)
    }
}
