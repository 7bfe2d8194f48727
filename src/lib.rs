//! # cv4em - 电子显微镜数据标定与可视化工具
//!
//! 把 EDS 与 NBED 数据处理中的常用辅助功能统一成一个库和单一可执行文件。
//! 库部分可直接调用（k 因子查询、相机长度标定、EDAX 容器关联），
//! `cv4em` 可执行文件只负责解析参数并分派到 `commands`。
//!
//! ## 子命令
//! - `kfactor`   - EDS k 因子查询
//! - `calibrate` - NBED 相机长度标定
//! - `load`      - 加载 EDAX HDF5 文件
//! - `lines`     - 元素与 X 射线谱线选择
//! - `overlay`   - 元素分布图叠加
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── eds/       (k 因子、谱线、分布图)
//!   │     ├── nbed/      (相机长度标定)
//!   │     ├── loader/    (EDAX HDF5 加载)
//!   │     ├── overlay/   (分布图合成与渲染)
//!   │     ├── data/      (静态参考数据)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod data;
pub mod eds;
pub mod error;
pub mod loader;
pub mod models;
pub mod nbed;
pub mod overlay;
pub mod utils;

// 常用入口
pub use eds::kfactor::{find_kfactors, find_kfactors_for};
pub use error::{Cv4emError, Result};
pub use loader::{load_container, load_file, LoadReport};
pub use nbed::calibration::{calibrate, resolve, CameraLengthSource, Microscope};
