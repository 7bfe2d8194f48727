//! # 参考数据模块
//!
//! 只读的静态参考数据表，首次访问时建立索引，运行期间不修改。
//!
//! ## 子模块
//! - `kfactors`: HD2700 Bruker EDS k 因子表
//! - `elements`: 元素周期表
//! - `xray`: X 射线特征谱线能量
//!
//! ## 依赖关系
//! - 被 `eds/` 和 `commands/` 使用
//! - 使用 `models::LineFamily`

pub mod elements;
pub mod kfactors;
pub mod xray;

pub use elements::get_element;
pub use xray::get_xray_energies;
