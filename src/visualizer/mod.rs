//! # 帧缓冲可视化模块（visualizer）
//!
//! ## 设计思路
//!
//! 将“读取导出文本 → 解析字节 → 像素解码 → 渲染落盘 → 预览”按职责拆分为多个子模块。
//! 黑白电子墨水屏与 RGB565 圆形 LCD 共用同一条参数化流水线，差异全部收敛在 `VisualizerConfig`。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责读取输入文件
//! - `parser`：十六进制文本 ⇄ 字节序列
//! - `decoder`：1-bit 反相与 RGB565 → RGB888
//! - `renderer`：尺寸校验、校准圆环、PNG 编码
//! - `preview`：预览能力接口及系统/空实现
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! bin/epd_image.rs / bin/gecko_image.rs（选定固定预设）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 image.txt）
//!    ├─ parser.rs（逗号切分 + 清洗 + 严格十六进制）
//!    ├─ decoder.rs（255 - b / RGB565 截断放大）
//!    ├─ renderer.rs（尺寸校验 + 圆环 + PNG）
//!    └─ preview.rs（外部查看器）
//!    ↓
//! 写出 image.png
//! ```

mod config;
pub mod decoder;
mod error;
mod handler;
mod loader;
pub mod parser;
pub mod preview;
pub mod renderer;
mod source;

pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, PixelFormat, VisualizerConfig};
pub use error::VisualizerError;
pub use handler::{RunSummary, Visualizer};
pub use source::{DecodedFrame, FramePixels};
