//! # 显示屏帧缓冲可视化工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  设备端固件 / 模拟器                                     │
//! │  writeScreenBufferToFile() → image.txt（逗号分隔十六进制）│
//! └───────┬────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┼────────────────────────────────────────────────┐
//! │       ↓            可视化工具 (Rust)                    │
//! │                                                        │
//! │  ┌─ error ────── AppError (统一错误类型)                │
//! │  └─ visualizer    解析·解码·渲染·预览·落盘              │
//! │       ├─ EPD   400×300 1-bit（反相）                    │
//! │       └─ LCD   240×240 RGB565（校准圆环）               │
//! └────────────────────────────────────────────────────────┘
//!         ↓
//!      image.png
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，二进制入口的返回类型 |
//! | [`visualizer`] | 十六进制文本到 PNG 的完整流水线 |

pub mod error;
pub mod visualizer;
