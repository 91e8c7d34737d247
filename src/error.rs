//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 二进制入口统一返回 `Result<(), AppError>`，任何失败都直接终止并打印诊断信息。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `VisualizerError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::visualizer::VisualizerError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 可视化流水线错误（解析 / 尺寸 / 编码 / 文件）
    #[error("{0}")]
    Visualizer(#[from] VisualizerError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}
