//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载可视化链路中的所有错误来源：
//! 解析失败、尺寸不匹配、文件读写、PNG 编码与预览。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 可视化流水线统一错误类型。
///
/// 该类型会在二进制入口被上转为 `AppError`，最终打印后退出。
#[derive(Debug, thiserror::Error)]
pub enum VisualizerError {
    /// 第 `index` 个 token 清洗后不是合法的十六进制字节。
    #[error("解析错误：第 {index} 个 token {token:?} 不是合法的十六进制字节")]
    Parse { index: usize, token: String },

    /// 数据长度与目标分辨率不一致。
    #[error("尺寸不匹配：期望 {expected} {unit}，实际 {actual} {unit}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        unit: &'static str,
    },

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("预览错误：{0}")]
    Preview(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

impl From<VisualizerError> for String {
    fn from(error: VisualizerError) -> Self {
        error.to_string()
    }
}
