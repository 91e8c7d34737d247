//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“流水线中间结果”解耦：
//! - `RawHexDump` 表示已读入但未解析的文本
//! - `DecodedFrame` 表示解码后、尚未按分辨率校验的像素数据

/// 读取阶段输出：原始文本与来源标识。
pub(crate) struct RawHexDump {
    pub(crate) text: String,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 解码后的像素数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramePixels {
    /// 已反相的 1-bit 打包字节，bit 置位 = 白。
    Mono(Vec<u8>),
    /// RGB888 三元组，每个像素一个。
    Rgb(Vec<[u8; 3]>),
}

/// 解码阶段输出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    /// 解析得到的原始字节数（尺寸校验以它为准）。
    pub source_len: usize,
    pub pixels: FramePixels,
}

impl DecodedFrame {
    /// 解码得到的像素数量。
    pub fn pixel_count(&self) -> usize {
        match &self.pixels {
            FramePixels::Mono(packed) => packed.len() * 8,
            FramePixels::Rgb(rgb) => rgb.len(),
        }
    }
}
