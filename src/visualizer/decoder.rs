//! # 像素解码模块
//!
//! ## 设计思路
//!
//! 把字节序列按固定像素编码重新解释：
//! - 黑白屏：源数据 bit 置位 = 黑，逐字节 `255 - b` 反相后得到标准 1-bit（置位 = 白）
//! - 圆形 LCD：大端 RGB565，两字节一个像素，各通道线性放大到 8 bit
//!
//! ## 实现思路
//!
//! 通道放大使用截断（整数除法）而不是四舍五入，与参考输出逐位一致。
//! RGB565 按不重叠的字节对处理，末尾落单的字节直接丢弃，不在这里报错；
//! 长度是否合法交给渲染阶段统一校验。

use super::config::PixelFormat;
use super::source::{DecodedFrame, FramePixels};

const RED_MAX: u16 = 0x1F;
const GREEN_MAX: u16 = 0x3F;
const BLUE_MAX: u16 = 0x1F;

/// 一个 RGB565 像素值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub fn from_be_bytes(hi: u8, lo: u8) -> Self {
        Self(u16::from_be_bytes([hi, lo]))
    }

    /// 帧缓冲中的字节顺序（高字节在前）。
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn red5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub fn green6(self) -> u8 {
        ((self.0 >> 5) & GREEN_MAX) as u8
    }

    pub fn blue5(self) -> u8 {
        (self.0 & BLUE_MAX) as u8
    }

    /// 转换为 RGB888。
    pub fn to_rgb888(self) -> [u8; 3] {
        [
            scale_channel(self.red5(), RED_MAX),
            scale_channel(self.green6(), GREEN_MAX),
            scale_channel(self.blue5(), BLUE_MAX),
        ]
    }
}

/// `trunc(value / max * 255)`，与浮点写法 `int((value / max) * 255)` 在全部输入上一致。
fn scale_channel(value: u8, max: u16) -> u8 {
    (value as u16 * 255 / max) as u8
}

/// 按设备固件 `lcd_RGB` 的方式把 RGB888 压缩为 RGB565。
pub fn encode_rgb565(red: u8, green: u8, blue: u8) -> Rgb565 {
    let map = |c: u8, max: u16| c as u16 * max / 255;
    Rgb565((map(red, RED_MAX) << 11) | (map(green, GREEN_MAX) << 5) | map(blue, BLUE_MAX))
}

/// 黑白屏极性反相：`255 - b`。
pub fn invert_mono(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| 255 - b).collect()
}

/// 将字节序列按大端 RGB565 解码为 RGB888 三元组。
///
/// 末尾落单的字节被丢弃。
pub fn decode_rgb565(bytes: &[u8]) -> Vec<[u8; 3]> {
    bytes
        .chunks_exact(2)
        .map(|pair| Rgb565::from_be_bytes(pair[0], pair[1]).to_rgb888())
        .collect()
}

/// 按像素格式解码。
pub fn decode_frame(bytes: &[u8], format: PixelFormat) -> DecodedFrame {
    let pixels = match format {
        PixelFormat::Mono1 => FramePixels::Mono(invert_mono(bytes)),
        PixelFormat::Rgb565 => {
            if bytes.len() % 2 != 0 {
                // TODO: 确认设备端导出是否存在多写一个字节的 off-by-one，确认后可改为硬错误
                log::warn!("⚠️ RGB565 数据长度为奇数（{} 字节），末尾字节已丢弃", bytes.len());
            }
            FramePixels::Rgb(decode_rgb565(bytes))
        }
    };

    DecodedFrame {
        source_len: bytes.len(),
        pixels,
    }
}
