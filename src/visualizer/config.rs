//! # 配置模块
//!
//! ## 设计思路
//!
//! 将原先写死在脚本里的输入/输出路径、分辨率与像素格式集中到 `VisualizerConfig`，
//! 两种屏幕共用同一条参数化流水线。
//!
//! ## 实现思路
//!
//! - `epd_400x300` / `gc9a01a_240x240` 提供两块屏幕的固定预设。
//! - `PixelFormat` 给出格式名与期望字节数。
//! - `validate` 在流水线开始前拒绝零尺寸与长度溢出。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::VisualizerError;

/// 默认输入文件（设备端导出的 C 数组文本）。
pub const DEFAULT_INPUT_PATH: &str = "./image.txt";
/// 默认输出文件，存在时直接覆盖。
pub const DEFAULT_OUTPUT_PATH: &str = "./image.png";

/// 帧缓冲像素格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 1 bit/像素，MSB 在前，源数据 bit 置位 = 黑。
    Mono1,
    /// 16 bit/像素，大端 5-6-5。
    Rgb565,
}

impl PixelFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mono1 => "mono1",
            Self::Rgb565 => "rgb565",
        }
    }

    pub fn bits_per_pixel(self) -> usize {
        match self {
            Self::Mono1 => 1,
            Self::Rgb565 => 16,
        }
    }

    /// 给定分辨率下帧缓冲应有的字节数（按字节向上取整）。
    ///
    /// 1-bit 帧按连续位流计长 `ceil(w·h/8)`，行与行之间没有填充位；
    /// 宽度不是 8 的倍数时由渲染器重新按字节对齐打包每一行。两种预设宽度都是 8 的倍数。
    ///
    /// 乘法溢出时返回 `None`。
    pub fn expected_bytes(self, width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(self.bits_per_pixel()))
            .map(|bits| bits.div_ceil(8))
    }
}

/// 可视化配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// 输入的十六进制文本文件。
    pub input_path: PathBuf,
    /// 输出 PNG 文件。
    pub output_path: PathBuf,
    /// 屏幕宽度（像素）。
    pub width: u32,
    /// 屏幕高度（像素）。
    pub height: u32,
    pub pixel_format: PixelFormat,
    /// 是否绘制圆屏可视区域的校准圆环。
    pub draw_calibration_ring: bool,
    /// 是否调用外部查看器预览。
    pub preview: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self::epd_400x300()
    }
}

impl VisualizerConfig {
    /// 400×300 黑白电子墨水屏预设。
    pub fn epd_400x300() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width: 400,
            height: 300,
            pixel_format: PixelFormat::Mono1,
            draw_calibration_ring: false,
            preview: true,
        }
    }

    /// 240×240 GC9A01A 圆形 LCD 预设（RGB565 + 校准圆环）。
    pub fn gc9a01a_240x240() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width: 240,
            height: 240,
            pixel_format: PixelFormat::Rgb565,
            draw_calibration_ring: true,
            preview: true,
        }
    }

    /// 当前配置下输入应有的字节数。
    pub fn expected_bytes(&self) -> Result<usize, VisualizerError> {
        self.pixel_format
            .expected_bytes(self.width, self.height)
            .ok_or_else(|| VisualizerError::InvalidConfig("分辨率导致字节数溢出".to_string()))
    }

    /// 在流水线开始前校验配置。
    pub fn validate(&self) -> Result<(), VisualizerError> {
        if self.width == 0 || self.height == 0 {
            return Err(VisualizerError::InvalidConfig(format!(
                "分辨率不能为零：{}x{}",
                self.width, self.height
            )));
        }

        self.expected_bytes().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_display_buffers() {
        let epd = VisualizerConfig::epd_400x300();
        assert_eq!(epd.expected_bytes().expect("epd length"), 15_000);
        assert!(!epd.draw_calibration_ring);

        let lcd = VisualizerConfig::gc9a01a_240x240();
        assert_eq!(lcd.expected_bytes().expect("lcd length"), 115_200);
        assert!(lcd.draw_calibration_ring);
    }

    #[test]
    fn mono_length_rounds_up_partial_bytes() {
        assert_eq!(PixelFormat::Mono1.expected_bytes(3, 3), Some(2));
        assert_eq!(PixelFormat::Mono1.expected_bytes(8, 1), Some(1));
    }

    #[test]
    fn mono_length_has_no_row_padding() {
        // 12×2 连续位流为 24 bit = 3 字节，按行对齐会是 4 字节
        assert_eq!(PixelFormat::Mono1.expected_bytes(12, 2), Some(3));
    }

    #[test]
    fn presets_read_and_write_fixed_working_dir_files() {
        for preset in [VisualizerConfig::epd_400x300(), VisualizerConfig::gc9a01a_240x240()] {
            assert_eq!(preset.input_path, PathBuf::from("./image.txt"));
            assert_eq!(preset.output_path, PathBuf::from("./image.png"));
            assert!(preset.preview);
        }
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let mut config = VisualizerConfig::gc9a01a_240x240();
        config.height = 0;

        assert!(matches!(config.validate(), Err(VisualizerError::InvalidConfig(_))));
    }

    #[test]
    fn config_serializes_format_in_lowercase() {
        let json = serde_json::to_value(VisualizerConfig::gc9a01a_240x240()).expect("serialize");
        assert_eq!(json["pixel_format"], "rgb565");
        assert_eq!(json["pixel_format"], PixelFormat::Rgb565.as_str());
    }
}
