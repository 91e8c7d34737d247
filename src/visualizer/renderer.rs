//! # 渲染模块
//!
//! ## 设计思路
//!
//! 将解码后的像素按固定分辨率装入光栅图像，并负责 PNG 落盘。
//! 尺寸校验放在最前面：长度不一致直接失败，不裁剪、不补齐。
//!
//! ## 实现思路
//!
//! 1. 校验原始字节数（字节数相符时像素数必然相符）
//! 2. 黑白屏：反相后的字节即 1-bit 行数据（MSB 在前），直接写 1-bit 灰度 PNG
//! 3. 圆形 LCD：RGB 三元组装入 `RgbImage`，再用 `embedded-graphics` 画 1 像素白色校准圆
//! 4. 保存时在单个作用域内打开、写入并关闭文件

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use embedded_graphics::Drawable;
use embedded_graphics::Pixel as EgPixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::primitives::{Circle, Primitive, PrimitiveStyle};
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, GrayImage, ImageEncoder, Luma, Rgb, RgbImage};

use super::config::{PixelFormat, VisualizerConfig};
use super::source::{DecodedFrame, FramePixels};
use super::VisualizerError;

/// 渲染结果。
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedImage {
    /// 1-bit 图像，`packed` 为连续 bit 流（MSB 在前，bit 置位 = 白）。
    Mono {
        width: u32,
        height: u32,
        packed: Vec<u8>,
    },
    /// 24-bit RGB 图像。
    Rgb(RgbImage),
}

impl RenderedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Mono { width, height, .. } => (*width, *height),
            Self::Rgb(image) => image.dimensions(),
        }
    }

    /// 展开为 8 bit 图像，供预览与断言使用。
    pub fn to_dynamic_image(&self) -> DynamicImage {
        match self {
            Self::Mono {
                width,
                height,
                packed,
            } => {
                let gray = GrayImage::from_fn(*width, *height, |x, y| {
                    let bit = y as usize * *width as usize + x as usize;
                    Luma([if mono_bit(packed, bit) { 255 } else { 0 }])
                });
                DynamicImage::ImageLuma8(gray)
            }
            Self::Rgb(image) => DynamicImage::ImageRgb8(image.clone()),
        }
    }

    /// 以 PNG 编码写入任意输出。
    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), VisualizerError> {
        match self {
            Self::Mono {
                width,
                height,
                packed,
            } => {
                let mut encoder = png::Encoder::new(writer, *width, *height);
                encoder.set_color(png::ColorType::Grayscale);
                encoder.set_depth(png::BitDepth::One);

                let mut png_writer = encoder
                    .write_header()
                    .map_err(|e| VisualizerError::Encode(format!("PNG 头写入失败：{}", e)))?;
                png_writer
                    .write_image_data(&mono_rows(packed, *width, *height))
                    .map_err(|e| VisualizerError::Encode(format!("PNG 数据写入失败：{}", e)))?;
                png_writer
                    .finish()
                    .map_err(|e| VisualizerError::Encode(format!("PNG 收尾失败：{}", e)))
            }
            Self::Rgb(image) => PngEncoder::new(writer)
                .write_image(
                    image.as_raw(),
                    image.width(),
                    image.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| VisualizerError::Encode(format!("PNG 编码失败：{}", e))),
        }
    }

    /// 保存为 PNG，已存在的文件直接覆盖。
    pub fn save(&self, path: &Path) -> Result<(), VisualizerError> {
        let file = File::create(path).map_err(|e| {
            VisualizerError::FileSystem(format!("无法创建输出文件 {}：{}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        self.write_png(&mut writer)?;
        writer
            .flush()
            .map_err(|e| VisualizerError::FileSystem(format!("写入输出文件失败：{}", e)))
    }
}

fn mono_bit(packed: &[u8], bit: usize) -> bool {
    packed[bit / 8] & (0x80 >> (bit % 8)) != 0
}

/// 将连续 bit 流转换为按字节对齐的 PNG 行。
///
/// 输入长度按连续位流 `ceil(w·h/8)` 校验，行尾不带填充位；PNG 要求每行从新字节开始，
/// 因此宽度不是 8 的倍数时在这里逐位重排。宽度是 8 的倍数时两者布局相同。
fn mono_rows(packed: &[u8], width: u32, height: u32) -> Vec<u8> {
    let width = width as usize;
    if width % 8 == 0 {
        return packed.to_vec();
    }

    let stride = width.div_ceil(8);
    let mut rows = vec![0u8; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width {
            if mono_bit(packed, y * width + x) {
                rows[y * stride + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    rows
}

/// `RgbImage` 到 `embedded-graphics` 绘制目标的适配。
struct RgbCanvas<'a>(&'a mut RgbImage);

impl OriginDimensions for RgbCanvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for RgbCanvas<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = EgPixel<Self::Color>>,
    {
        let (width, height) = self.0.dimensions();
        for EgPixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < width && y < height {
                self.0.put_pixel(x, y, Rgb([color.r(), color.g(), color.b()]));
            }
        }
        Ok(())
    }
}

/// 画内切于 (0,0)–(w-1,h-1) 的 1 像素白色圆，标出圆屏可视区域。
pub fn draw_calibration_ring(image: &mut RgbImage) {
    let diameter = image.width().min(image.height());
    let mut canvas = RgbCanvas(image);
    let Ok(()) = Circle::new(Point::zero(), diameter)
        .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
        .draw(&mut canvas);
}

/// 将解码结果渲染为目标分辨率的图像。
pub fn render(
    frame: &DecodedFrame,
    config: &VisualizerConfig,
) -> Result<RenderedImage, VisualizerError> {
    let expected_bytes = config.expected_bytes()?;
    if frame.source_len != expected_bytes {
        return Err(VisualizerError::ShapeMismatch {
            expected: expected_bytes,
            actual: frame.source_len,
            unit: "字节",
        });
    }

    match (&frame.pixels, config.pixel_format) {
        (FramePixels::Mono(packed), PixelFormat::Mono1) => {
            if config.draw_calibration_ring {
                log::debug!("黑白屏不绘制校准圆环，已忽略该选项");
            }
            Ok(RenderedImage::Mono {
                width: config.width,
                height: config.height,
                packed: packed.clone(),
            })
        }
        (FramePixels::Rgb(rgb), PixelFormat::Rgb565) => {
            let raw: Vec<u8> = rgb.iter().flatten().copied().collect();
            let mut image = RgbImage::from_raw(config.width, config.height, raw)
                .ok_or_else(|| VisualizerError::Encode("RGB 缓冲长度异常".to_string()))?;

            if config.draw_calibration_ring {
                draw_calibration_ring(&mut image);
            }

            Ok(RenderedImage::Rgb(image))
        }
        (_, format) => Err(VisualizerError::InvalidConfig(format!(
            "解码结果与配置像素格式 {} 不一致",
            format.as_str()
        ))),
    }
}
