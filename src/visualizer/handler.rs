//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Visualizer` 只负责流程编排，处理链路固定为：
//! 1. 读取导出文本
//! 2. 解析为字节序列
//! 3. 按像素格式解码
//! 4. 按分辨率渲染（含尺寸校验、校准圆环）
//! 5. 预览
//! 6. 保存 PNG
//!
//! ## 实现思路
//!
//! - 任意阶段失败都直接向上传递，不重试、不输出部分结果。
//! - 预览失败只记录告警，不影响落盘。
//! - 记录 `load/parse/decode/render/save/total` 阶段耗时，便于排查大文件。

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::decoder::decode_frame;
use super::parser::parse_hex_dump;
use super::preview::{ImagePreviewer, NoopPreviewer, SystemPreviewer};
use super::renderer::{RenderedImage, render};
use super::{VisualizerConfig, VisualizerError};

/// 一次运行的结果摘要。
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    /// 解析得到的字节数。
    pub byte_count: usize,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

/// 帧缓冲可视化器。
pub struct Visualizer {
    config: VisualizerConfig,
    previewer: Box<dyn ImagePreviewer>,
}

impl Visualizer {
    /// 根据配置创建可视化器。
    ///
    /// `config.preview` 为 `true` 时使用系统查看器，否则不预览。
    ///
    /// # 示例
    /// ```rust
    /// use display_visualizer::visualizer::{Visualizer, VisualizerConfig};
    ///
    /// let mut config = VisualizerConfig::gc9a01a_240x240();
    /// config.preview = false;
    /// let visualizer = Visualizer::new(config)?;
    /// # Ok::<(), display_visualizer::visualizer::VisualizerError>(())
    /// ```
    pub fn new(config: VisualizerConfig) -> Result<Self, VisualizerError> {
        let previewer: Box<dyn ImagePreviewer> = if config.preview {
            Box::new(SystemPreviewer)
        } else {
            Box::new(NoopPreviewer)
        };
        Self::with_previewer(config, previewer)
    }

    /// 使用自定义预览实现创建可视化器。
    pub fn with_previewer(
        config: VisualizerConfig,
        previewer: Box<dyn ImagePreviewer>,
    ) -> Result<Self, VisualizerError> {
        config.validate()?;
        Ok(Self { config, previewer })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// 处理主入口：读取输入文件并输出 PNG。
    pub fn run(&self) -> Result<RunSummary, VisualizerError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = Self::load_from_file(&self.config.input_path)?;
        let load_elapsed = load_start.elapsed();

        log::debug!(
            "读取完成 - 来源: {} 字符数: {} load={}ms",
            raw.source_hint,
            raw.text.len(),
            load_elapsed.as_millis()
        );

        let image = self.render_text(&raw.text)?;
        let summary = self.finish(image, total_start)?;

        log::info!(
            "✅ 可视化完成 - {}x{} {} 字节 -> {} total={}ms",
            summary.width,
            summary.height,
            summary.byte_count,
            summary.output_path.display(),
            summary.elapsed.as_millis()
        );

        Ok(summary)
    }

    /// 跳过文件读取，直接处理内存中的文本。
    pub fn run_from_text(&self, text: &str) -> Result<RunSummary, VisualizerError> {
        let total_start = Instant::now();
        let image = self.render_text(text)?;
        self.finish(image, total_start)
    }

    /// 解析、解码并渲染，不产生任何副作用。
    pub fn render_text(&self, text: &str) -> Result<(RenderedImage, usize), VisualizerError> {
        let parse_start = Instant::now();
        let bytes = parse_hex_dump(text)?;
        let parse_elapsed = parse_start.elapsed();

        let decode_start = Instant::now();
        let frame = decode_frame(&bytes, self.config.pixel_format);
        let decode_elapsed = decode_start.elapsed();

        let render_start = Instant::now();
        let image = render(&frame, &self.config)?;
        let render_elapsed = render_start.elapsed();

        log::info!(
            "🧩 解码成功 - 格式: {} 字节数: {} 分辨率: {}x{}",
            self.config.pixel_format.as_str(),
            bytes.len(),
            self.config.width,
            self.config.height
        );
        log::debug!(
            "阶段耗时 - parse={}ms decode={}ms render={}ms",
            parse_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            render_elapsed.as_millis()
        );

        Ok((image, bytes.len()))
    }

    fn finish(
        &self,
        (image, byte_count): (RenderedImage, usize),
        total_start: Instant,
    ) -> Result<RunSummary, VisualizerError> {
        if let Err(err) = self.previewer.show(&image) {
            log::warn!("⚠️ 预览失败，继续保存：{}", err);
        }

        let save_start = Instant::now();
        image.save(&self.config.output_path)?;
        log::debug!("保存完成 save={}ms", save_start.elapsed().as_millis());

        let (width, height) = image.dimensions();
        Ok(RunSummary {
            width,
            height,
            byte_count,
            output_path: self.config.output_path.clone(),
            elapsed: total_start.elapsed(),
        })
    }
}
