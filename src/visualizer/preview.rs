//! # 预览模块
//!
//! ## 设计思路
//!
//! “弹出图片查看”依赖具体平台，不应让核心流水线直接绑定任何窗口或查看器。
//! 这里抽象为 `ImagePreviewer` 能力接口：
//! - `SystemPreviewer`：写临时 PNG 后交给系统默认程序打开（不等待其退出）。
//!   临时文件名固定，每次预览覆盖上一次的文件，不会在临时目录里堆积
//! - `NoopPreviewer`：什么都不做，供测试与无界面环境使用

use std::path::{Path, PathBuf};
use std::process::Command;

use super::VisualizerError;
use super::renderer::RenderedImage;

/// 图片预览能力。
pub trait ImagePreviewer {
    fn show(&self, image: &RenderedImage) -> Result<(), VisualizerError>;
}

/// 空实现。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPreviewer;

impl ImagePreviewer for NoopPreviewer {
    fn show(&self, _image: &RenderedImage) -> Result<(), VisualizerError> {
        Ok(())
    }
}

/// 预览临时文件名。
pub const PREVIEW_FILE_NAME: &str = "display-visualizer-preview.png";

/// 使用系统默认图片查看器。
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPreviewer;

impl SystemPreviewer {
    fn temp_preview_path() -> PathBuf {
        std::env::temp_dir().join(PREVIEW_FILE_NAME)
    }

    #[cfg(target_os = "windows")]
    fn opener(path: &Path) -> Command {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    }

    #[cfg(target_os = "macos")]
    fn opener(path: &Path) -> Command {
        let mut command = Command::new("open");
        command.arg(path);
        command
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    fn opener(path: &Path) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

impl ImagePreviewer for SystemPreviewer {
    fn show(&self, image: &RenderedImage) -> Result<(), VisualizerError> {
        let path = Self::temp_preview_path();
        image.save(&path)?;

        log::debug!("🖼️ 打开预览 - 临时文件: {}", path.display());
        Self::opener(&path)
            .spawn()
            .map(|_| ())
            .map_err(|e| VisualizerError::Preview(format!("启动图片查看器失败：{}", e)))
    }
}
