//! # 电子墨水屏可视化入口
//!
//! 读取 `./image.txt`（400×300，1 bit/像素，bit 置位 = 黑），反相后写出 `./image.png`。

use display_visualizer::error::AppError;
use display_visualizer::visualizer::{Visualizer, VisualizerConfig};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Visualizer::new(VisualizerConfig::epd_400x300())?.run()?;
    Ok(())
}
