//! # 圆形 LCD 可视化入口
//!
//! 读取 `./image.txt`（240×240，RGB565，每像素 2 字节），绘制校准圆环后写出 `./image.png`。

use display_visualizer::error::AppError;
use display_visualizer::visualizer::{Visualizer, VisualizerConfig};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Visualizer::new(VisualizerConfig::gc9a01a_240x240())?.run()?;
    Ok(())
}
