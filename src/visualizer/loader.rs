//! # 输入加载模块
//!
//! 读取设备端导出的十六进制文本。文件缺失或不可读时尽早失败。

use std::path::Path;

use super::source::RawHexDump;
use super::{Visualizer, VisualizerError};

impl Visualizer {
    /// 从本地路径读取完整文本。
    pub(super) fn load_from_file(path: &Path) -> Result<RawHexDump, VisualizerError> {
        log::info!("📁 开始读取导出文本 - 路径: {}", path.display());

        if !path.exists() {
            return Err(VisualizerError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| VisualizerError::FileSystem(format!("无法读取输入文件：{}", e)))?;

        Ok(RawHexDump {
            text,
            source_hint: path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_file_system_error() {
        let path = std::env::temp_dir().join("display-visualizer-definitely-missing.txt");

        assert!(matches!(
            Visualizer::load_from_file(&path),
            Err(VisualizerError::FileSystem(_))
        ));
    }
}
