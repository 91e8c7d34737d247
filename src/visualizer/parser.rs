//! # 十六进制文本解析模块
//!
//! ## 设计思路
//!
//! 设备端导出的帧缓冲是一段逗号分隔的十六进制文本（可带 `0x` 前缀，夹杂任意空白、换行与制表符缩进）。
//! 这里把“文本 → 字节序列”做成严格的类型化转换：每个 token 要么得到一个 `u8`，
//! 要么返回带位置信息的 `VisualizerError::Parse`，不做任何隐式数值转换。
//!
//! ## 实现思路
//!
//! 1. 按 `,` 切分
//! 2. 去掉 token 内所有空白字符（换行、回车、空格、制表符等）
//! 3. 去掉一次 `0x` / `0X` 前缀
//! 4. 剩余部分必须全部是十六进制数字，且值落在 `0..=255`
//!
//! 解析是全有或全无的：任意 token 失败即整体失败，不返回部分结果。

use std::fmt::Write as _;

use super::VisualizerError;

/// 导出文本的书写风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexStyle {
    /// `printf("%x,")` 风格：`f8,0,1f`
    Bare,
    /// 带前缀风格：`0xf8,0x0,0x1f`
    Prefixed,
}

/// 将单个原始 token 转换为字节。
///
/// `index` 仅用于错误信息定位。
pub fn parse_hex_token(raw: &str, index: usize) -> Result<u8, VisualizerError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);

    let parse_error = || VisualizerError::Parse {
        index,
        token: cleaned.clone(),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(parse_error());
    }

    u8::from_str_radix(digits, 16).map_err(|_| parse_error())
}

/// 解析完整的导出文本，保持原始顺序。
pub fn parse_hex_dump(text: &str) -> Result<Vec<u8>, VisualizerError> {
    text.split(',')
        .enumerate()
        .map(|(index, token)| parse_hex_token(token, index))
        .collect()
}

/// 按设备端工具的格式输出字节序列（逗号连接，无末尾逗号）。
pub fn format_hex_dump(bytes: &[u8], style: HexStyle) -> String {
    let mut out = String::with_capacity(bytes.len() * 5);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // 写入 String 不会失败
        let _ = match style {
            HexStyle::Bare => write!(out, "{:x}", byte),
            HexStyle::Prefixed => write!(out, "{:#x}", byte),
        };
    }
    out
}
