// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error;
use tracing::debug;

/// 文本编码处理错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextEncodingError {
    #[error("编码转换失败: 内容不是有效的 {0}")]
    ConversionFailed(&'static str),
}

/// 从 Content-Type 头中提取声明的字符集
///
/// # 参数
///
/// * `content_type` - Content-Type 头的值，例如 `text/html; charset=ISO-8859-1`
///
/// # 返回值
///
/// 声明的字符集标签，未声明时返回 `None`
pub fn declared_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (!value.is_empty()).then_some(value)
        } else {
            None
        }
    })
}

/// 将响应体解码为UTF-8字符串
///
/// 优先使用 Content-Type 声明的编码（严格解码，遇到非法字节即失败），
/// 未声明或标签无法识别时，有效的UTF-8直接使用，否则交给 chardetng 猜测编码。
///
/// # 参数
///
/// * `body` - 原始响应字节
/// * `content_type` - 响应的 Content-Type 头
///
/// # 返回值
///
/// * `Ok(String)` - 解码后的文本
/// * `Err(TextEncodingError)` - 按声明编码解码失败
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, TextEncodingError> {
    let declared = content_type
        .and_then(declared_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    if let Some(encoding) = declared {
        debug!("使用声明的编码: {}", encoding.name());
        let without_bom = match Encoding::for_bom(body) {
            Some((bom_encoding, len)) if bom_encoding == encoding => &body[len..],
            _ => body,
        };
        return encoding
            .decode_without_bom_handling_and_without_replacement(without_bom)
            .map(|text| text.into_owned())
            .ok_or(TextEncodingError::ConversionFailed(encoding.name()));
    }

    if let Ok(text) = std::str::from_utf8(body) {
        return Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    debug!("检测到编码: {}", encoding.name());

    let (decoded, _, _) = encoding.decode(body);
    Ok(decoded.into_owned())
}
