// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 网络故障类别
///
/// 传输层失败被归入固定的几类，错误报告中只出现这些描述，
/// 不会混入运行时相关的原始错误文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchFault {
    /// 域名解析失败
    Dns,
    /// 连接被拒绝
    ConnectionRefused,
    /// 其他连接失败（重置、不可达等）
    Connect,
    /// TLS握手或证书校验失败
    Tls,
    /// 重定向次数超过上限
    TooManyRedirects,
    /// URL无法被HTTP客户端接受
    InvalidUrl,
    /// 响应体读取或解码失败
    Decode,
    /// 其他请求失败
    Request,
}

impl FetchFault {
    pub fn description(&self) -> &'static str {
        match self {
            FetchFault::Dns => "dns lookup failed",
            FetchFault::ConnectionRefused => "connection refused",
            FetchFault::Connect => "connection failed",
            FetchFault::Tls => "tls handshake failed",
            FetchFault::TooManyRedirects => "too many redirects",
            FetchFault::InvalidUrl => "invalid url",
            FetchFault::Decode => "response decoding failed",
            FetchFault::Request => "request failed",
        }
    }
}

impl fmt::Display for FetchFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// 一次抓取的结果
///
/// 每次请求恰好产生一个变体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 状态码为200，携带解码后的响应体
    Success { status: u16, body: String },
    /// 非200状态码，响应体不会被读取
    HttpError { status: u16, reason: String },
    /// 在超时时间内没有完成
    Timeout,
    /// 传输层失败
    NetworkError { fault: FetchFault },
}

impl FetchOutcome {
    /// 根据状态码构建HTTP错误结果，原因短语取状态码的标准描述
    pub fn http_error(status: u16) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        FetchOutcome::HttpError { status, reason }
    }
}
