// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据，包括：
/// - 链接条目（url_entry）：一条去除空白后的待扫描URL
/// - 抓取结果（fetch_outcome）：一次网络请求的四种结果之一
/// - 扫描结果（scan_result）：匹配、未匹配、错误三类记录及其分区
pub mod fetch_outcome;
pub mod scan_result;
pub mod url_entry;
