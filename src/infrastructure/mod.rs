// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 负责与文件系统和终端打交道：
/// - 链接来源（url_source）：读取 .txt / .csv 链接文件
/// - 报告（reports）：写入三份CSV扫描报告和域名差异文本
/// - 进度（progress）：终端进度条
pub mod progress;
pub mod reports;
pub mod url_source;
