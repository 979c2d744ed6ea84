// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含扫描和域名差异两个用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置、配置文件和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心数据模型以及匹配扫描、分类和域名差异服务
pub mod domain;

/// 引擎模块
///
/// 实现页面抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供链接文件读取、报告写入和进度显示
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现有界并发的扫描工作池
pub mod workers;
