// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// 链接文件读取错误类型
#[derive(Error, Debug)]
pub enum UrlSourceError {
    #[error("The input file '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format for '{}'. Only TXT and CSV files are supported.", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("CSV file must contain a 'link' header.")]
    MissingLinkColumn,

    #[error("读取链接文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析CSV失败: {0}")]
    Csv(#[from] csv::Error),
}

/// 报告写入错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("The reports directory '{}' does not exist.", .0.display())]
    MissingDirectory(PathBuf),

    #[error("写入报告失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("写入CSV失败: {0}")]
    Csv(#[from] csv::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("配置加载失败: {0}")]
    Load(#[from] config::ConfigError),

    #[error("无效配置: {0}")]
    Invalid(String),

    #[error("Invalid mode '{0}'. Use 'scan' (srap) or 'diff' (def).")]
    InvalidMode(String),

    #[error("Please provide the {0} file path using --{0}-file argument")]
    MissingDiffFile(&'static str),
}
