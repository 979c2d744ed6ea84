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

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::utils::errors::SettingsError;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// 扫描链接列表
    Scan,
    /// 比较两个链接列表的域名
    Diff,
}

impl FromStr for RunMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" | "srap" => Ok(RunMode::Scan),
            "diff" | "def" => Ok(RunMode::Diff),
            _ => Err(SettingsError::InvalidMode(s.to_string())),
        }
    }
}

/// 应用程序配置设置
///
/// 在进程启动时构建一次，之后以引用形式传给各个组件
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 运行模式 (scan/srap, diff/def)
    pub mode: String,
    /// 扫描配置
    pub scan: ScanSettings,
    /// 输入配置
    pub input: InputSettings,
    /// 报告配置
    pub reports: ReportSettings,
    /// 域名差异配置
    pub diff: DiffSettings,
}

/// 扫描配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// 要查找的字符串（大小写不敏感）
    pub search_string: String,
    /// 单个请求超时时间（秒）
    pub timeout_secs: u64,
    /// 同时进行的抓取数量
    pub concurrency: usize,
    /// 请求使用的User-Agent
    pub user_agent: String,
    /// 是否按输入顺序输出报告
    pub preserve_input_order: bool,
}

/// 输入配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    /// 链接文件路径 (.txt 或 .csv)
    pub links_file: PathBuf,
}

/// 报告配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// 报告目录，必须已存在
    pub directory: PathBuf,
    pub success_file: String,
    pub error_file: String,
    pub non_matching_file: String,
    pub domain_difference_file: String,
}

impl ReportSettings {
    /// 使用默认文件名的报告配置
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            success_file: "success_report.csv".to_string(),
            error_file: "error_report.csv".to_string(),
            non_matching_file: "non_matching_report.csv".to_string(),
            domain_difference_file: "domain_difference.txt".to_string(),
        }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }
}

/// 域名差异配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiffSettings {
    pub first_file: Option<PathBuf>,
    pub second_file: Option<PathBuf>,
}

/// 命令行覆盖项
///
/// 为 `None` 的字段不会覆盖配置文件和环境变量中的值
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_file: Option<PathBuf>,
    pub mode: Option<String>,
    pub search_string: Option<String>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<u64>,
    pub links_file: Option<PathBuf>,
    pub reports_directory: Option<PathBuf>,
    pub first_file: Option<PathBuf>,
    pub second_file: Option<PathBuf>,
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}

/// 配置来源
///
/// 配置文件目录、环境名和环境变量前缀
#[derive(Debug, Clone)]
pub struct ConfigSources {
    pub config_dir: PathBuf,
    pub environment: String,
    pub env_prefix: String,
}

impl ConfigSources {
    /// 进程默认的配置来源：`config/` 目录、`LINKSCAN_ENV` 和 `LINKSCAN__` 前缀
    pub fn from_process() -> Self {
        Self {
            config_dir: PathBuf::from("config"),
            environment: std::env::var("LINKSCAN_ENV").unwrap_or_else(|_| "default".to_string()),
            env_prefix: "LINKSCAN".to_string(),
        }
    }

    fn file(&self, name: &str) -> String {
        self.config_dir.join(name).to_string_lossy().into_owned()
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并内置默认值、`config/default.toml`、`config/{LINKSCAN_ENV}.toml`、
    /// 以 `LINKSCAN__` 为前缀的环境变量和命令行覆盖项
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并校验的配置
    /// * `Err(SettingsError)` - 配置加载或校验失败
    pub fn new(overrides: &SettingsOverrides) -> Result<Self, SettingsError> {
        Self::load(&ConfigSources::from_process(), overrides)
    }

    /// 从指定来源加载配置
    pub fn load(sources: &ConfigSources, overrides: &SettingsOverrides) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("mode", "scan")?
            // Default scan settings
            .set_default("scan.search_string", "stringToSearch")?
            .set_default("scan.timeout_secs", 10)?
            .set_default("scan.concurrency", 10)?
            .set_default("scan.user_agent", concat!("linkscan/", env!("CARGO_PKG_VERSION")))?
            .set_default("scan.preserve_input_order", true)?
            // Default input and report locations
            .set_default("input.links_file", "sources/list_links.txt")?
            .set_default("reports.directory", "reports")?
            .set_default("reports.success_file", "success_report.csv")?
            .set_default("reports.error_file", "error_report.csv")?
            .set_default("reports.non_matching_file", "non_matching_report.csv")?
            .set_default("reports.domain_difference_file", "domain_difference.txt")?
            .add_source(File::with_name(&sources.file("default")).required(false))
            .add_source(File::with_name(&sources.file(&sources.environment)).required(false));

        if let Some(path) = &overrides.config_file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        let builder = builder
            .add_source(Environment::with_prefix(&sources.env_prefix).separator("__"))
            .set_override_option("mode", overrides.mode.clone())?
            .set_override_option("scan.search_string", overrides.search_string.clone())?
            .set_override_option("scan.timeout_secs", overrides.timeout_secs)?
            .set_override_option("scan.concurrency", overrides.concurrency)?
            .set_override_option("input.links_file", path_value(&overrides.links_file))?
            .set_override_option("reports.directory", path_value(&overrides.reports_directory))?
            .set_override_option("diff.first_file", path_value(&overrides.first_file))?
            .set_override_option("diff.second_file", path_value(&overrides.second_file))?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.run_mode()?;
        if self.scan.search_string.is_empty() {
            return Err(SettingsError::Invalid(
                "scan.search_string must not be empty".to_string(),
            ));
        }
        if self.scan.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "scan.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.scan.concurrency == 0 {
            return Err(SettingsError::Invalid(
                "scan.concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn run_mode(&self) -> Result<RunMode, SettingsError> {
        self.mode.parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.scan.timeout_secs)
    }

    /// 拼接报告目录下的文件路径
    pub fn report_path(&self, file_name: &str) -> PathBuf {
        self.reports.path(file_name)
    }

    /// 域名差异模式所需的两个文件
    pub fn diff_files(&self) -> Result<(&Path, &Path), SettingsError> {
        let first = self
            .diff
            .first_file
            .as_deref()
            .ok_or(SettingsError::MissingDiffFile("first"))?;
        let second = self
            .diff
            .second_file
            .as_deref()
            .ok_or(SettingsError::MissingDiffFile("second"))?;
        Ok((first, second))
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
