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

use anyhow::Context;
use clap::{CommandFactory, Parser, ValueEnum};
use linkscan::application::use_cases::domain_diff_use_case::DomainDiffUseCase;
use linkscan::application::use_cases::scan_use_case::{ScanOptions, ScanUseCase};
use linkscan::config::settings::{RunMode, Settings, SettingsOverrides};
use linkscan::engines::reqwest_engine::ReqwestEngine;
use linkscan::infrastructure::progress::ScanProgress;
use linkscan::infrastructure::reports::{
    completion_message, ensure_reports_directory, write_scan_reports,
};
use linkscan::infrastructure::url_source::read_urls;
use linkscan::utils::errors::SettingsError;
use linkscan::utils::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 命令行中的运行模式
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliMode {
    /// Scan every link for the search string
    #[value(alias = "srap")]
    Scan,
    /// List domains present in the first file but not in the second
    #[value(alias = "def")]
    Diff,
}

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "linkscan", version)]
#[command(about = "Web scraper and domain difference finder", long_about = None)]
struct Cli {
    /// Mode to run; defaults to the configured mode (scan)
    #[arg(value_enum)]
    mode: Option<CliMode>,

    /// First link file for diff mode
    #[arg(long)]
    first_file: Option<PathBuf>,

    /// Second link file for diff mode
    #[arg(long)]
    second_file: Option<PathBuf>,

    /// String to search for (case-insensitive)
    #[arg(short, long)]
    search: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Number of concurrent fetches
    #[arg(short, long)]
    concurrency: Option<u64>,

    /// Link file to scan (.txt or .csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config_file: self.config.clone(),
            mode: self.mode.map(|mode| match mode {
                CliMode::Scan => "scan".to_string(),
                CliMode::Diff => "diff".to_string(),
            }),
            search_string: self.search.clone(),
            timeout_secs: self.timeout,
            concurrency: self.concurrency,
            links_file: self.input.clone(),
            reports_directory: self.reports_dir.clone(),
            first_file: self.first_file.clone(),
            second_file: self.second_file.clone(),
        }
    }
}

/// 主函数
///
/// 加载配置后按运行模式分派；配置错误在任何网络请求之前终止进程
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    let settings = match Settings::new(&cli.overrides()) {
        Ok(settings) => settings,
        Err(e @ SettingsError::InvalidMode(_)) => {
            eprintln!("{}", Cli::command().render_usage());
            return Err(e.into());
        }
        Err(e) => return Err(e).context("Failed to load configuration"),
    };

    match settings.run_mode()? {
        RunMode::Scan => run_scan(&settings, cli.no_progress).await,
        RunMode::Diff => run_diff(&settings),
    }
}

async fn run_scan(settings: &Settings, no_progress: bool) -> anyhow::Result<()> {
    ensure_reports_directory(&settings.reports.directory)?;
    let urls = read_urls(&settings.input.links_file)?;
    info!("Loaded {} links from {}", urls.len(), settings.input.links_file.display());

    let fetcher = Arc::new(ReqwestEngine::new(&settings.scan.user_agent)?);
    let progress = if no_progress {
        ScanProgress::hidden()
    } else {
        ScanProgress::new(urls.len() as u64)
    };

    let use_case = ScanUseCase::new(fetcher, ScanOptions::from(&settings.scan));
    let partition = use_case.execute(urls, progress).await;

    let summary = write_scan_reports(&settings.reports, &partition);
    println!("{}", completion_message(&summary, &partition));
    Ok(())
}

fn run_diff(settings: &Settings) -> anyhow::Result<()> {
    let (first, second) = settings.diff_files()?;
    let output = settings.report_path(&settings.reports.domain_difference_file);

    let outcome = DomainDiffUseCase::new(output).execute(first, second)?;
    match outcome.report {
        None => println!("No difference found between domain lists."),
        Some(Ok(path)) => println!("Difference written to {}", path.display()),
        Some(Err(e)) => println!("Error writing difference to file: {}", e),
    }
    Ok(())
}
