pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::{ClassifyError, Result};
use crate::utils::validation::{validate_optional_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "search-url-check")]
#[command(about = "Check whether URLs are Baidu search result URLs")]
pub struct CliConfig {
    /// URLs to check; when empty, URLs are read line by line from --input
    pub urls: Vec<String>,

    /// File with one URL per line, '-' for stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text, json or csv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only list matching URLs (summary still counts everything)
    #[arg(long)]
    pub only_matches: bool,

    /// Classify blank lines instead of skipping them
    #[arg(long)]
    pub keep_blank: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_log: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn into_run_config(self, file: Option<TomlConfig>) -> Result<RunConfig> {
        let mut run = match file {
            Some(file) => RunConfig::from_toml(file)?,
            None => RunConfig::default(),
        };

        run.urls = self.urls;
        if self.input.is_some() {
            run.input_path = self.input;
        }
        if self.output.is_some() {
            run.output_path = self.output;
        }
        if let Some(format) = self.format {
            run.format = format.parse()?;
        }
        run.only_matches |= self.only_matches;
        run.keep_blank |= self.keep_blank;
        run.verbose = self.verbose;
        run.json_log |= self.json_log;
        Ok(run)
    }
}

/// 合併後的執行設定
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub urls: Vec<String>,
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub format: OutputFormat,
    pub only_matches: bool,
    pub keep_blank: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub json_log: bool,
}

impl RunConfig {
    pub fn from_toml(config: TomlConfig) -> Result<Self> {
        let format = config.output_format()?.unwrap_or_default();
        Ok(Self {
            urls: Vec::new(),
            input_path: config.input.path,
            output_path: config.output.path,
            format,
            only_matches: config.output.only_matches.unwrap_or(false),
            keep_blank: config.input.keep_blank.unwrap_or(false),
            verbose: false,
            log_level: config.logging.level,
            json_log: config.logging.json.unwrap_or(false),
        })
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("input.path", self.input_path.as_deref())?;
        validate_optional_path("output.path", self.output_path.as_deref())?;

        if self.urls.is_empty() && self.input_path.is_none() {
            return Err(ClassifyError::MissingInputError);
        }

        // 報告不能覆蓋正在讀取的清單
        if let (Some(input), Some(output)) = (self.input_path(), self.output_path()) {
            if input == output && input != "-" {
                return Err(ClassifyError::ConfigError {
                    field: "output.path".to_string(),
                    message: format!("'{}' is also the input file", output),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn urls(&self) -> &[String] {
        &self.urls
    }

    fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn only_matches(&self) -> bool {
        self.only_matches
    }

    fn keep_blank(&self) -> bool {
        self.keep_blank
    }
}
