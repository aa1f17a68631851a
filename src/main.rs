use clap::Parser;
use search_url_check::utils::{logger, validation::Validate};
use search_url_check::{BaiduSearchClassifier, CheckEngine, CliConfig, ClassifyError, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（可選）
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if let Some(Err(e)) = file_config.as_ref().map(Validate::validate) {
        fail(e);
    }

    let config = match cli.into_run_config(file_config) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    // 初始化日誌
    if config.json_log {
        logger::init_json_logger(config.verbose, config.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    }

    if config.verbose {
        tracing::debug!("Run config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    let engine = CheckEngine::new(BaiduSearchClassifier::new());
    match engine.run(&config) {
        Ok(report) => {
            tracing::info!(
                "✅ Done: {} of {} URLs are Baidu search URLs",
                report.summary.matched,
                report.summary.total
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(e: ClassifyError) -> ! {
    tracing::error!("❌ URL check failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
