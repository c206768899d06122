use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use wine_quality_api::utils::{logger, monitor::ResourceMonitor, validation::Validate};
use wine_quality_api::{CliConfig, ConfigProvider, LinearRegressor, ScoringModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting wine-quality-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 解析與驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入模型，必須在服務開始接受請求前完成
    let model = match LinearRegressor::load(Path::new(config.model_path())) {
        Ok(model) => {
            tracing::info!("✅ Model artifact loaded from {}", config.model_path());
            model
        }
        Err(e) => {
            // 沒有模型的預測服務沒有降級模式，直接中止啟動
            tracing::error!(
                "❌ Model loading failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                wine_quality_api::utils::error::ErrorSeverity::Low => 0,
                wine_quality_api::utils::error::ErrorSeverity::Medium => 2,
                wine_quality_api::utils::error::ErrorSeverity::High => 1,
                wine_quality_api::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let monitor_enabled = config.monitor();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let monitor = Arc::new(ResourceMonitor::new(monitor_enabled));
    monitor.log("Startup");

    if monitor.is_enabled() {
        tokio::spawn(Arc::clone(&monitor).run_periodic(Duration::from_secs(60)));
    }

    let model: Arc<dyn ScoringModel> = Arc::new(model);

    match wine_quality_api::server::run(&config, model).await {
        Ok(()) => {
            tracing::info!("✅ Server stopped cleanly");
        }
        Err(e) => {
            tracing::error!(
                "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                wine_quality_api::utils::error::ErrorSeverity::Low => 0,
                wine_quality_api::utils::error::ErrorSeverity::Medium => 2,
                wine_quality_api::utils::error::ErrorSeverity::High => 1,
                wine_quality_api::utils::error::ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    monitor.log_final();

    Ok(())
}
