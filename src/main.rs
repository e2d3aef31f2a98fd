use anyhow::Context;
use clap::Parser;
use task_roadmap::utils::{logger, validation::Validate};
use task_roadmap::{
    CliConfig, ConfigProvider, GeminiClient, RoadmapRequest, RoadmapResponse, RoadmapService,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting task-roadmap CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut request = RoadmapRequest::new(cli.title.clone(), cli.description.clone());
    if let Some(time_period) = cli.time_period.clone() {
        request = request.with_time_period(time_period);
    }

    // 驗證請求欄位
    if let Err(e) = request.validate() {
        tracing::error!("❌ Request validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 配置來源：TOML 檔案優先，否則使用命令列參數
    let response = match cli.config.clone() {
        Some(path) => {
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file: {}", path))?;
            run(config, &request).await
        }
        None => run(cli, &request).await,
    };

    print_roadmap(&response);
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: C, request: &RoadmapRequest) -> RoadmapResponse {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = RoadmapService::new(GeminiClient::new(config));
    service.generate_roadmap(request).await
}

fn print_roadmap(response: &RoadmapResponse) {
    println!("{}", response.roadmap);
    println!();
    println!("📋 Steps extracted: {}", response.steps.len());
    println!("⏱  Estimated duration: {}", response.estimated_duration);
}
