use clap::Parser;
use swapi_fanout::utils::logger;
use swapi_fanout::{
    AggregateEngine, Aggregator, AggregatorConfig, ChainedAggregator, CliConfig,
    ReactiveAggregator, ReqwestFetcher, SequentialAggregator, SwapiError, Variant,
};

fn build_aggregator(config: &AggregatorConfig) -> Box<dyn Aggregator> {
    let fetcher = ReqwestFetcher::new();
    match config.variant {
        Variant::Chained => Box::new(ChainedAggregator::new(fetcher, config)),
        Variant::Sequential => Box::new(SequentialAggregator::new(fetcher, config)),
        Variant::Reactive => Box::new(ReactiveAggregator::new(fetcher, config)),
    }
}

async fn run(config: AggregatorConfig) -> Result<String, SwapiError> {
    let engine = AggregateEngine::new(build_aggregator(&config));
    let info = engine.run().await?;

    let output = if config.pretty {
        serde_json::to_string_pretty(&info)?
    } else {
        serde_json::to_string(&info)?
    };
    Ok(output)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting swapi-fanout CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    match run(config).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
