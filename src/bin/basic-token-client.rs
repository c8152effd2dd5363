use anyhow::{anyhow, Result};
use clap::Parser;
use basic_token_client::client::TokenClient;
use basic_token_client::config::endpoint::{EndpointConfig, ServiceConfig};
use basic_token_client::config::proc_loader::finalize_config;
use basic_token_client::config::settings::{LogFormat, LoggingConfig, SettingsConfig};
use basic_token_client::observability::metrics::get_metrics;
use basic_token_client::utils::config_loader;
use basic_token_client::utils::logging;
use basic_token_client::utils::logging::LogLevel;
use tracing::info;

const PROBE_HINTS: [&str; 3] = [
    "Is the API URL correct?",
    "Is the server online?",
    "Does the network/firewall allow the connection?",
];

const TOKEN_HINTS: [&str; 4] = [
    "The token endpoint does not exist",
    "Wrong credentials",
    "This machine's IP is not allowed by the server",
    "API misconfiguration on the server side",
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "basic-token-client.yaml")]
    config: String,
    /// when set, endpoint flags are used instead of the config file
    #[arg(long, env = "BASE_URL")]
    base_url: Option<String>,
    #[arg(long, env = "API_USERNAME")]
    username: Option<String>,
    #[arg(long, env = "API_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// print Prometheus metrics after the run
    #[arg(long)]
    print_metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config (file or flags)
    // -------------------------------

    let args = Args::parse();
    let service_config = match &args.base_url {
        Some(base_url) => config_from_args(base_url, &args)?,
        None => config_loader::run(&args.config).await?,
    };
    logging::run(&service_config, args.log_level.to_owned()).await?;

    // -------------------------------
    // 2. Create token client
    // -------------------------------

    let client = TokenClient::from_config(&service_config)?;
    info!("Client starting...");

    // -------------------------------
    // 3. Probe, then fetch token
    // -------------------------------

    println!("=== Connection test ===");
    if client.probe().await {
        println!("✅ Connection to the API established");

        println!("\n=== Token test ===");
        match client.get_token().await {
            Ok(token) => println!("✅ Token obtained: {}", token),
            Err(e) => {
                println!("❌ Failure: {}", e);
                print_hints("\nPossible causes:", &TOKEN_HINTS);
            }
        }
    } else {
        println!("❌ Could not connect to the API");
        print_hints("Check:", &PROBE_HINTS);
    }

    // -------------------------------
    // 4. Metrics
    // -------------------------------

    if args.print_metrics {
        println!("\n{}", get_metrics().await.render_text()?);
    }

    Ok(())
}

fn config_from_args(base_url: &str, args: &Args) -> Result<ServiceConfig> {
    let username = args
        .username
        .to_owned()
        .ok_or_else(|| anyhow!("--username (API_USERNAME) is required with --base-url"))?;
    let password = args
        .password
        .to_owned()
        .ok_or_else(|| anyhow!("--password (API_PASSWORD) is required with --base-url"))?;

    finalize_config(ServiceConfig {
        settings: SettingsConfig {
            logging: Some(LoggingConfig::new("info".to_owned(), LogFormat::from_env())),
            ..Default::default()
        },
        endpoint: EndpointConfig::new(base_url.to_owned(), username, password),
    })
}

fn print_hints(title: &str, hints: &[&str]) {
    println!("{}", title);
    for hint in hints {
        println!("- {}", hint);
    }
}
