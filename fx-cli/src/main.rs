//! FX CLI
//!
//! Command-line interface for the currency converter. `health` and `history`
//! talk to a running server; `convert` and `currencies` call the rate
//! provider directly.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use exchange_rates::{DEFAULT_API_URL, ProviderConfig, ProviderKind, build_provider};
use fx_client::ConverterClient;
use fx_hex::ConverterService;
use fx_types::{ConversionRequest, ConversionResult};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Currency converter CLI", long_about = None)]
struct Cli {
    /// Base URL of the converter server
    #[arg(long, env = "FX_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ProviderArgs {
    /// Rate provider (exchangerate-api, fixed)
    #[arg(long, env = "RATE_PROVIDER", default_value = "exchangerate-api")]
    provider: ProviderKind,

    /// ExchangeRate-API key
    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// ExchangeRate-API base URL
    #[arg(long, env = "EXCHANGE_RATE_API_URL", default_value = DEFAULT_API_URL)]
    rates_url: String,
}

impl ProviderArgs {
    fn service(self) -> ConverterService<exchange_rates::Provider> {
        let config = ProviderConfig::new(self.api_key).with_api_url(self.rates_url);
        ConverterService::new(build_provider(self.provider, config))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,
    /// Print the rate data the chart uses for a pair
    History {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Convert an amount using the rate provider directly
    Convert {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
        #[command(flatten)]
        provider: ProviderArgs,
    },
    /// List the selectable currency codes
    Currencies {
        #[command(flatten)]
        provider: ProviderArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConverterClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Server is healthy");
            } else {
                println!("✗ Server is not healthy");
                std::process::exit(1);
            }
        }

        Commands::History { from, to } => {
            let series = client.history(from, to).await?;
            println!("{}", serde_json::to_string_pretty(&series)?);
        }

        Commands::Convert {
            from,
            to,
            amount,
            provider,
        } => {
            let service = provider.service();
            let request = ConversionRequest::new(from.to_uppercase(), to.to_uppercase(), amount);
            match service.convert(&request).await {
                ConversionResult::Converted { display_text } => println!("{}", display_text),
                ConversionResult::Failed { message } => {
                    eprintln!("✗ {}", message);
                    std::process::exit(1);
                }
            }
        }

        Commands::Currencies { provider } => {
            let catalog = provider.service().list_currencies().await;
            if catalog.is_empty() {
                eprintln!("✗ No currencies available");
                std::process::exit(1);
            }
            for code in catalog {
                println!("{}", code);
            }
        }
    }

    Ok(())
}
