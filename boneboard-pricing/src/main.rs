use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::Level;

use boneboard_common::funding::{calculate_funding_cost, format_ada_amount, pricing_breakdown};
use boneboard_common::telemetry::init_tracing;
use boneboard_pricing::{ApiConfig, Currency, PlatformPricing, PlatformServiceBuilder};

#[derive(Parser, Debug)]
#[command(name = "boneboard-pricing", version, about = "Query the BoneBoard platform pricing")]
struct Cli {
    /// Overrides `BONEBOARD_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, env = "BONEBOARD_LOG_LEVEL", default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current listing fees, falling back to the defaults.
    Pricing,
    /// Print the full platform settings. Fails if the API can't be reached.
    Settings,
    /// Update the listing fees as an admin wallet.
    Update {
        #[arg(long)]
        wallet: String,
        #[arg(long)]
        project_fee: f64,
        #[arg(long)]
        job_fee: f64,
        #[arg(long, default_value = "BONE")]
        project_currency: Currency,
        #[arg(long, default_value = "ADA")]
        job_currency: Currency,
    },
    /// Print the funding price table.
    FundingBreakdown,
    /// Print the cost of a funding campaign.
    FundingCost { months: u32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(Some(cli.log_level))?;

    let mut api_config = ApiConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        api_config.base_url = base_url;
    }

    match cli.command {
        Command::Pricing => {
            let service = PlatformServiceBuilder::new().with_http(api_config).await?;
            let pricing = service.get_pricing().await;
            println!("{}", serde_json::to_string_pretty(&pricing)?);
        }
        Command::Settings => {
            let service = PlatformServiceBuilder::new().with_http(api_config).await?;
            let settings = service.fetch_settings().await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Update {
            wallet,
            project_fee,
            job_fee,
            project_currency,
            job_currency,
        } => {
            let service = PlatformServiceBuilder::new().with_http(api_config).await?;
            let pricing = PlatformPricing {
                project_listing_fee: project_fee,
                job_listing_fee: job_fee,
                project_listing_currency: project_currency,
                job_listing_currency: job_currency,
            };
            let settings = service.update_pricing(&wallet, pricing).await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::FundingBreakdown => {
            for option in pricing_breakdown() {
                println!("{:>2} month(s): {}", option.months, option.cost_formatted);
            }
        }
        Command::FundingCost { months } => {
            let cost = calculate_funding_cost(months)?;
            println!("{}", format_ada_amount(cost));
        }
    }

    Ok(())
}
