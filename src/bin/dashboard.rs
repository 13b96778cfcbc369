use clap::Parser;
use professor_stats::dashboard::{render_dashboard, DashboardClient};
use professor_stats::utils::logger;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Render professor statistics from a running server")]
struct Args {
    /// Base URL of the professor-stats server
    #[arg(long, env = "API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Extra attempts when loading fails
    #[arg(long, default_value = "0")]
    retries: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value = "2")]
    retry_delay: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let client = DashboardClient::new(&args.api_url)?;
    match client
        .load_with_retry(args.retries, Duration::from_secs(args.retry_delay))
        .await
    {
        Ok(data) => {
            print!("{}", render_dashboard(&data));
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Dashboard load failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!(
                "💡 {} (use --retries to try again automatically)",
                e.recovery_suggestion()
            );
            std::process::exit(2);
        }
    }
}
