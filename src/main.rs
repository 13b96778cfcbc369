use clap::Parser;
use professor_stats::api::shutdown_signal;
use professor_stats::utils::error::{ErrorSeverity, StatsError};
use professor_stats::utils::{logger, validation::Validate};
use professor_stats::{ApiServer, CliConfig, Database, ProfessorService};
use std::sync::Arc;

fn exit_code(e: &StatsError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: StatsError) -> ! {
    tracing::error!(
        "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.logging.verbose, config.logging.json);
    tracing::info!("🚀 Starting professor-stats server");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let database = match Database::connect(&config.database.uri).await {
        Ok(db) => Arc::new(db),
        Err(e) => fail(e),
    };

    let service = Arc::new(ProfessorService::new(Arc::clone(&database)));
    match service.count_professors().await {
        Ok(count) => tracing::info!("📦 {} professors available", count),
        Err(e) => tracing::warn!("⚠️ Could not count professors at startup: {}", e),
    }

    let server = ApiServer::new(service, config);
    let listener = match server.bind().await {
        Ok(listener) => listener,
        Err(e) => fail(e),
    };

    let result = server.serve(listener, shutdown_signal()).await;
    database.disconnect().await;

    if let Err(e) = result {
        fail(e);
    }

    tracing::info!("👋 Shut down cleanly");
    Ok(())
}
