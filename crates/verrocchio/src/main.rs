use clap::Parser;
use tracing::info;
use verrocchio::{Cli, Commands, VerrocchioConfig};
use verrocchio_core::{CodePayload, EvalCommand};
use verrocchio_discord::VerrocchioBot;
use verrocchio_harness::{EvalHarness, HostIdentity};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = if config.exists() {
                VerrocchioConfig::from_file(&config)?
            } else {
                info!(path = %config.display(), "no config file, using defaults");
                VerrocchioConfig::default()
            };

            let token = config.token()?;
            let mut bot = VerrocchioBot::new(
                token,
                config.prefix.clone(),
                config.command.clone(),
                config.limits(),
            )
            .await?;
            bot.start().await?;
        }

        Commands::Eval { snippet } => {
            let harness = EvalHarness::new(HostIdentity::local());
            let command = EvalCommand::local(&snippet);
            let payload = CodePayload::from_snippet(&snippet);
            let outcome = harness.evaluate(command, payload).await?;
            let report = harness.render(&outcome);
            println!("{}\n\n{}", report.title, report.description);
        }
    }

    Ok(())
}
