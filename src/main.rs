//! tokencost - Price LLM API calls from token usage

use chrono::Utc;
use clap::Parser;
use tokencost::{
    Provider, Result,
    cli::{CallArgs, Cli, Command},
    dispatcher::{self, models_of},
    output::get_formatter,
    parse_call_date,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn call_date(args: &CallArgs) -> Result<chrono::DateTime<Utc>> {
    match args.date.as_deref() {
        Some(date) => parse_call_date(date),
        None => Ok(Utc::now()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The --verbose flag overrides RUST_LOG.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("tokencost=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tokencost=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let formatter = get_formatter(cli.json);

    match cli.command {
        Command::Price(args) => {
            let at = call_date(&args)?;
            info!("Pricing {} at {}", args.model, at);
            let quote = dispatcher::quote(&args.model, at, args.usage())?;
            println!("{}", formatter.format_quote(&quote)?);
        }
        Command::Spec(args) => {
            let at = call_date(&args)?;
            info!("Resolving {} at {}", args.model, at);
            let resolution = dispatcher::resolve(&args.model, at, &args.usage())?;
            println!("{}", formatter.format_spec(&resolution)?);
        }
        Command::Models { provider } => {
            let providers = match provider {
                Some(provider) => vec![provider],
                None => Provider::ALL.to_vec(),
            };
            let models: Vec<(Provider, &'static str)> = providers
                .into_iter()
                .flat_map(|provider| {
                    models_of(provider)
                        .into_iter()
                        .map(move |name| (provider, name))
                })
                .collect();
            info!("Listing {} models", models.len());
            println!("{}", formatter.format_models(&models)?);
        }
    }

    Ok(())
}
