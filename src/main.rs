use clap::Parser;

use release_reminder::{
    Result,
    cli::{Args, Command},
    command,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_reminder")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    match &cli_args.command {
        Command::Unchecked => command::unchecked::execute(&cli_args).await,
        Command::Remind {
            channel,
            slack_token,
            dry_run,
        } => {
            command::remind::execute(&cli_args, channel, slack_token, *dry_run)
                .await
        }
        Command::AuthenticatedUrl { url } => {
            command::authenticated_url::execute(&cli_args, url.as_deref()).await
        }
    }
}
