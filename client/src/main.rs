use std::{
    io::{self, Write},
    time::Duration,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use reading_client::{ApiClient, Command, ParseCommandError, command::HELP, session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reading-cli", version, about = "Client for the reading progress service")]
struct Cli {
    /// Base URL of the reading progress service
    #[arg(long, env = "READING_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Mode {
    /// Add, list, update, get and remove a sample book, stopping on the first error
    Demo {
        #[arg(long, default_value_t = 1)]
        user_id: i64,
    },
    /// Read commands from stdin until `exit`
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url, Duration::from_millis(cli.timeout_ms))
        .context("failed to build HTTP client")?;

    match cli.mode.unwrap_or(Mode::Demo { user_id: 1 }) {
        Mode::Demo { user_id } => session::demo(&client, user_id, &mut io::stdout()).await,
        Mode::Interactive => interactive(&client).await,
    }
}

async fn interactive(client: &ApiClient) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Unknown(_)) => {
                println!("{HELP}");
                continue;
            }
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match session::execute(client, command).await {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => break,
            Err(e) => println!("error: {e}"),
        }
    }
    Ok(())
}
