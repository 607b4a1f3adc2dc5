use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use trackrelay::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the Telegram bot
    Bot(BotOptions),

    /// Run the HTTP relay in front of Spotify
    Relay(RelayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BotOptions {
    /// Search through a relay service at this base URL instead of Spotify
    #[clap(long)]
    pub relay_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RelayOptions {
    /// Address to listen on, e.g. 127.0.0.1:7089
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Bot(opt) => cli::bot(opt.relay_url).await,
        Command::Relay(opt) => cli::relay(opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
