use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotrec::cli;

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Defaults to `serve` when omitted
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the recommendation API
    Serve(ServeOptions),

    /// Fetch recommendations once and print them
    Recommend(RecommendOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ServeOptions {
    /// Path to config.yaml (defaults to the executable's directory)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Address to bind, e.g. 127.0.0.1:5000 (overrides the config file)
    #[clap(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Path to config.yaml (defaults to the executable's directory)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Seed artist id, URI or link; can be repeated
    #[clap(long = "seed-artist", action = ArgAction::Append, required = true)]
    pub seed_artists: Vec<String>,

    /// Seed track id, URI or link; can be repeated
    #[clap(long = "seed-track", action = ArgAction::Append)]
    pub seed_tracks: Vec<String>,

    /// Number of tracks to request
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeOptions::default())) {
        Command::Serve(opt) => cli::serve(opt.config, opt.address).await,
        Command::Recommend(opt) => {
            cli::recommend(opt.config, opt.seed_artists, opt.seed_tracks, opt.limit).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
