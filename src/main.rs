use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use ytsortcli::{cli, config, error, types::PkceToken};

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
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the YouTube Data API
    Auth,

    /// List playlists of the authenticated user
    Playlists(PlaylistsOptions),

    /// Sort playlists remotely by artist and title
    Sort(SortOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "List playlists of the authenticated user")]
pub struct PlaylistsOptions {
    /// Filter playlists by title
    #[clap(long)]
    pub search: Option<String>,

    /// Show the items of the playlist with this ID instead
    #[clap(long)]
    pub items: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Sort playlists remotely by artist and title")]
pub struct SortOptions {
    /// Sort by title alone instead of artist, then title
    #[clap(long)]
    pub by_title: bool,

    /// Only sort the playlist with this ID
    #[clap(long)]
    pub playlist: Option<String>,
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

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::playlists(opt.search, opt.items).await,
        Command::Sort(opt) => cli::sort(opt.by_title, opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
