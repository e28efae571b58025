// Entrypoint for the CLI application.
// - Keeps `main` small: parse the command, ask for the answers, build the
//   config and image client, then hand everything to the UI flow.
// - Returns `anyhow::Result` so every failure is reported once here and the
//   process exits non-zero.

use blog_automator::{
    api::ImageClient,
    config::Config,
    ui::{new_post, prompt_answers},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blog-automator", version)]
#[command(about = "Scaffold new blog posts with a stock cover image", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Creates a new post using user input
    New,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New => {
            let answers = prompt_answers()?;
            let config = Config::from_home()?;
            // The provider URL can be overridden with `IMAGE_PROVIDER_URL`.
            // See `api::ImageClient::from_env`.
            let client = ImageClient::from_env()?;
            new_post(&config, &client, answers)?;
        }
    }
    Ok(())
}
