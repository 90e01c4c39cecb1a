use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "octogram")]
#[command(author, version, about = "Telegram inline bot that summarizes GitHub repositories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Print a repository summary to stdout without Telegram
    Info {
        /// GitHub repository URL
        url: String,

        /// Emit the raw summary as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
