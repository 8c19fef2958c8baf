//! eduquest CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "eduquest", version, about = "Educational quiz games in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game interactively, level by level
    Play {
        /// Directory of game content files
        #[arg(long, default_value = "./games")]
        content: PathBuf,

        /// Game id to play (see `eduquest games`)
        #[arg(long)]
        game: String,

        /// Level to start at, 1-based (default: the highest unlocked level)
        #[arg(long)]
        level: Option<u32>,

        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Submit a single answer without the interactive loop
    Answer {
        /// Directory of game content files
        #[arg(long, default_value = "./games")]
        content: PathBuf,

        /// Game id
        #[arg(long)]
        game: String,

        /// Level number, 1-based
        #[arg(long)]
        level: u32,

        /// Chosen answer, 1-based
        #[arg(long)]
        choice: u32,

        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// List games with unlock progress and scores
    Games {
        /// Directory of game content files
        #[arg(long, default_value = "./games")]
        content: PathBuf,

        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Show the full progress panel: scores, badges, and player
    Summary {
        /// Directory of game content files
        #[arg(long, default_value = "./games")]
        content: PathBuf,

        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Show, set, or clear the player profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,

        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Lint game content files
    Validate {
        /// Content directory or single game file
        #[arg(long, default_value = "./games")]
        content: PathBuf,
    },

    /// Create the starter game content in ./games
    Init,

    /// Clear all progress, scores, badges, and the profile
    Reset {
        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Confirm that all data should be deleted
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Create or update the profile
    Set {
        /// Player name (required, must not be empty)
        #[arg(long)]
        name: String,

        /// School or class
        #[arg(long)]
        school: Option<String>,

        /// Player category (e.g. "student", "teacher")
        #[arg(long = "type")]
        player_type: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the stored profile
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eduquest=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            content,
            game,
            level,
            data_dir,
        } => commands::play::execute(content, game, level, data_dir),
        Commands::Answer {
            content,
            game,
            level,
            choice,
            data_dir,
        } => commands::answer::execute(content, game, level, choice, data_dir),
        Commands::Games { content, data_dir } => commands::games::execute(content, data_dir),
        Commands::Summary { content, data_dir } => commands::summary::execute(content, data_dir),
        Commands::Profile { action, data_dir } => match action {
            ProfileAction::Show => commands::profile::show(data_dir),
            ProfileAction::Set {
                name,
                school,
                player_type,
                email,
            } => commands::profile::set(name, school, player_type, email, data_dir),
            ProfileAction::Clear => commands::profile::clear(data_dir),
        },
        Commands::Validate { content } => commands::validate::execute(content),
        Commands::Init => commands::init::execute(),
        Commands::Reset { data_dir, yes } => commands::reset::execute(data_dir, yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
