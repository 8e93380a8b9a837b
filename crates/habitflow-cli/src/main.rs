use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitflow", version, about = "HabitFlow -- build small habits, achieve big goals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the habit dashboard
    Dashboard,
    /// Create a habit from a free-text description
    Add {
        /// Habit description, e.g. "Drink water every day"
        text: String,
    },
    /// Mark a habit as completed
    Done {
        /// Habit name
        name: String,
    },
    /// Suggest habits for focus areas
    Suggest {
        #[command(subcommand)]
        action: commands::suggest::SuggestAction,
    },
    /// Check a reminder time for a habit
    Remind {
        /// Habit name
        name: String,
        /// Reminder time of day, HH:MM
        time: String,
    },
    /// Ask the assistant about habits
    Chat {
        /// Prompt text
        prompt: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Dashboard => commands::dashboard::run(),
        Commands::Add { text } => commands::add::run(&text),
        Commands::Done { name } => commands::done::run(&name),
        Commands::Suggest { action } => commands::suggest::run(action),
        Commands::Remind { name, time } => commands::remind::run(&name, &time),
        Commands::Chat { prompt } => commands::chat::run(&prompt),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
