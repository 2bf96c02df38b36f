use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "greetkit")]
#[command(about = "Assistant helpers: day distance, lottery tickets, phone normalization, birthday schedule")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Days from the given date to today (strict YYYY-MM-DD)
    Days { date: String },

    /// Draw unique lottery numbers from an inclusive range
    Ticket {
        min_value: i32,
        max_value: i32,
        quantity: i32,
    },

    /// Normalize raw phone numbers to +38-prefixed form
    Phone { numbers: Vec<String> },

    /// Upcoming congratulations from a JSON file of {name, birthday} records
    Birthdays { users_file: String },
}
