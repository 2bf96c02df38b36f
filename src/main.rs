use clap::Parser;
use greetkit::config::{CliConfig, Command};
use greetkit::utils::logger;
use greetkit::{days_from_today, normalize_phone, numbers_ticket, upcoming_birthdays, User};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greetkit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.command {
        Command::Days { date } => match days_from_today(&date) {
            Ok(days) => println!("{days}"),
            Err(e) => {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
        },
        Command::Ticket {
            min_value,
            max_value,
            quantity,
        } => {
            let numbers = numbers_ticket(min_value, max_value, quantity);
            if numbers.is_empty() {
                tracing::warn!("No numbers drawn, check the parameters");
            }
            println!("{}", serde_json::to_string(&numbers)?);
        }
        Command::Phone { numbers } => {
            for raw in &numbers {
                println!("{}", normalize_phone(raw));
            }
        }
        Command::Birthdays { users_file } => {
            let raw = std::fs::read_to_string(&users_file)?;
            let users: Vec<User> = serde_json::from_str(&raw)?;
            tracing::info!("Loaded {} user records from {}", users.len(), users_file);

            let schedule = upcoming_birthdays(&users);
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
    }

    Ok(())
}
