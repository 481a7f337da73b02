//! Flagpole CLI - exercise the support chat and Customer Account API.
//!
//! # Usage
//!
//! ```bash
//! # Ask Flaggy something
//! flagpole chat ask "my pole is stuck and won't twist"
//!
//! # Rank candidate intents for a message
//! flagpole chat top "my flag wraps in the wind" --limit 5
//!
//! # List the intent table
//! flagpole chat intents
//!
//! # Fetch recent orders (token from SHOPIFY_CUSTOMER_ACCESS_TOKEN)
//! flagpole account orders --first 5
//! ```
//!
//! # Commands
//!
//! - `chat` - Run messages through the intent matcher
//! - `account` - Call the Customer Account API with retry

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "flagpole")]
#[command(author, version, about = "Flagpole storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run messages through the Flaggy intent matcher
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Query the Shopify Customer Account API
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum ChatAction {
    /// Print the reply Flaggy would send
    Ask {
        /// Customer message
        message: String,
    },
    /// Print the top-scoring intents for a message
    Top {
        /// Customer message
        message: String,

        /// Maximum number of intents to print
        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },
    /// List every intent in the table
    Intents,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Print the signed-in customer's profile
    Profile,
    /// Print the customer's recent orders
    Orders {
        /// Number of orders to fetch
        #[arg(short, long, default_value_t = 10)]
        first: u32,
    },
    /// Print the customer's saved addresses
    Addresses {
        /// Number of addresses to fetch
        #[arg(short, long, default_value_t = 10)]
        first: u32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flagpole_storefront=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Chat { action } => match action {
            ChatAction::Ask { message } => commands::chat::ask(&message)?,
            ChatAction::Top { message, limit } => commands::chat::top(&message, limit)?,
            ChatAction::Intents => commands::chat::intents()?,
        },
        Commands::Account { action } => match action {
            AccountAction::Profile => commands::account::profile().await?,
            AccountAction::Orders { first } => commands::account::orders(first).await?,
            AccountAction::Addresses { first } => commands::account::addresses(first).await?,
        },
    }
    Ok(())
}
