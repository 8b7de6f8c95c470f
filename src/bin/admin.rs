//! CLI administration tool for tourism-directory.
//!
//! Provides commands for inspecting country sources, reading contact
//! messages, and performing database checks without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show configured countries and their row counts
//! cargo run --bin admin -- countries
//!
//! # Show content counts
//! cargo run --bin admin -- stats
//!
//! # List unread contact messages
//! cargo run --bin admin -- messages list --unread
//!
//! # Mark one message, or all of them, as read
//! cargo run --bin admin -- messages read 3f1c...
//! cargo run --bin admin -- messages read-all
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `COUNTRY_SOURCES` (optional): same format as the server

use tourism_directory::application::services::{ContactService, DestinationService};
use tourism_directory::config::DEFAULT_COUNTRY_SOURCES;
use tourism_directory::domain::entities::CountryCatalog;
use tourism_directory::domain::repositories::PlaceRepository;
use tourism_directory::infrastructure::persistence::{PgContactRepository, PgPlaceRepository};
use tourism_directory::utils::row_id::RowIdMode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tourism-directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show configured country sources
    Countries,

    /// Show content counts
    Stats,

    /// Contact form messages
    Messages {
        #[command(subcommand)]
        action: MessageAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum MessageAction {
    /// List messages, newest first
    List {
        /// Only show unread messages
        #[arg(short, long)]
        unread: bool,

        /// Maximum number of messages to show
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },

    /// Mark a message as read
    Read {
        /// Message id
        id: String,
    },

    /// Mark every unread message as read
    ReadAll {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Countries => handle_countries(&pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Messages { action } => handle_message_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Lists the configured countries with their row counts.
///
/// A country whose table cannot be read is shown as `UNAVAILABLE`, the same
/// condition under which the aggregated listing leaves it out.
async fn handle_countries(pool: &PgPool) -> Result<()> {
    println!("{}", "🌍 Country Sources".bright_blue().bold());
    println!();

    let entries =
        std::env::var("COUNTRY_SOURCES").unwrap_or_else(|_| DEFAULT_COUNTRY_SOURCES.to_string());
    let catalog = CountryCatalog::parse(&entries).context("Invalid COUNTRY_SOURCES")?;

    let repo: Arc<dyn PlaceRepository> = Arc::new(PgPlaceRepository::new(Arc::new(pool.clone())));
    let service = DestinationService::new(repo.clone(), catalog, RowIdMode::default());

    println!(
        "  {:<12} {:<20} {:<20} {:<10}",
        "Slug".bright_white().bold(),
        "Name".bright_white().bold(),
        "Table".bright_white().bold(),
        "Rows".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for source in service.countries() {
        let rows = match repo.count(source).await {
            Ok(n) => n.to_string().green(),
            Err(_) => "UNAVAILABLE".red(),
        };

        println!(
            "  {:<12} {:<20} {:<20} {}",
            source.slug.cyan(),
            source.name,
            source.quoted_table().bright_black(),
            rows
        );
    }

    println!();
    Ok(())
}

/// Displays content counts.
///
/// Shows:
/// - Total number of businesses
/// - Published and draft posts
/// - Unread contact messages
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let businesses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
        .fetch_one(pool)
        .await?;

    let published: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE published_at IS NOT NULL")
            .fetch_one(pool)
            .await?;

    let drafts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE published_at IS NULL")
        .fetch_one(pool)
        .await?;

    let unread: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE read = false")
            .fetch_one(pool)
            .await?;

    println!(
        "  Businesses:      {}",
        businesses.to_string().bright_green().bold()
    );
    println!(
        "  Published posts: {}",
        published.to_string().bright_green().bold()
    );
    println!("  Drafts:          {}", drafts.to_string().bright_black());
    println!(
        "  Unread messages: {}",
        unread.to_string().bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Dispatches contact message commands.
async fn handle_message_action(action: MessageAction, pool: &PgPool) -> Result<()> {
    let service = ContactService::new(Arc::new(PgContactRepository::new(Arc::new(
        pool.clone(),
    ))));

    match action {
        MessageAction::List { unread, limit } => {
            println!("{}", "📬 Contact Messages".bright_blue().bold());
            println!();

            let messages = service
                .list(unread, limit)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list messages: {}", e))?;

            if messages.is_empty() {
                println!("{}", "  No messages found".yellow());
                return Ok(());
            }

            for message in &messages {
                let status = if message.read {
                    "READ".bright_black()
                } else {
                    "NEW".green().bold()
                };

                println!(
                    "  {} {} {} <{}>",
                    status,
                    message
                        .created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    message.name.cyan(),
                    message.email
                );
                println!("    id: {}", message.id.bright_black());
                for line in message.message.lines() {
                    println!("    {line}");
                }
                println!();
            }

            println!(
                "  Shown: {}",
                messages.len().to_string().bright_white().bold()
            );
            println!();
        }
        MessageAction::Read { id } => {
            service
                .mark_read(&id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to mark message {}: {}", id, e))?;

            println!("{}", "✅ Message marked as read".green().bold());
        }
        MessageAction::ReadAll { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Mark every unread message as read?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let updated = service
                .mark_all_read()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to update messages: {}", e))?;

            println!(
                "{} {}",
                "✅ Messages marked as read:".green().bold(),
                updated.to_string().bright_white()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
