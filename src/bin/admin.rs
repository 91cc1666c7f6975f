//! CLI administration tool for adreset.
//!
//! Inspects configuration, manages secret questions and checks the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the effective configuration for an environment
//! cargo run --bin admin -- config show --env development
//!
//! # Add a secret question
//! cargo run --bin admin -- question add "What was the name of your first pet?"
//!
//! # List secret questions
//! cargo run --bin admin -- question list
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```

use adreset::application::services::QuestionService;
use adreset::config::{Config, Environment, mask_connection_string};
use adreset::domain::page::{MAX_PER_PAGE, PageRequest};
use adreset::infrastructure::persistence::{self, SqliteQuestionRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing adreset.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deployment environment (overrides ADRESET_ENV)
    #[arg(short, long, global = true)]
    env: Option<Environment>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage secret questions
    Question {
        #[command(subcommand)]
        action: QuestionAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration and whether it validates
    Show,
}

/// Secret question subcommands.
#[derive(Subcommand)]
enum QuestionAction {
    /// Add a secret question
    Add {
        /// Question text
        question: String,

        /// Create the question disabled
        #[arg(long)]
        disabled: bool,
    },

    /// List all secret questions
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.env {
        Some(environment) => Config::from_env_for(environment)?,
        None => Config::from_env()?,
    };

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => show_config(&config),
        },
        Commands::Question { action } => {
            let pool = open_pool(&config).await?;
            handle_question_action(action, pool).await?;
        }
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

async fn open_pool(config: &Config) -> Result<SqlitePool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    persistence::connect(database_url, config.db_max_connections).await
}

/// Prints the configuration with secrets hidden.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();

    let database = match config.database_url.as_deref() {
        Some(url) if config.show_db_uri => url.to_string(),
        Some(url) => mask_connection_string(url),
        None => "not configured".to_string(),
    };

    let rows = [
        ("Environment", config.environment.to_string()),
        ("Listen", config.listen_addr()),
        ("Debug", config.debug.to_string()),
        ("Database", database),
        ("CORS origin", config.cors_url.clone()),
        (
            "AD domain",
            config.ad_domain.clone().unwrap_or_else(|| "-".to_string()),
        ),
        (
            "AD LDAP URI",
            config.ad_ldap_uri.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("AD NTLM", config.ad_use_ntlm.to_string()),
        ("Log level", config.log_level.clone()),
        ("Log format", config.log_format.clone()),
    ];

    for (key, value) in rows {
        println!("  {:<14} {}", key.bright_white(), value.cyan());
    }

    println!();
    match config.validate() {
        Ok(()) => println!("{}", "✅ Configuration is valid".green().bold()),
        Err(e) => println!("{} {}", "❌ Invalid configuration:".red().bold(), e),
    }
}

/// Dispatches secret question commands.
async fn handle_question_action(action: QuestionAction, pool: SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteQuestionRepository::new(Arc::new(pool)));
    let service = QuestionService::new(repo);

    match action {
        QuestionAction::Add { question, disabled } => {
            let created = service
                .create_question(question, !disabled)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create question: {}", e))?;

            println!(
                "{} #{} {}",
                "✅ Question created:".green().bold(),
                created.id,
                created.question.cyan()
            );
        }
        QuestionAction::List => list_questions(&service).await?,
    }

    Ok(())
}

/// Lists every question, walking the pages until the last one.
async fn list_questions(service: &QuestionService<SqliteQuestionRepository>) -> Result<()> {
    println!("{}", "📋 Secret Questions".bright_blue().bold());
    println!();

    let mut request = PageRequest::new(1, MAX_PER_PAGE)
        .map_err(|e| anyhow::anyhow!("Invalid page request: {}", e))?;
    let mut total = 0;

    loop {
        let page = service
            .list_questions(None, request)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list questions: {}", e))?;

        if page.total == 0 {
            println!("{}", "  No questions found".yellow());
            return Ok(());
        }

        for question in &page.items {
            let status = if question.enabled {
                "ENABLED".green()
            } else {
                "DISABLED".red()
            };

            println!(
                "  {:<4} {:<60} {}",
                question.id.to_string().bright_black(),
                question.question.cyan(),
                status
            );
        }

        total = page.total;
        match page.next_num() {
            Some(next) => request.page = next,
            None => break,
        }
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = open_pool(config).await?;
            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            // connecting applies pending migrations
            open_pool(config).await?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
