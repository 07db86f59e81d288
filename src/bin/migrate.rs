use anyhow::{anyhow, Result};
use flight_search_bot::config::Config;
use flight_search_bot::database::connection::DatabaseManager;
use flight_search_bot::database::models::User;
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn connect() -> Result<DatabaseManager> {
    let database_url = Config::database_url_from_env();
    println!("📊 Database URL: {}", mask_url(&database_url));

    if let Some(db_path) = database_url.strip_prefix("sqlite:") {
        let db_path = db_path.trim_start_matches("//");
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                println!("📁 Creating directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    DatabaseManager::new(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))
}

async fn run_migrations() -> Result<()> {
    println!("🔧 Flight Search Bot - Database Migration Tool");

    let db_manager = connect().await?;
    println!("🚀 Running database migrations...");

    if let Err(e) = db_manager.run_migrations().await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }

    println!("✅ Migrations completed successfully!");
    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let db_manager = connect().await?;
    match db_manager.table_names().await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in &tables {
                println!("  • {table}");
            }
            if tables.iter().any(|t| t == "users") {
                println!("👤 Users: {}", User::count(&db_manager.pool).await?);
            } else {
                println!("💡 Table 'users' is missing, run 'migrate up' to create the schema");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
        }
    }

    Ok(())
}

fn mask_url(url: &str) -> String {
    match url.strip_prefix("sqlite:") {
        Some(path) => match Path::new(path).file_name() {
            Some(filename) => format!("sqlite:.../{}", filename.to_string_lossy()),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}

fn print_help() {
    println!("✈️ Flight Search Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check database connection and schema");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/flights.db)");
}
