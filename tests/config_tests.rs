use flight_search_bot::config::Config;
use flight_search_bot::dialogue::Locale;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");
    env::remove_var("BOT_LOCALE");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("BOT_LOCALE", "en");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.locale, Locale::En);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/flights.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.locale, Locale::Ru);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_blank_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "70000");
    assert!(Config::from_env().is_err());

    env::set_var("HTTP_PORT", "  8081  ");
    assert_eq!(Config::from_env().unwrap().http_port, 8081);

    clear_env();
}

#[test]
fn test_config_invalid_locale() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("BOT_LOCALE", "de");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid BOT_LOCALE"));

    env::set_var("BOT_LOCALE", "");
    assert_eq!(Config::from_env().unwrap().locale, Locale::Ru);

    clear_env();
}

#[test]
fn test_database_url_blank_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("DATABASE_URL", "");
    assert_eq!(Config::database_url_from_env(), "sqlite:./data/flights.db");

    env::set_var("DATABASE_URL", "sqlite:other.db");
    assert_eq!(Config::database_url_from_env(), "sqlite:other.db");

    clear_env();
}
