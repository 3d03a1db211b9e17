use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// Default bcrypt work factor for stored passwords.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub seed_root: bool,
    pub root_name: String,
    pub root_email: String,
    pub root_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "user_store".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-super-secret-jwt-key-change-in-production".to_string()),
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS", 24),
            bcrypt_cost: parse_var("BCRYPT_COST", DEFAULT_BCRYPT_COST),
            seed_root: parse_var("SEED_ROOT", false),
            root_name: env::var("ROOT_NAME").unwrap_or_else(|_| "root".to_string()),
            root_email: env::var("ROOT_EMAIL").unwrap_or_else(|_| "root@localhost".to_string()),
            root_password: env::var("ROOT_PASSWORD")
                .unwrap_or_else(|_| "change-me-after-first-login".to_string()),
        }
    }
}

/// Read and parse an environment variable, keeping `default` when it is unset
/// or does not parse.
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        assert_eq!(parse_var("USER_STORE_TEST_UNSET_VAR", 7u32), 7);
    }

    #[test]
    fn test_parse_var_reads_value() {
        env::set_var("USER_STORE_TEST_COST", "4");
        assert_eq!(parse_var("USER_STORE_TEST_COST", 12u32), 4);
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        env::set_var("USER_STORE_TEST_FLAG", "maybe");
        assert!(!parse_var("USER_STORE_TEST_FLAG", false));
    }
}
