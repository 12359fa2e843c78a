use dotenv::dotenv;
use std::env;

/// Default auto-reject timeout: 8 hours
const DEFAULT_TIMEOUT_SECS: u64 = 60 * 60 * 8;

#[derive(Debug, Clone)]
pub struct Config {
    /// Privileged identities: invites from them are auto-approved and
    /// the first entry receives all administrator notifications
    pub superusers: Vec<i64>,
    pub invite_timeout_secs: u64,
    pub allow_list_path: String,
    pub timeout_reject_reason: String,
    pub admin_reject_reason: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() automatically.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let superusers = env::var("SUPERUSERS")
            .map_err(|_| "SUPERUSERS must be set in .env file".to_string())?
            .split(',')
            .map(|id| id.trim().parse::<i64>())
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|_| "Invalid SUPERUSERS: must be comma-separated user ids".to_string())?;

        if superusers.is_empty() {
            return Err("SUPERUSERS must contain at least one user id".to_string());
        }

        let invite_timeout_secs = env::var("INVITE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "Invalid INVITE_TIMEOUT_SECS: must be a positive number".to_string())?;

        let allow_list_path =
            env::var("ALLOW_LIST_PATH").unwrap_or_else(|_| "allow_groups.json".to_string());

        let timeout_reject_reason = env::var("TIMEOUT_REJECT_REASON").unwrap_or_else(|_| {
            "Administrator approval timed out, contact the maintainers to join".to_string()
        });

        let admin_reject_reason = env::var("ADMIN_REJECT_REASON")
            .unwrap_or_else(|_| "The administrator declined this group invite".to_string());

        Ok(Config {
            superusers,
            invite_timeout_secs,
            allow_list_path,
            timeout_reject_reason,
            admin_reject_reason,
        })
    }

    /// The administrator who receives notifications: by convention the
    /// first configured superuser.
    pub fn master(&self) -> i64 {
        self.superusers[0]
    }

    pub fn is_superuser(&self, user_id: i64) -> bool {
        self.superusers.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            superusers: vec![10000, 10001],
            invite_timeout_secs: DEFAULT_TIMEOUT_SECS,
            allow_list_path: "allow_groups.json".to_string(),
            timeout_reject_reason: "timed out".to_string(),
            admin_reject_reason: "declined".to_string(),
        }
    }

    #[test]
    fn master_is_first_superuser() {
        let config = test_config();
        assert_eq!(config.master(), 10000);
    }

    #[test]
    fn superuser_lookup() {
        let config = test_config();
        assert!(config.is_superuser(10001));
        assert!(!config.is_superuser(42));
    }
}
