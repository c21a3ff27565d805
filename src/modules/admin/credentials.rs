use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
};
use tracing::warn;

/// Single-admin credential store. The password is hashed at startup and only
/// the PHC string is kept.
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self::with_hasher(Argon2::default(), username, password)
    }

    /// Reduced-cost parameters for test runs; never for a deployment.
    pub fn fast_env(username: &str, password: &str) -> Self {
        let params = Params::new(8, 1, 1, None).expect("static argon2 params");
        Self::with_hasher(
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            username,
            password,
        )
    }

    fn with_hasher(hasher: Argon2<'_>, username: &str, password: &str) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = hasher
            .hash_password(password.as_bytes(), &salt)
            .expect("argon2 hashing of the configured admin password failed")
            .to_string();
        Self {
            username: username.to_string(),
            password_hash,
        }
    }

    pub fn from_env() -> Self {
        let username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());
        let password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());
        if password == DEFAULT_PASSWORD {
            warn!("ADMIN_PASSWORD not set, using the development default");
        }
        Self::new(&username, &password)
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_configured_credentials() {
        let creds = AdminCredentials::fast_env("admin", "admin123");
        assert!(creds.verify("admin", "admin123"));
    }

    #[test]
    fn rejects_wrong_password_and_wrong_username() {
        let creds = AdminCredentials::fast_env("admin", "admin123");
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "admin123"));
    }
}
