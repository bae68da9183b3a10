//! Session token resolution.
//!
//! This module resolves the backend session token from its possible
//! sources:
//!
//! 1. `STORYMAP_TOKEN` environment variable
//! 2. `api.token` in the configuration file
//! 3. None (anonymous; the backend will reject protected operations
//!    with a 401, surfaced as a session-expired message)
//!
//! Tokens are wrapped in [`SecretString`] as soon as they are read so
//! they never end up in debug output or logs.

use secrecy::SecretString;

/// Environment variable holding the session token.
pub const ENV_TOKEN: &str = "STORYMAP_TOKEN";

/// Resolves the session token.
///
/// Tries the environment first, then the configured token.
///
/// # Arguments
///
/// * `config_token` - The `api.token` value from the config file, if any
///
/// # Examples
///
/// ```
/// use storymap_config::auth::resolve_token;
///
/// // With no env var and no config value, resolution yields None.
/// let token = resolve_token(None);
/// # let _ = token;
/// ```
#[must_use]
pub fn resolve_token(config_token: Option<&str>) -> Option<SecretString> {
    if let Ok(token) = std::env::var(ENV_TOKEN)
        && !token.is_empty()
    {
        return Some(SecretString::from(token));
    }

    config_token
        .filter(|t| !t.is_empty())
        .map(|t| SecretString::from(t.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn config_token_used_when_env_unset() {
        // Tests must not set the process-wide env var; rely on it being
        // absent in the test environment.
        if std::env::var(ENV_TOKEN).is_ok() {
            return;
        }

        let token = resolve_token(Some("abc123")).expect("token resolves");
        assert_eq!(token.expose_secret(), "abc123");
    }

    #[test]
    fn empty_config_token_is_ignored() {
        if std::env::var(ENV_TOKEN).is_ok() {
            return;
        }

        assert!(resolve_token(Some("")).is_none());
        assert!(resolve_token(None).is_none());
    }
}
