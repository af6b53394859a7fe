use crate::config::PrefixesConfig;
use crate::error::{Result, TagitError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Deployment target a tag is cut for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Production,
    /// Numbered staging slot, keeping the token as given (e.g. "s1", "s01")
    Staging { token: String },
}

impl Environment {
    /// Parse an environment token: `p`/`P` for production, `s<digits>` for staging.
    pub fn parse(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case("p") {
            return Ok(Environment::Production);
        }
        if staging_pattern().is_match(token) {
            return Ok(Environment::Staging {
                token: token.to_string(),
            });
        }
        Err(TagitError::invalid_environment(format!(
            "'{}' (expected p for production or s<N> for staging)",
            token
        )))
    }

    /// Tag prefix for this environment
    pub fn prefix(&self, prefixes: &PrefixesConfig) -> String {
        match self {
            Environment::Production => prefixes.production.clone(),
            Environment::Staging { token } => format!("{}{}", token, prefixes.staging_suffix),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Staging { token } => write!(f, "staging ({})", token),
        }
    }
}

fn staging_pattern() -> &'static Regex {
    static STAGING: OnceLock<Regex> = OnceLock::new();
    STAGING.get_or_init(|| Regex::new(r"^s\d+$").expect("staging pattern is a valid regex"))
}

/// Resolve an environment token straight to its tag prefix.
///
/// Fails with `InvalidEnvironment` for anything other than `p`/`P` or `s<digits>`.
pub fn resolve(token: &str, prefixes: &PrefixesConfig) -> Result<String> {
    Ok(Environment::parse(token)?.prefix(prefixes))
}
