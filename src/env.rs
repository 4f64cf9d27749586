//! `USERDATA_REPORT_*` environment overrides.
//!
//! [`Env`] is the lookup seam: the process environment in production, a
//! fixed map in tests. [`EnvOverrides`] is the typed result of reading the
//! four recognised variables through it, with blank values dropped and
//! the timeout already validated.

#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants;

/// Source of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    #[cfg(test)]
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// The real process environment.
    pub fn real() -> Self {
        Self::default()
    }

    /// An environment containing only `vars`.
    #[cfg(test)]
    pub fn with_vars<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    /// Value of `name`, or `None` if it is unset, blank or not unicode.
    fn lookup(&self, name: &str) -> Option<String> {
        #[cfg(test)]
        let value = match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        #[cfg(not(test))]
        let value = std::env::var(name).ok();
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Overrides taken from `USERDATA_REPORT_URL`, `_TIMEOUT`, `_OUTPUT` and
/// `_USER_AGENT`. A field is `None` when its variable is absent or unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl EnvOverrides {
    pub fn from_env(env: &Env) -> Self {
        let timeout_secs = env.lookup(constants::ENV_TIMEOUT).and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(secs),
                _ => {
                    tracing::warn!("ignoring invalid {} value: {raw}", constants::ENV_TIMEOUT);
                    None
                }
            }
        });

        Self {
            url: env.lookup(constants::ENV_URL),
            timeout_secs,
            output: env.lookup(constants::ENV_OUTPUT).map(PathBuf::from),
            user_agent: env.lookup(constants::ENV_USER_AGENT),
        }
    }
}
