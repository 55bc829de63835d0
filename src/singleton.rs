//! Singleton pattern with `OnceLock`.
//!
//! One shared instance behind a global access point. The naive
//! check-then-set null guard is a data race under concurrent first access;
//! `OnceLock` gives the one-time initialization the required guarantee.

use std::sync::OnceLock;

/// Process-wide demo settings.
///
/// There is no public constructor, no `Clone` and no `Deserialize`: the only
/// way to reach a `Settings` is through [`Settings::global`], so at most one
/// instance exists for the life of the process.
#[derive(Debug)]
pub struct Settings {
    app_name: String,
    verbose: bool,
}

impl Settings {
    /// Global access point; initializes lazily on first call.
    pub fn global() -> &'static Settings {
        static INSTANCE: OnceLock<Settings> = OnceLock::new();
        INSTANCE.get_or_init(|| Settings {
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "patterns-demo".to_string()),
            verbose: std::env::var("VERBOSE").is_ok(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_returns_same_instance() {
        let first = Settings::global();
        let second = Settings::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn global_is_initialized() {
        let settings = Settings::global();
        assert!(!settings.app_name().is_empty());
    }
}
