//! Store configuration: file location and update policy.

use std::path::PathBuf;

pub const DEFAULT_PRODUCTS_FILE: &str = "./products.json";
pub const PRODUCTS_FILE_ENV: &str = "PRODUCTS_FILE";
pub const UPDATE_POLICY_ENV: &str = "PRODUCTS_UPDATE_POLICY";

/// How `update` treats the merged record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Merge and persist without re-checking fields or code uniqueness.
    #[default]
    Lenient,
    /// Merged record must pass creation rules and keep its code unique.
    Strict,
}

impl std::str::FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown update policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub update_policy: UpdatePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_update_policy(mut self, update_policy: UpdatePolicy) -> Self {
        self.update_policy = update_policy;
        self
    }

    /// Reads `PRODUCTS_FILE` and `PRODUCTS_UPDATE_POLICY`, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();
        if let Some(path) = lookup(PRODUCTS_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }
        if let Some(policy) = lookup(UPDATE_POLICY_ENV) {
            config.update_policy = policy.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.path, PathBuf::from("./products.json"));
        assert_eq!(config.update_policy, UpdatePolicy::Lenient);
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            (PRODUCTS_FILE_ENV, "/tmp/catalog.json"),
            (UPDATE_POLICY_ENV, "Strict"),
        ]))
        .unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/catalog.json"));
        assert_eq!(config.update_policy, UpdatePolicy::Strict);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[(UPDATE_POLICY_ENV, "paranoid")])).unwrap_err();
        assert!(err.contains("paranoid"));
    }
}
