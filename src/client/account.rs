extern crate serde;
extern crate serde_yaml;

use crate::{
    config::env::{IDENTITY, SECRET},
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{env, fmt, io::Read};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Account {
    #[serde(alias = "email")]
    pub identity: String,
    #[serde(alias = "password")]
    pub secret: String,
}
impl Account {
    pub fn new<I: Into<String>, S: Into<String>>(identity: I, secret: S) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(require_env(IDENTITY)?, require_env(SECRET)?))
    }
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(rdr)?)
    }
}
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("identity", &self.identity)
            .field("secret", &"***")
            .finish()
    }
}

pub fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("${} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_yaml_account() {
        let yaml = "identity: alice@example.com\nsecret: hunter2\n";
        let account = Account::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(account, Account::new("alice@example.com", "hunter2"));
    }

    #[test]
    fn accepts_site_field_names() {
        let yaml = "email: bob@example.com\npassword: p@ss\n";
        let account = Account::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(account.identity, "bob@example.com");
        assert_eq!(account.secret, "p@ss");
    }

    #[test]
    fn debug_hides_secret() {
        let text = format!("{:?}", Account::new("carol", "topsecret"));
        assert!(text.contains("carol"));
        assert!(!text.contains("topsecret"));
    }

    #[test]
    fn missing_variable_names_it() {
        let err = require_env("WPCS2_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(err.to_string().contains("WPCS2_TEST_SURELY_UNSET_VARIABLE"));
    }
}
