extern crate regex;

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;

/// Which anti-forgery token a page is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Hidden `authenticity_token` input on the login form.
    Authenticity,
    /// `csrf-token` meta tag on problem pages.
    Csrf,
}
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticity => write!(f, "authenticity token"),
            Self::Csrf => write!(f, "csrf token"),
        }
    }
}

/// Pulls a single-use token out of a served document.
pub trait ExtractToken: Send + Sync {
    fn extract(&self, document: &str, kind: TokenKind) -> Result<String>;
}

pub struct RegexSet {
    authenticity: Regex,
    csrf: Regex,
}
impl RegexSet {
    pub fn new() -> Self {
        Self {
            authenticity: Regex::new(r#"name="authenticity_token" value="([A-Za-z0-9+/=_\-]+)""#)
                .unwrap(),
            csrf: Regex::new(r#"name="csrf-token" content="([A-Za-z0-9+/=_\-]+)""#).unwrap(),
        }
    }
    fn pattern(&self, kind: TokenKind) -> &Regex {
        match kind {
            TokenKind::Authenticity => &self.authenticity,
            TokenKind::Csrf => &self.csrf,
        }
    }
}
impl Default for RegexSet {
    fn default() -> Self {
        Self::new()
    }
}
impl ExtractToken for RegexSet {
    fn extract(&self, document: &str, kind: TokenKind) -> Result<String> {
        search_text(document, self.pattern(kind)).ok_or(Error::TokenNotFound(kind))
    }
}

pub fn search_text(text: &str, regex: &Regex) -> Option<String> {
    regex
        .captures(text)
        .and_then(|v| v.get(1))
        .map(|v| v.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_PAGE: &str = r#"<form class="new_user" action="/users/sign_in" method="post">
<input name="utf8" type="hidden" value="&#x2713;" />
<input type="hidden" name="authenticity_token" value="XYZ123" />
</form>"#;

    #[test]
    fn extracts_authenticity_token() {
        let token = RegexSet::new()
            .extract(LOGIN_PAGE, TokenKind::Authenticity)
            .unwrap();
        assert_eq!(token, "XYZ123");
    }

    #[test]
    fn extracts_csrf_meta_tag() {
        let page = r#"<head><meta name="csrf-param" content="authenticity_token" />
<meta name="csrf-token" content="q1w+e2/r3==" /></head>"#;
        let token = RegexSet::new().extract(page, TokenKind::Csrf).unwrap();
        assert_eq!(token, "q1w+e2/r3==");
    }

    #[test]
    fn first_match_wins() {
        let page = r#"name="csrf-token" content="first" name="csrf-token" content="second""#;
        assert_eq!(
            RegexSet::new().extract(page, TokenKind::Csrf).unwrap(),
            "first"
        );
    }

    #[test]
    fn missing_token_is_reported() {
        let err = RegexSet::new()
            .extract("<html>Internal Server Error</html>", TokenKind::Authenticity)
            .unwrap_err();
        assert!(matches!(err, Error::TokenNotFound(TokenKind::Authenticity)));
    }

    #[test]
    fn kinds_do_not_cross_match() {
        let err = RegexSet::new()
            .extract(LOGIN_PAGE, TokenKind::Csrf)
            .unwrap_err();
        assert!(matches!(err, Error::TokenNotFound(TokenKind::Csrf)));
    }
}
