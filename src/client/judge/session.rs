extern crate reqwest;

use super::token::{ExtractToken, RegexSet, TokenKind};
use crate::{
    account::Account,
    config::{
        login,
        remote::{ACCEPT_HTML, ACCEPT_LANGUAGE, USER_AGENT},
    },
    error::{Error, Result},
};
use log::{debug, info};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, ClientBuilder, Url,
};

/// The one authenticated identity of the process.
///
/// Owns the cookie jar and transport. After [`Session::login`] every request
/// made through it carries the session cookies, so it is built once and
/// shared by reference (or `Arc`) with everything that talks to the judge.
pub struct Session {
    pub(super) client: Client,
    base: Url,
    tokens: Box<dyn ExtractToken>,
}
impl Session {
    fn from_client(builder: ClientBuilder, base: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        Ok(Session {
            client: builder
                .user_agent(USER_AGENT)
                .default_headers(headers)
                .cookie_store(true)
                .build()?,
            base,
            tokens: Box::new(RegexSet::new()),
        })
    }
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self::from_client(Client::builder(), base)
    }
    pub async fn from_account(base: &str, account: &Account) -> Result<Self> {
        let ret = Self::new(base)?;
        ret.login(account).await?;
        Ok(ret)
    }
    /// Replaces the markup scraping strategy used for login and submission tokens.
    pub fn with_extractor<T: ExtractToken + 'static>(mut self, tokens: T) -> Self {
        self.tokens = Box::new(tokens);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
    pub(crate) fn origin(&self) -> String {
        self.base.origin().ascii_serialization()
    }

    pub(crate) async fn get_page(&self, url: Url, referer: &Url, accept: &str) -> Result<String> {
        debug!("GET {}", url);
        Ok(self
            .client
            .get(url)
            .header(header::REFERER, referer.as_str())
            .header(header::ACCEPT, accept)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
    /// Fetches `url` and scrapes a fresh token of `kind` out of it.
    pub(crate) async fn get_token(&self, url: Url, referer: &Url, kind: TokenKind) -> Result<String> {
        let body = self.get_page(url, referer, ACCEPT_HTML).await?;
        self.tokens.extract(body.as_str(), kind)
    }

    /// Signs in and keeps the resulting cookies for all later requests.
    ///
    /// The site answers a login attempt with an ordinary page, so only
    /// transport failures, error statuses and a missing token are detected
    /// here. Must complete before the session is shared.
    pub async fn login(&self, account: &Account) -> Result<()> {
        self.sign_in(account).await.map_err(Error::auth)?;
        info!("Logged into {} as {}", self.base, account.identity);
        Ok(())
    }
    async fn sign_in(&self, account: &Account) -> Result<()> {
        let url = self.url(login::PATH)?;
        let token = self
            .get_token(url.clone(), &self.base, TokenKind::Authenticity)
            .await?;
        debug!("POST {}", url);
        self.client
            .post(url.clone())
            .header(header::ORIGIN, self.origin())
            .header(header::REFERER, url.as_str())
            .header(header::ACCEPT, ACCEPT_HTML)
            .form(&[
                ("utf8", login::UTF8),
                ("authenticity_token", token.as_str()),
                ("user[email]", account.identity.as_str()),
                ("user[password]", account.secret.as_str()),
                ("user[remember_me]", login::REMEMBER_ME),
                ("commit", login::COMMIT),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
