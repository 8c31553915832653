pub mod account;
pub mod cache;
pub mod config;
pub mod error;
pub mod judge;
pub mod relay;

pub use account::Account;
pub use cache::{Cache, CacheKey};
pub use error::{Error, ResolveError, Result};
pub use judge::{Contest, Session, SubmissionResult};
pub use relay::{client::RelayClient, Relay};
