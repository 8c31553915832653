pub mod contest;
pub mod session;
pub mod submit;
pub mod token;

pub use contest::{Contest, DataSet, Problem, Resolved};
pub use session::Session;
pub use submit::SubmissionResult;
pub use token::{ExtractToken, RegexSet, TokenKind};
