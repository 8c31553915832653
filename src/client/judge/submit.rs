extern crate chrono;
extern crate reqwest;
extern crate serde;
extern crate tokio;

use super::{
    contest::{null_default, problem_path, Resolved},
    token::TokenKind,
    Session,
};
use crate::error::Result;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::{
    header,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Judge response to a submission.
///
/// The site's response is decoded leniently: a body that is not a
/// submission record yields `SubmissionResult::default()`, so an all-zero
/// value cannot be told apart from a real record with defaulted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionResult {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub problem_id: u64,
    #[serde(deserialize_with = "null_default")]
    pub data_set_id: u64,
    #[serde(deserialize_with = "null_default")]
    pub judge_status: i64,
    #[serde(deserialize_with = "null_default")]
    pub score: i64,
    pub created_at: Option<DateTime<Utc>>,
}
impl SubmissionResult {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

fn decode_result(body: &[u8]) -> SubmissionResult {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!("Submission response not decoded, returning empty result: {}", e);
        SubmissionResult::default()
    })
}

impl Session {
    /// Resolves `label` of problem `index` and submits `answer` to it.
    ///
    /// Every call creates a new submission on the judge.
    pub async fn submit<R>(
        &self,
        contest: u64,
        index: usize,
        label: &str,
        answer: R,
    ) -> Result<SubmissionResult>
    where
        R: AsyncRead + Unpin,
    {
        let target = self.resolve(contest, index, label).await?;
        self.submit_resolved(contest, target, answer).await
    }

    pub async fn submit_resolved<R>(
        &self,
        contest: u64,
        target: Resolved,
        mut answer: R,
    ) -> Result<SubmissionResult>
    where
        R: AsyncRead + Unpin,
    {
        let mut content = Vec::new();
        answer.read_to_end(&mut content).await?;

        // single use, so scraped right before the post that consumes it
        let problem = self.url(&problem_path(contest, target.problem_id))?;
        let csrf = self
            .get_token(problem.clone(), self.base_url(), TokenKind::Csrf)
            .await?;
        let form = Form::new()
            .text("authenticity_token", csrf)
            .text("data_set_id", target.data_set_id.to_string())
            .part("answer", Part::bytes(content));

        let url = self.url(&format!("api/contests/{}/submissions", contest))?;
        debug!("POST {} ({})", url, target);
        let body = self
            .client
            .post(url)
            .header(header::ORIGIN, self.origin())
            .header(header::REFERER, problem.as_str())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(decode_result(&body))
    }
}
