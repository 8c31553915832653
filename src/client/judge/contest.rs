extern crate chrono;
extern crate reqwest;
extern crate serde;

use super::Session;
use crate::{
    config::remote::ACCEPT_ANY,
    error::{ResolveError, Result},
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::header;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, result::Result as StdResult};

/// `null` decodes like an absent field.
pub(super) fn null_default<'de, D, T>(deserializer: D) -> StdResult<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSet {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    #[serde(deserialize_with = "null_default")]
    pub max_score: i64,
    #[serde(deserialize_with = "null_default")]
    pub correct: bool,
    #[serde(deserialize_with = "null_default")]
    pub score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Problem {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub data_sets: Vec<DataSet>,
}
impl Problem {
    /// First data set whose label equals `label` ignoring case.
    pub fn data_set(&self, label: &str) -> Option<&DataSet> {
        let label = label.to_lowercase();
        self.data_sets
            .iter()
            .find(|v| v.label.to_lowercase() == label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Editorial {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub contest_id: u64,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Contest description served by `/api/contests/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contest {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_default")]
    pub baseline: f64,
    pub current_user_id: Option<u64>,
    #[serde(deserialize_with = "null_default")]
    pub joined: bool,
    pub contest_status: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub admin_role: bool,
    #[serde(deserialize_with = "null_default")]
    pub problems: Vec<Problem>,
    pub editorial: Option<Editorial>,
}

/// Remote ids a (problem index, label) pair resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolved {
    pub problem_id: u64,
    pub data_set_id: u64,
}
impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "problem {} data set {}", self.problem_id, self.data_set_id)
    }
}

impl Contest {
    pub fn problem(&self, index: usize) -> StdResult<&Problem, ResolveError> {
        self.problems
            .get(index)
            .ok_or(ResolveError::IndexOutOfRange {
                index,
                len: self.problems.len(),
            })
    }
    pub fn resolve_data_set(&self, index: usize, label: &str) -> StdResult<Resolved, ResolveError> {
        let problem = self.problem(index)?;
        problem
            .data_set(label)
            .map(|v| Resolved {
                problem_id: problem.id,
                data_set_id: v.id,
            })
            .ok_or_else(|| ResolveError::LabelNotFound {
                label: label.to_owned(),
                problem_id: problem.id,
            })
    }
}

pub(crate) fn contest_path(contest: u64) -> String {
    format!("contests/{}", contest)
}
pub(crate) fn problem_path(contest: u64, problem: u64) -> String {
    format!("contests/{}/problems/{}", contest, problem)
}

impl Session {
    /// Always goes to the network: data sets and scores change during a contest.
    pub async fn get_contest(&self, contest: u64) -> Result<Contest> {
        let url = self.url(&format!("api/contests/{}", contest))?;
        let referer = self.url(&contest_path(contest))?;
        let body = self.get_page(url, &referer, ACCEPT_ANY).await?;
        Ok(serde_json::from_str(body.as_str())?)
    }
    pub async fn resolve(&self, contest: u64, index: usize, label: &str) -> Result<Resolved> {
        let ret = self
            .get_contest(contest)
            .await?
            .resolve_data_set(index, label)?;
        debug!(
            "Resolved contest {} #{} {} to {}",
            contest, index, label, ret
        );
        Ok(ret)
    }
    /// Downloads the whole input of one data set.
    pub async fn get_data_set(&self, contest: u64, target: Resolved) -> Result<Bytes> {
        let problem = problem_path(contest, target.problem_id);
        let url = self.url(&format!("{}/data_sets/{}", problem, target.data_set_id))?;
        let referer = self.url(&problem)?;
        debug!("GET {}", url);
        Ok(self
            .client
            .get(url)
            .header(header::REFERER, referer.as_str())
            .header(header::ACCEPT, ACCEPT_ANY)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?)
    }
}
