//! Local HTTP front for one long-lived session.
//!
//! Short-lived `wpcs2 get` / `wpcs2 submit` invocations talk to this server
//! instead of the judge, so they share the login and the test case cache.
//! There is no access control: it is meant to listen on loopback only.

extern crate tokio;

pub mod client;

use crate::{
    cache::Cache,
    error::{Error, Result},
    judge::{Session, SubmissionResult},
};
use axum::{
    extract::{Form, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use serde::Deserialize;
use std::{future::Future, sync::Arc};
use tokio::net::{TcpListener, ToSocketAddrs};

#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub cid: u64,
    pub pidx: usize,
    pub tcname: String,
}

#[derive(Debug, Deserialize)]
pub struct Answer {
    pub cid: u64,
    pub pidx: usize,
    pub tcname: String,
    #[serde(default)]
    pub body: String,
}

struct RelayError(Error);
impl From<Error> for RelayError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

struct Shared {
    session: Arc<Session>,
    cache: Arc<Cache>,
}

#[derive(Clone)]
pub struct Relay {
    shared: Arc<Shared>,
}

impl Relay {
    pub fn new(session: Arc<Session>, cache: Arc<Cache>) -> Self {
        Self {
            shared: Arc::new(Shared { session, cache }),
        }
    }
    /// Relay with a fresh, empty cache over `session`.
    pub fn from_session(session: Arc<Session>) -> Self {
        let cache = Arc::new(Cache::new(session.clone()));
        Self::new(session, cache)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/get", get(get_test_case))
            .route("/submit", post(submit_answer))
            .with_state(self.shared.clone())
    }

    pub async fn bind<A: ToSocketAddrs>(addr: A) -> Result<TcpListener> {
        Ok(TcpListener::bind(addr).await?)
    }
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        self.serve_with_shutdown(listener, std::future::pending::<()>())
            .await
    }
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Relay listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;
        info!("Relay stopped");
        Ok(())
    }
}

async fn get_test_case(
    State(shared): State<Arc<Shared>>,
    Query(q): Query<TestCase>,
) -> std::result::Result<Response, RelayError> {
    info!("get contest {} #{} {}", q.cid, q.pidx, q.tcname);
    let data = shared
        .cache
        .get(q.cid, q.pidx, &q.tcname)
        .await
        .map_err(|e| {
            warn!("get contest {} #{} {}: {}", q.cid, q.pidx, q.tcname, e);
            e
        })?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], data).into_response())
}

async fn submit_answer(
    State(shared): State<Arc<Shared>>,
    Form(a): Form<Answer>,
) -> std::result::Result<Json<SubmissionResult>, RelayError> {
    info!("submit contest {} #{} {}", a.cid, a.pidx, a.tcname);
    let ret = shared
        .session
        .submit(a.cid, a.pidx, &a.tcname, a.body.as_bytes())
        .await
        .map_err(|e| {
            warn!("submit contest {} #{} {}: {}", a.cid, a.pidx, a.tcname, e);
            e
        })?;
    info!(
        "Submission {} judged {} with score {}",
        ret.id, ret.judge_status, ret.score
    );
    Ok(Json(ret))
}
