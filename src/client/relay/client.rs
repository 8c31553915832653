extern crate futures;
extern crate reqwest;
extern crate tokio;

use crate::{
    error::{Error, Result},
    judge::SubmissionResult,
};
use futures::TryStreamExt;
use log::debug;
use reqwest::{Client, Response, Url};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Thin client for a running relay.
pub struct RelayClient {
    client: Client,
    base: Url,
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Relay {
            status: status.as_u16(),
            message: response.text().await?,
        })
    }
}

impl RelayClient {
    /// `addr` is the relay's `host:port`.
    pub fn new(addr: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base: Url::parse(&format!("http://{}/", addr))?,
        })
    }

    /// Copies the test case input to `out` as it arrives, returning its length.
    pub async fn get<W>(&self, contest: u64, index: usize, label: &str, out: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let url = self.base.join("get")?;
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("cid", contest.to_string()),
                ("pidx", index.to_string()),
                ("tcname", label.to_owned()),
            ])
            .send()
            .await?;
        let mut stream = check(response).await?.bytes_stream();
        let mut len = 0;
        while let Some(chunk) = stream.try_next().await? {
            out.write_all(&chunk).await?;
            len += chunk.len() as u64;
        }
        out.flush().await?;
        Ok(len)
    }

    pub async fn submit(
        &self,
        contest: u64,
        index: usize,
        label: &str,
        answer: &str,
    ) -> Result<SubmissionResult> {
        let url = self.base.join("submit")?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .form(&[
                ("cid", contest.to_string().as_str()),
                ("pidx", index.to_string().as_str()),
                ("tcname", label),
                ("body", answer),
            ])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}
