extern crate tokio;

use crate::{error::Result, judge::Session};
use bytes::Bytes;
use log::debug;
use std::{collections::HashMap, fmt, sync::Arc};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub contest: u64,
    pub problem_index: usize,
    pub label: String,
}
impl CacheKey {
    pub fn new(contest: u64, problem_index: usize, label: &str) -> Self {
        Self {
            contest,
            problem_index,
            label: label.to_lowercase(),
        }
    }
}
impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.contest, self.problem_index, self.label)
    }
}

/// Process-wide store of downloaded test case inputs.
///
/// Entries are never evicted. Concurrent misses on the same key are not
/// coalesced: each of them downloads and the last write wins, which is
/// harmless because a data set's input does not change.
pub struct Cache {
    session: Arc<Session>,
    store: RwLock<HashMap<CacheKey, Bytes>>,
}

impl Cache {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            store: RwLock::new(HashMap::new()),
        }
    }
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns the input of data set `label` of problem `index`, downloading it
    /// on first use. Failed downloads leave no entry behind.
    pub async fn get(&self, contest: u64, index: usize, label: &str) -> Result<Bytes> {
        let key = CacheKey::new(contest, index, label);
        if let Some(v) = self.store.read().await.get(&key) {
            debug!("Cache hit {}", key);
            return Ok(v.clone());
        }
        debug!("Cache miss {}", key);
        let target = self.session.resolve(contest, index, &key.label).await?;
        let data = self.session.get_data_set(contest, target).await?;
        self.store.write().await.insert(key, data.clone());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ResolveError};
    use mockito::{Mock, ServerGuard};

    const CONTEST: &str = r#"{"id": 7, "problems": [
        {"id": 37, "data_sets": [{"id": 56, "label": "Small"}, {"id": 57, "label": "Large"}]}
    ]}"#;

    async fn data_set(server: &mut ServerGuard, id: u64, body: &str, hits: usize) -> Mock {
        server
            .mock("GET", format!("/contests/7/problems/37/data_sets/{}", id).as_str())
            .with_status(200)
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    fn cache(server: &ServerGuard) -> Cache {
        Cache::new(Arc::new(Session::new(&server.url()).unwrap()))
    }

    #[test]
    fn key_lowercases_label() {
        assert_eq!(CacheKey::new(7, 0, "SmAlL"), CacheKey::new(7, 0, "small"));
        assert_eq!(CacheKey::new(7, 0, "Small").to_string(), "7-0-small");
    }

    #[tokio::test]
    async fn second_get_is_served_from_memory() {
        let mut server = mockito::Server::new_async().await;
        let contest = server
            .mock("GET", "/api/contests/7")
            .with_status(200)
            .with_body(CONTEST)
            .expect(1)
            .create_async()
            .await;
        let data = data_set(&mut server, 56, "3\n1 2 3\n", 1).await;

        let cache = cache(&server);
        let first = cache.get(7, 0, "small").await.unwrap();
        let second = cache.get(7, 0, "SMALL").await.unwrap();
        assert_eq!(&first[..], b"3\n1 2 3\n");
        assert_eq!(first, second);
        assert_eq!(cache.len().await, 1);

        contest.assert_async().await;
        data.assert_async().await;
    }

    #[tokio::test]
    async fn distinct_keys_are_independent() {
        let mut server = mockito::Server::new_async().await;
        let _contest = server
            .mock("GET", "/api/contests/7")
            .with_status(200)
            .with_body(CONTEST)
            .expect(2)
            .create_async()
            .await;
        let small = data_set(&mut server, 56, "small input", 1).await;
        let large = data_set(&mut server, 57, "large input", 1).await;

        let cache = cache(&server);
        let (a, b) = tokio::join!(cache.get(7, 0, "small"), cache.get(7, 0, "large"));
        assert_eq!(&a.unwrap()[..], b"small input");
        assert_eq!(&b.unwrap()[..], b"large input");
        assert_eq!(cache.len().await, 2);

        small.assert_async().await;
        large.assert_async().await;
    }

    #[tokio::test]
    async fn failure_leaves_no_entry() {
        let mut server = mockito::Server::new_async().await;
        let broken = server
            .mock("GET", "/api/contests/7")
            .with_status(502)
            .expect(1)
            .create_async()
            .await;

        let cache = cache(&server);
        let err = cache.get(7, 0, "small").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(cache.is_empty().await);
        broken.assert_async().await;
        broken.remove_async().await;

        let _contest = server
            .mock("GET", "/api/contests/7")
            .with_status(200)
            .with_body(CONTEST)
            .create_async()
            .await;
        let data = data_set(&mut server, 56, "recovered", 1).await;
        assert_eq!(&cache.get(7, 0, "small").await.unwrap()[..], b"recovered");
        data.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_label_is_not_cached() {
        let mut server = mockito::Server::new_async().await;
        let contest = server
            .mock("GET", "/api/contests/7")
            .with_status(200)
            .with_body(CONTEST)
            .expect(2)
            .create_async()
            .await;

        let cache = cache(&server);
        for _ in 0..2 {
            let err = cache.get(7, 0, "medium").await.unwrap_err();
            assert!(matches!(
                err,
                Error::Resolve(ResolveError::LabelNotFound { .. })
            ));
        }
        assert!(cache.is_empty().await);
        contest.assert_async().await;
    }
}
