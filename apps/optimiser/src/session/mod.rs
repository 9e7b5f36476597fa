//! Session state — the two values that carry across independent operator actions.
//!
//! Lifecycle:
//! - `create` starts an empty session
//! - `set_page` / `set_keywords` replace a value wholesale after a successful action
//! - `remove` ends the session and discards both values
//! - sessions idle longer than `SESSION_IDLE_TTL_HOURS` are evicted on the next `create`
//!
//! Failed actions never touch the store, so earlier results survive them.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::keywords::models::KeywordVolumeTable;
use crate::page::models::PageElements;

const SESSION_IDLE_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub page: Option<PageElements>,
    pub keywords: Option<KeywordVolumeTable>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            page: None,
            keywords: None,
        }
    }

    /// Both inputs for recommendation generation, or a precondition error
    /// naming what is still missing.
    pub fn recommendation_inputs(&self) -> Result<(&PageElements, &KeywordVolumeTable), AppError> {
        match (&self.page, &self.keywords) {
            (Some(page), Some(keywords)) if !keywords.is_empty() => Ok((page, keywords)),
            (None, None) => Err(AppError::Precondition(
                "Extract webpage content and process keywords first".to_string(),
            )),
            (None, _) => Err(AppError::Precondition("Extract webpage content first".to_string())),
            (_, _) => Err(AppError::Precondition("Process keywords first".to_string())),
        }
    }
}

/// In-memory session store. Cloning shares the underlying map.
/// Nothing outlives the process; abandoned sessions are dropped once idle
/// past the TTL.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Session {
        let session = Session::new(Uuid::new_v4());
        let idle_cutoff = session.created_at - chrono::Duration::hours(SESSION_IDLE_TTL_HOURS);

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= idle_cutoff);
        if sessions.len() < before {
            tracing::info!("Evicted {} idle sessions", before - sessions.len());
        }
        sessions.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub async fn set_page(&self, id: Uuid, page: PageElements) -> Result<(), AppError> {
        self.update(id, |session| session.page = Some(page)).await
    }

    pub async fn set_keywords(&self, id: Uuid, keywords: KeywordVolumeTable) -> Result<(), AppError> {
        self.update(id, |session| session.keywords = Some(keywords)).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: Uuid, apply: impl FnOnce(&mut Session)) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        apply(session);
        session.updated_at = Utc::now();
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::parser::parse_keywords;
    use crate::optimisation::testing::sample_page;

    #[tokio::test]
    async fn test_create_starts_empty() {
        let store = SessionStore::new();
        let session = store.create().await;
        let fetched = store.get(session.id).await.unwrap();
        assert!(fetched.page.is_none());
        assert!(fetched.keywords.is_none());
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_set_values_overwrite_previous() {
        let store = SessionStore::new();
        let id = store.create().await.id;

        store.set_keywords(id, parse_keywords("a,1")).await.unwrap();
        store.set_keywords(id, parse_keywords("b,2\nc,3")).await.unwrap();
        store.set_page(id, sample_page()).await.unwrap();

        let session = store.get(id).await.unwrap();
        assert_eq!(session.keywords.unwrap(), parse_keywords("b,2\nc,3"));
        assert_eq!(session.page.unwrap(), sample_page());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create().await.id;
        let b = store.create().await.id;
        store.set_page(a, sample_page()).await.unwrap();
        assert!(store.get(b).await.unwrap().page.is_none());
    }

    #[tokio::test]
    async fn test_remove_discards_session() {
        let store = SessionStore::new();
        let id = store.create().await.id;
        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            store.set_page(id, sample_page()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_evicts_idle_sessions() {
        let store = SessionStore::new();
        let idle = store.create().await.id;
        let active = store.create().await.id;

        if let Some(session) = store.sessions.write().await.get_mut(&idle) {
            session.updated_at = Utc::now() - chrono::Duration::hours(SESSION_IDLE_TTL_HOURS + 1);
        }

        store.create().await;
        assert!(matches!(store.get(idle).await, Err(AppError::NotFound(_))));
        assert!(store.get(active).await.is_ok());
    }

    #[tokio::test]
    async fn test_recommendation_inputs_require_both_values() {
        let store = SessionStore::new();
        let id = store.create().await.id;

        let session = store.get(id).await.unwrap();
        assert!(matches!(
            session.recommendation_inputs(),
            Err(AppError::Precondition(_))
        ));

        store.set_page(id, sample_page()).await.unwrap();
        let session = store.get(id).await.unwrap();
        assert!(matches!(
            session.recommendation_inputs(),
            Err(AppError::Precondition(msg)) if msg.contains("keywords")
        ));

        store.set_keywords(id, parse_keywords("k,1")).await.unwrap();
        let session = store.get(id).await.unwrap();
        let (page, keywords) = session.recommendation_inputs().unwrap();
        assert_eq!(page.h1, "Best VPN for Crypto");
        assert_eq!(keywords.len(), 1);
    }
}
