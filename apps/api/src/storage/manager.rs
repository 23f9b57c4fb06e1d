use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::storage::{StorageError, StorageMedium};

/// Key holding the campaign id → candidate batch map.
pub const CANDIDATES_KEY: &str = "campaign_candidates";

#[derive(Debug, Clone, Copy)]
pub struct StorageLimits {
    pub max_campaigns: usize,
    pub max_candidates_per_campaign: usize,
}

impl Default for StorageLimits {
    fn default() -> Self {
        Self {
            max_campaigns: 10,
            max_candidates_per_campaign: 50,
        }
    }
}

type CandidateMap = BTreeMap<String, Vec<Candidate>>;

/// Best-effort cache of candidate batches keyed by campaign id.
///
/// Every read-modify-write of the candidate map holds `writer`, so concurrent
/// batches never drop each other's updates. Last write for the same campaign
/// id still wins.
pub struct StorageManager {
    medium: Option<Arc<dyn StorageMedium>>,
    limits: StorageLimits,
    writer: Mutex<()>,
}

impl StorageManager {
    pub fn new(medium: Arc<dyn StorageMedium>, limits: StorageLimits) -> Self {
        Self {
            medium: Some(medium),
            limits,
            writer: Mutex::new(()),
        }
    }

    /// No backing medium: stores report `false`, reads return defaults.
    pub fn unavailable(limits: StorageLimits) -> Self {
        Self {
            medium: None,
            limits,
            writer: Mutex::new(()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.medium.is_some()
    }

    /// Serializes `value` under `key`. Returns false on any failure.
    pub async fn store_data<T: Serialize + Sync + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_store(key, value).await {
            Ok(()) => true,
            Err(StorageError::Unavailable) => {
                debug!("No storage medium; skipping write of '{key}'");
                false
            }
            Err(e) => {
                error!("Failed to store '{key}': {e}");
                false
            }
        }
    }

    /// Value under `key`, or `default` when absent, unreadable or unavailable.
    pub async fn retrieve_data<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_retrieve(key).await {
            Ok(Some(value)) => value,
            Ok(None) | Err(StorageError::Unavailable) => default,
            Err(e) => {
                error!("Failed to retrieve '{key}': {e}");
                default
            }
        }
    }

    /// Replaces the batch for `campaign_id`, truncated to the per-campaign cap,
    /// then evicts the lexicographically smallest other campaigns while over the
    /// campaign cap.
    pub async fn store_candidates_for_campaign(
        &self,
        campaign_id: &str,
        candidates: &[Candidate],
    ) -> bool {
        let _guard = self.writer.lock().await;

        let mut map: CandidateMap = match self.try_retrieve(CANDIDATES_KEY).await {
            Ok(found) => found.unwrap_or_default(),
            Err(StorageError::Unavailable) => return false,
            Err(e) => {
                // An unreadable map is replaced rather than blocking all writes.
                warn!("Discarding unreadable candidate map: {e}");
                CandidateMap::new()
            }
        };

        let cap = self.limits.max_candidates_per_campaign;
        if candidates.len() > cap {
            info!(
                "Truncating {} candidates to {cap} for campaign '{campaign_id}'",
                candidates.len()
            );
        }
        map.insert(
            campaign_id.to_string(),
            candidates.iter().take(cap).cloned().collect(),
        );

        let evicted = evict_oldest(&mut map, campaign_id, self.limits.max_campaigns);
        if !evicted.is_empty() {
            info!("Evicted campaigns over cap: {evicted:?}");
        }

        self.store_data(CANDIDATES_KEY, &map).await
    }

    /// Stored batch for `campaign_id`, empty when absent.
    pub async fn get_candidates_for_campaign(&self, campaign_id: &str) -> Vec<Candidate> {
        let mut map: CandidateMap = self.retrieve_data(CANDIDATES_KEY, CandidateMap::new()).await;
        map.remove(campaign_id).unwrap_or_default()
    }

    /// Campaign ids with a stored batch, in sort order.
    pub async fn campaign_ids(&self) -> Vec<String> {
        let map: CandidateMap = self.retrieve_data(CANDIDATES_KEY, CandidateMap::new()).await;
        map.into_keys().collect()
    }

    /// Moves one stored candidate to `status`. `Ok(None)` when the campaign or
    /// candidate is not stored.
    pub async fn update_candidate_status(
        &self,
        campaign_id: &str,
        candidate_id: Uuid,
        status: CandidateStatus,
    ) -> Result<Option<Candidate>, StorageError> {
        let _guard = self.writer.lock().await;

        let mut map: CandidateMap = self.try_retrieve(CANDIDATES_KEY).await?.unwrap_or_default();
        let Some(candidate) = map
            .get_mut(campaign_id)
            .and_then(|batch| batch.iter_mut().find(|c| c.id == candidate_id))
        else {
            return Ok(None);
        };

        let previous = candidate.status;
        candidate.status = status;
        let updated = candidate.clone();

        self.try_store(CANDIDATES_KEY, &map).await?;
        info!("Candidate {candidate_id} in campaign '{campaign_id}': {previous:?} -> {status:?}");
        Ok(Some(updated))
    }

    async fn try_store<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let medium = self.medium.as_ref().ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(value)?;
        medium.write(key, raw).await
    }

    async fn try_retrieve<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let medium = self.medium.as_ref().ok_or(StorageError::Unavailable)?;
        match medium.read(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

/// Drops the smallest ids other than `keep` until at most `max` remain.
fn evict_oldest(map: &mut CandidateMap, keep: &str, max: usize) -> Vec<String> {
    let mut evicted = Vec::new();
    while map.len() > max {
        let Some(oldest) = map.keys().find(|id| id.as_str() != keep).cloned() else {
            break;
        };
        map.remove(&oldest);
        evicted.push(oldest);
    }
    evicted
}
