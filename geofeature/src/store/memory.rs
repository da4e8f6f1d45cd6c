use crate::cursor::{FeatureCursor, FeatureCursorImpl};
use crate::errors::{ErrorKind, FeatureError, FeatureResult};
use crate::feature::{Feature, FeatureId};
use crate::store::{FeatureStore, FeatureStoreProvider};
use crossbeam_skiplist::SkipMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration for an in-memory feature store.
///
/// Arc-shared and cheap to clone; carries the store name used in log
/// output.
#[derive(Clone)]
pub struct MemoryStoreConfig {
    inner: Arc<MemoryStoreConfigInner>,
}

struct MemoryStoreConfigInner {
    store_name: String,
}

impl MemoryStoreConfig {
    /// Creates a config with the default store name.
    pub fn new() -> MemoryStoreConfig {
        MemoryStoreConfig::with_name("in-memory")
    }

    /// Creates a config with an explicit store name.
    pub fn with_name(store_name: &str) -> MemoryStoreConfig {
        MemoryStoreConfig {
            inner: Arc::new(MemoryStoreConfigInner {
                store_name: store_name.to_string(),
            }),
        }
    }

    pub fn store_name(&self) -> &str {
        &self.inner.store_name
    }
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        MemoryStoreConfig::new()
    }
}

/// In-memory feature store backed by a concurrent skip list.
///
/// # Purpose
/// `InMemoryFeatureStore` is the reference [`FeatureStoreProvider`]: a
/// thread-safe, ordered map from [`FeatureId`] to [`Feature`]. The skip
/// list keeps features in ascending id order, which is the stable
/// store-defined order its unfiltered cursors scan in.
///
/// # Characteristics
/// - **Thread-Safe**: can be cloned cheaply and shared across threads;
///   concurrent reads from independent cursors are safe
/// - **Ordered Scan**: `create_cursor` yields features in ascending id order
/// - **Snapshot Cursors**: each cursor captures the id set at creation time
/// - **Lifecycle**: a closed store rejects reads and writes
#[derive(Clone)]
pub struct InMemoryFeatureStore {
    inner: Arc<InMemoryFeatureStoreInner>,
}

struct InMemoryFeatureStoreInner {
    config: MemoryStoreConfig,
    features: SkipMap<FeatureId, Feature>,
    closed: AtomicBool,
}

impl InMemoryFeatureStore {
    /// Creates an empty in-memory store.
    ///
    /// Ensures the process-wide geometry runtime is registered before any
    /// shapes are materialized.
    pub fn new(config: MemoryStoreConfig) -> Self {
        crate::registry::register_geometry_runtime();
        InMemoryFeatureStore {
            inner: Arc::new(InMemoryFeatureStoreInner {
                config,
                features: SkipMap::new(),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Wraps this store in a shared [`FeatureStore`] handle.
    pub fn as_store(&self) -> FeatureStore {
        FeatureStore::new(self.clone())
    }

    /// Inserts a feature, replacing any feature with the same id.
    pub fn insert(&self, feature: Feature) -> FeatureResult<()> {
        self.check_open()?;
        self.inner.features.insert(feature.id(), feature);
        Ok(())
    }

    /// Removes a feature by id, returning it if it was present.
    pub fn remove(&self, id: &FeatureId) -> FeatureResult<Option<Feature>> {
        self.check_open()?;
        Ok(self
            .inner
            .features
            .remove(id)
            .map(|entry| entry.value().clone()))
    }

    fn check_open(&self) -> FeatureResult<()> {
        if self.inner.closed.load(Ordering::SeqCst) {
            return Err(FeatureError::new(
                &format!("store '{}' is closed", self.inner.config.store_name()),
                ErrorKind::StoreAlreadyClosed,
            ));
        }
        Ok(())
    }
}

impl FeatureStoreProvider for InMemoryFeatureStore {
    fn get_feature(&self, id: &FeatureId) -> FeatureResult<Option<Feature>> {
        self.check_open()?;
        Ok(self
            .inner
            .features
            .get(id)
            .map(|entry| entry.value().clone()))
    }

    fn create_cursor(&self) -> FeatureResult<Box<dyn FeatureCursor>> {
        self.check_open()?;
        let ids: Vec<FeatureId> = self
            .inner
            .features
            .iter()
            .map(|entry| *entry.key())
            .collect();
        log::debug!(
            "store '{}': full cursor over {} features",
            self.inner.config.store_name(),
            ids.len()
        );
        Ok(Box::new(FeatureCursorImpl::new(ids, self.as_store())))
    }

    fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    fn close(&self) -> FeatureResult<()> {
        self.inner.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn size(&self) -> FeatureResult<usize> {
        self.check_open()?;
        Ok(self.inner.features.len())
    }
}
