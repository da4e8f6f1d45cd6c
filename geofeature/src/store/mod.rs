pub mod memory;

use crate::cursor::FeatureCursor;
use crate::errors::FeatureResult;
use crate::feature::{Feature, FeatureId};
use std::sync::Arc;

/// Low-level interface for feature store backends.
///
/// # Purpose
/// Defines the contract the spatial-query layer consumes. A store is a keyed
/// collection of features supporting point lookup by id and a full,
/// unfiltered scan in a stable store-defined order.
///
/// # Key Responsibilities
/// - **Point lookup**: `get_feature()` returns the feature for an id, or an
///   absent result for an unknown id, never an error for a missing key
/// - **Full scan**: `create_cursor()` yields every feature, unfiltered, in
///   the store's own stable order
/// - **Lifecycle**: `is_closed()` / `close()`; a closed store is the
///   invalid-handle state cursors degrade against
///
/// # Thread Safety
/// Implementers must be `Send + Sync` and must tolerate concurrent read-only
/// `get_feature` calls from multiple independent cursors.
pub trait FeatureStoreProvider: Send + Sync {
    /// Retrieves the feature for `id`.
    ///
    /// # Returns
    /// * `Ok(Some(feature))` if the id is known
    /// * `Ok(None)` if the id is unknown or was deleted
    /// * `Err(FeatureError)` if the store itself is unusable (e.g. closed)
    fn get_feature(&self, id: &FeatureId) -> FeatureResult<Option<Feature>>;

    /// Creates a cursor over every feature in store-defined order.
    ///
    /// The cursor is a snapshot: store mutations after creation are not
    /// reflected in its candidate set.
    fn create_cursor(&self) -> FeatureResult<Box<dyn FeatureCursor>>;

    /// Checks whether the store has been closed.
    fn is_closed(&self) -> bool;

    /// Closes the store. Idempotent.
    fn close(&self) -> FeatureResult<()>;

    /// Returns the number of features currently held.
    fn size(&self) -> FeatureResult<usize>;
}

/// A shared, reference-counted handle to a feature store.
///
/// `FeatureStore` is the ownership seam between an index and the cursors it
/// produces: all of them clone the same handle, and the underlying store
/// lives as long as the longest-lived holder. A cursor outliving its
/// originating index therefore remains usable as long as the store itself
/// has not been closed.
#[derive(Clone)]
pub struct FeatureStore {
    inner: Arc<dyn FeatureStoreProvider>,
}

impl FeatureStore {
    /// Wraps a provider implementation in a shared handle.
    pub fn new(provider: impl FeatureStoreProvider + 'static) -> Self {
        FeatureStore {
            inner: Arc::new(provider),
        }
    }

    pub fn get_feature(&self, id: &FeatureId) -> FeatureResult<Option<Feature>> {
        self.inner.get_feature(id)
    }

    pub fn create_cursor(&self) -> FeatureResult<Box<dyn FeatureCursor>> {
        self.inner.create_cursor()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    pub fn close(&self) -> FeatureResult<()> {
        self.inner.close()
    }

    pub fn size(&self) -> FeatureResult<usize> {
        self.inner.size()
    }

    pub fn is_empty(&self) -> FeatureResult<bool> {
        Ok(self.size()? == 0)
    }
}
