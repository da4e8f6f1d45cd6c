use crate::index::{SpatialError, SpatialIndex, SpatialResult};
use geofeature::cursor::{FeatureCursor, FeatureCursorImpl};
use geofeature::extent::GeoExtent;
use geofeature::feature::FeatureId;
use geofeature::store::FeatureStore;
use std::sync::Arc;

/// The brute-force baseline implementation of [`SpatialIndex`].
///
/// # Purpose
/// `SimpleSpatialIndex` answers a range query with a full linear scan of
/// the store: every feature is fetched once, its extent tested against the
/// query extent, and the matching ids collected in scan order. The
/// completed id list is then wrapped in a [`FeatureCursorImpl`], which
/// re-fetches the matched features lazily as the caller consumes the
/// cursor.
///
/// Candidate generation is eager, feature delivery is lazy. Matched
/// features are therefore read from the store twice per query unless the
/// store caches; the baseline accepts that in exchange for holding no index
/// structure at all. An indexed implementation would carry precomputed
/// extents in its candidate structure and skip the second fetch while
/// keeping the cursor contract identical.
///
/// # Ordering
/// Result order equals the store's own scan order; the filter is stable
/// and performs no reordering or deduplication (store ids are unique per
/// scan already).
///
/// # Cost
/// O(n) feature fetches per query for the scan plus O(k) during
/// consumption, where n is store size and k the match count.
#[derive(Clone)]
pub struct SimpleSpatialIndex {
    inner: Arc<SimpleSpatialIndexInner>,
}

struct SimpleSpatialIndexInner {
    store: FeatureStore,
}

impl SimpleSpatialIndex {
    /// Creates an index over the given store handle.
    ///
    /// Stateless beyond the handle: candidates are recomputed on every
    /// query, so no store mutation can leave the index stale.
    pub fn new(store: FeatureStore) -> Self {
        SimpleSpatialIndex {
            inner: Arc::new(SimpleSpatialIndexInner { store }),
        }
    }

    pub fn store(&self) -> &FeatureStore {
        &self.inner.store
    }
}

impl SpatialIndex for SimpleSpatialIndex {
    fn create_cursor(&self, extent: &GeoExtent) -> SpatialResult<Box<dyn FeatureCursor>> {
        if !extent.is_valid() {
            return Err(SpatialError::InvalidExtent(format!(
                "{} has min > max",
                extent
            )));
        }
        if self.inner.store.is_closed() {
            return Err(SpatialError::Closed);
        }

        let mut scan = self.inner.store.create_cursor()?;
        let mut matches: Vec<FeatureId> = Vec::new();
        let mut scanned = 0usize;

        while scan.has_next() {
            scanned += 1;
            if let Some(feature) = scan.next() {
                if feature.extent().intersects(extent) {
                    matches.push(feature.id());
                }
            }
        }

        log::debug!(
            "spatial scan: {} of {} features intersect {}",
            matches.len(),
            scanned,
            extent
        );

        Ok(Box::new(FeatureCursorImpl::new(
            matches,
            self.inner.store.clone(),
        )))
    }
}
