use crate::feature::{Feature, FeatureId};
use crate::store::FeatureStore;

/// A restartable, forward-only iteration capability over features.
///
/// # Purpose
/// Defines the contract every cursor in this crate satisfies: a finite,
/// snapshot-based, forward-only pass over a fixed candidate set, restartable
/// via [`FeatureCursor::reset`]. End of sequence is signaled exclusively by
/// [`FeatureCursor::has_next`]; an absent value from
/// [`FeatureCursor::next`] means "no feature at this position", never "done".
///
/// # Thread Safety
/// A single cursor instance is not safe for concurrent `next()`/`reset()`
/// calls; callers synchronize externally or use independent cursors. Use
/// independent cursors per thread of control over the same store instead.
pub trait FeatureCursor: Send {
    /// Rewinds iteration to the beginning.
    ///
    /// The underlying candidate set is untouched; calling `reset` repeatedly
    /// is idempotent.
    fn reset(&mut self);

    /// Checks whether another position remains in this pass.
    ///
    /// Pure query with no side effects; safe to call repeatedly. Returns
    /// true iff the backing store handle is still valid and the cursor has
    /// not reached the end of its snapshot.
    fn has_next(&self) -> bool;

    /// Fetches the feature at the current position and advances.
    ///
    /// The fetched value is cached and returned; it may be `None` when the
    /// store no longer holds the id at this position. When `has_next()` is
    /// false this returns the previously cached value unchanged rather than
    /// a fresh `None` (carried-over behavior of the reference
    /// implementation; see crate docs).
    fn next(&mut self) -> Option<Feature>;
}

/// A concrete cursor bound to a pre-computed id snapshot and a shared store.
///
/// # Purpose
/// `FeatureCursorImpl` iterates a fixed, ordered list of feature ids and
/// fetches the corresponding features on demand from its store handle. The
/// id list is a snapshot: insertions or removals in the store after the
/// cursor was created are not reflected in the candidate set (though a
/// removed id fetches as absent).
///
/// # Invariants
/// - `0 <= position <= ids.len()`
/// - the id list never changes after construction
pub struct FeatureCursorImpl {
    ids: Vec<FeatureId>,
    store: FeatureStore,
    position: usize,
    last_fetched: Option<Feature>,
}

impl FeatureCursorImpl {
    /// Creates a cursor over `ids` backed by `store`.
    ///
    /// Iteration starts at the beginning with nothing cached.
    pub fn new(ids: Vec<FeatureId>, store: FeatureStore) -> Self {
        FeatureCursorImpl {
            ids,
            store,
            position: 0,
            last_fetched: None,
        }
    }

    /// Returns the size of the candidate snapshot.
    pub fn size(&self) -> usize {
        self.ids.len()
    }
}

impl FeatureCursor for FeatureCursorImpl {
    fn reset(&mut self) {
        self.position = 0;
    }

    fn has_next(&self) -> bool {
        !self.store.is_closed() && self.position < self.ids.len()
    }

    fn next(&mut self) -> Option<Feature> {
        if !self.has_next() {
            return self.last_fetched.clone();
        }

        let id = self.ids[self.position];
        self.position += 1;

        let fetched = match self.store.get_feature(&id) {
            Ok(feature) => feature,
            Err(err) => {
                // The store went away between has_next and the fetch;
                // absence is the contract's answer, not a panic.
                log::warn!("feature fetch failed for id {}: {}", id, err);
                None
            }
        };

        self.last_fetched = fetched.clone();
        fetched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;
    use crate::geometry::GeoShape;
    use crate::store::memory::{InMemoryFeatureStore, MemoryStoreConfig};
    use crate::store::FeatureStoreProvider;

    fn feature(id: u64, x: f64, y: f64) -> Feature {
        let id = FeatureId::create_id(id).unwrap();
        Feature::new(id, GeoShape::point(x, y)).unwrap()
    }

    fn populated_store(count: u64) -> InMemoryFeatureStore {
        let store = InMemoryFeatureStore::new(MemoryStoreConfig::new());
        for i in 1..=count {
            store.insert(feature(i, i as f64, i as f64)).unwrap();
        }
        store
    }

    fn ids(values: &[u64]) -> Vec<FeatureId> {
        values
            .iter()
            .map(|v| FeatureId::create_id(*v).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_snapshot_has_no_next() {
        let store = populated_store(3);
        let cursor = FeatureCursorImpl::new(vec![], store.as_store());
        assert!(!cursor.has_next());
        assert_eq!(cursor.size(), 0);
    }

    #[test]
    fn test_iteration_in_snapshot_order() {
        let store = populated_store(3);
        let mut cursor = FeatureCursorImpl::new(ids(&[3, 1, 2]), store.as_store());

        let fetched: Vec<u64> = std::iter::from_fn(|| {
            if cursor.has_next() {
                cursor.next().map(|f| f.id().id_value())
            } else {
                None
            }
        })
        .collect();

        assert_eq!(fetched, vec![3, 1, 2]);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let store = populated_store(2);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2]), store.as_store());

        for _ in 0..10 {
            assert!(cursor.has_next());
        }
        let first = cursor.next().unwrap();
        assert_eq!(first.id().id_value(), 1);
        // has_next alone never advanced the cursor
        assert!(cursor.has_next());
    }

    #[test]
    fn test_reset_reproduces_sequence() {
        let store = populated_store(3);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2, 3]), store.as_store());

        let mut first_pass = Vec::new();
        while cursor.has_next() {
            first_pass.push(cursor.next().map(|f| f.id().id_value()));
        }

        cursor.reset();
        let mut second_pass = Vec::new();
        while cursor.has_next() {
            second_pass.push(cursor.next().map(|f| f.id().id_value()));
        }

        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 3);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let store = populated_store(2);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2]), store.as_store());
        cursor.next();
        cursor.reset();
        cursor.reset();
        assert_eq!(cursor.next().unwrap().id().id_value(), 1);
    }

    #[test]
    fn test_next_past_exhaustion_returns_last_fetched() {
        let store = populated_store(2);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2]), store.as_store());

        cursor.next();
        let last = cursor.next().unwrap();
        assert!(!cursor.has_next());

        // Sticky last value past exhaustion, not a fresh None.
        let past_end = cursor.next();
        assert_eq!(past_end.unwrap().id(), last.id());
    }

    #[test]
    fn test_next_past_exhaustion_on_empty_snapshot_is_none() {
        let store = populated_store(1);
        let mut cursor = FeatureCursorImpl::new(vec![], store.as_store());
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_removed_id_fetches_as_absent_mid_sequence() {
        let store = populated_store(3);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2, 3]), store.as_store());

        store.remove(&FeatureId::create_id(2).unwrap()).unwrap();

        assert_eq!(cursor.next().unwrap().id().id_value(), 1);
        // Position 2 is absent, not end-of-sequence.
        assert!(cursor.next().is_none());
        assert!(cursor.has_next());
        assert_eq!(cursor.next().unwrap().id().id_value(), 3);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_closed_store_reports_no_next() {
        let store = populated_store(3);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2, 3]), store.as_store());

        let first = cursor.next().unwrap();
        store.close().unwrap();

        assert!(!cursor.has_next());
        // No fetch is attempted; the cached value comes back.
        assert_eq!(cursor.next().unwrap().id(), first.id());
    }

    #[test]
    fn test_closed_store_before_any_fetch_yields_none() {
        let store = populated_store(3);
        let mut cursor = FeatureCursorImpl::new(ids(&[1, 2, 3]), store.as_store());

        store.close().unwrap();

        assert!(!cursor.has_next());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_snapshot_does_not_observe_later_insertions() {
        let store = populated_store(2);
        let mut cursor = store.as_store().create_cursor().unwrap();

        store.insert(feature(99, 0.0, 0.0)).unwrap();

        let mut count = 0;
        while cursor.has_next() {
            cursor.next();
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_cursor_outlives_originating_scope() {
        let mut cursor = {
            let store = populated_store(2);
            FeatureCursorImpl::new(ids(&[1, 2]), store.as_store())
        };
        // The store is shared into the cursor and stays alive with it.
        assert!(cursor.has_next());
        assert_eq!(cursor.next().unwrap().id().id_value(), 1);
    }
}
