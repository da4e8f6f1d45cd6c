use geofeature::cursor::FeatureCursor;
use geofeature::errors::{ErrorKind, FeatureError};
use geofeature::extent::GeoExtent;
use thiserror::Error;

/// Errors that can occur in spatial query operations.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("store is closed")]
    Closed,

    #[error("invalid query extent: {0}")]
    InvalidExtent(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<SpatialError> for FeatureError {
    fn from(err: SpatialError) -> Self {
        match err {
            SpatialError::Closed => FeatureError::new(
                "spatial query over a closed store",
                ErrorKind::StoreAlreadyClosed,
            ),
            SpatialError::InvalidExtent(msg) => FeatureError::new(
                &format!("invalid query extent: {}", msg),
                ErrorKind::ValidationError,
            ),
            SpatialError::InvalidOperation(msg) => {
                FeatureError::new(&msg, ErrorKind::Extension("spatial".to_string()))
            }
        }
    }
}

impl From<FeatureError> for SpatialError {
    fn from(err: FeatureError) -> Self {
        match err.kind() {
            ErrorKind::StoreAlreadyClosed => SpatialError::Closed,
            ErrorKind::ValidationError => {
                SpatialError::InvalidExtent(err.message().to_string())
            }
            _ => SpatialError::InvalidOperation(err.message().to_string()),
        }
    }
}

/// Result type for spatial query operations.
pub type SpatialResult<T> = Result<T, SpatialError>;

/// A component mapping a query extent to the features intersecting it.
///
/// # Purpose
/// Defines the contract every spatial index satisfies, whatever structure
/// it uses internally. `create_cursor` returns a cursor over exactly the
/// features whose extent intersects the query extent: no omissions, no
/// extras, no id repeated within one query's result.
///
/// # Ordering
/// Result ordering must be deterministic for a fixed store state, and each
/// implementation documents its ordering. The brute-force baseline
/// ([`crate::SimpleSpatialIndex`]) preserves store scan order.
///
/// # Cost
/// The contract says nothing about scan cost; the baseline is O(n) per
/// query, and replacing it with a sub-linear structure behind this same
/// trait is the intended upgrade path.
pub trait SpatialIndex: Send + Sync {
    /// Creates a cursor over the features intersecting `extent`.
    ///
    /// Boundary touch counts as intersection. Fails fast with
    /// [`SpatialError::Closed`] when the backing store is no longer valid.
    fn create_cursor(&self, extent: &GeoExtent) -> SpatialResult<Box<dyn FeatureCursor>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_error_into_feature_error() {
        let err: FeatureError = SpatialError::Closed.into();
        assert_eq!(err.kind(), &ErrorKind::StoreAlreadyClosed);

        let err: FeatureError = SpatialError::InvalidExtent("min > max".to_string()).into();
        assert_eq!(err.kind(), &ErrorKind::ValidationError);

        let err: FeatureError = SpatialError::InvalidOperation("bad".to_string()).into();
        assert_eq!(err.kind(), &ErrorKind::Extension("spatial".to_string()));
    }

    #[test]
    fn test_feature_error_into_spatial_error() {
        let err = FeatureError::new("closed", ErrorKind::StoreAlreadyClosed);
        assert!(matches!(SpatialError::from(err), SpatialError::Closed));

        let err = FeatureError::new("bad extent", ErrorKind::ValidationError);
        assert!(matches!(
            SpatialError::from(err),
            SpatialError::InvalidExtent(_)
        ));

        let err = FeatureError::new("boom", ErrorKind::InternalError);
        assert!(matches!(
            SpatialError::from(err),
            SpatialError::InvalidOperation(_)
        ));
    }

    #[test]
    fn test_spatial_error_display() {
        assert_eq!(format!("{}", SpatialError::Closed), "store is closed");
        assert_eq!(
            format!("{}", SpatialError::InvalidExtent("min > max".to_string())),
            "invalid query extent: min > max"
        );
    }
}
