//! # Geofeature - Feature Model and Cursors for Geographic Data
//!
//! This crate provides the feature identity model, the feature store
//! contract, and the restartable cursor machinery that spatial query layers
//! build on.
//!
//! ## Features
//!
//! - **Feature Model**: validated opaque ids, immutable shapes, opaque
//!   attribute bags
//! - **Extents**: axis-aligned bounding extents with inclusive-boundary
//!   intersection
//! - **Store Contract**: point lookup plus full ordered scan, with a
//!   skip-list-backed in-memory reference implementation
//! - **Cursors**: restartable, forward-only, snapshot-based iteration with
//!   fetch-on-demand
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geofeature::{
//!     Feature, FeatureId, GeoShape, InMemoryFeatureStore, MemoryStoreConfig,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryFeatureStore::new(MemoryStoreConfig::new());
//! let id = FeatureId::create_id(1)?;
//! store.insert(Feature::new(id, GeoShape::point(12.5, 41.9))?)?;
//!
//! let mut cursor = store.as_store().create_cursor()?;
//! while cursor.has_next() {
//!     if let Some(feature) = cursor.next() {
//!         println!("{} -> {}", feature.id(), feature.extent());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Cursor contract
//!
//! End of sequence is signaled only by `has_next()`; `next()` returning an
//! absent value means the store no longer holds the feature at that
//! position. `next()` called past exhaustion returns the previously cached
//! value unchanged, a carried-over behavior of the reference
//! implementation, kept for compatibility.

pub mod cursor;
pub mod errors;
pub mod extent;
pub mod feature;
pub mod geometry;
pub mod registry;
pub mod store;

pub use cursor::{FeatureCursor, FeatureCursorImpl};
pub use extent::GeoExtent;
pub use feature::{Attributes, Feature, FeatureId};
pub use geometry::{Coordinate, GeoShape};
pub use registry::{is_geometry_runtime_registered, register_geometry_runtime};
pub use store::memory::{InMemoryFeatureStore, MemoryStoreConfig};
pub use store::{FeatureStore, FeatureStoreProvider};
