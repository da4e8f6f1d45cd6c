//! # Geofeature Spatial - Range Queries over Feature Stores
//!
//! This crate provides the spatial query layer for geofeature stores: the
//! [`SpatialIndex`] contract mapping a query extent to the features that
//! intersect it, and the brute-force [`SimpleSpatialIndex`] baseline.
//!
//! ## Features
//!
//! - **Pluggable Contract**: any structure that answers extent queries with
//!   the same cursor contract can stand in for the baseline
//! - **Brute-Force Baseline**: full linear scan, inclusive-boundary extent
//!   filtering, deterministic scan-order results
//! - **Snapshot Cursors**: eager candidate generation, lazy feature fetch
//!   during consumption
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geofeature::{Feature, FeatureId, GeoExtent, GeoShape};
//! use geofeature::{InMemoryFeatureStore, MemoryStoreConfig};
//! use geofeature_spatial::{SimpleSpatialIndex, SpatialIndex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryFeatureStore::new(MemoryStoreConfig::new());
//! let id = FeatureId::create_id(1)?;
//! store.insert(Feature::new(id, GeoShape::point(0.5, 0.5))?)?;
//!
//! let index = SimpleSpatialIndex::new(store.as_store());
//! let mut cursor = index.create_cursor(&GeoExtent::new(0.0, 0.0, 1.0, 1.0))?;
//! while cursor.has_next() {
//!     if let Some(feature) = cursor.next() {
//!         println!("matched {}", feature.id());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod index;
pub mod simple_index;

pub use index::{SpatialError, SpatialIndex, SpatialResult};
pub use simple_index::SimpleSpatialIndex;
