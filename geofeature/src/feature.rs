use crate::errors::{ErrorKind, FeatureError, FeatureResult};
use crate::extent::GeoExtent;
use crate::geometry::GeoShape;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static UNASSIGNED_ID_ERROR: Lazy<FeatureError> = Lazy::new(|| {
    FeatureError::new(
        "feature id must be non-zero; zero is reserved for unassigned",
        ErrorKind::InvalidId,
    )
});

/// An opaque identifier for a feature, unique within one store.
///
/// `FeatureId` is a validated newtype over `u64`. It is never reused across
/// logically distinct features within a store, and zero is reserved as the
/// "unassigned" sentinel and rejected at construction.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
    serde::Deserialize, serde::Serialize,
)]
pub struct FeatureId(u64);

impl FeatureId {
    /// Creates a feature id from a raw value.
    ///
    /// # Returns
    /// * `Ok(FeatureId)` for a non-zero value
    /// * `Err(FeatureError)` with kind `InvalidId` for zero
    pub fn create_id(value: u64) -> FeatureResult<FeatureId> {
        if value == 0 {
            return Err(UNASSIGNED_ID_ERROR.clone());
        }
        Ok(FeatureId(value))
    }

    /// Returns the raw id value.
    pub fn id_value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque string-keyed attribute bag attached to a feature.
///
/// The core never interprets attribute contents; they travel with the
/// feature and are exposed to callers verbatim.
#[derive(Clone, PartialEq, Eq, Default, Debug, serde::Deserialize, serde::Serialize)]
pub struct Attributes {
    entries: HashMap<String, String>,
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes {
            entries: HashMap::new(),
        }
    }

    /// Sets an attribute, replacing any previous value for the key.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Retrieves an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|value| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An immutable geographic feature: an identity, a shape, and attributes.
///
/// # Purpose
/// `Feature` pairs a [`FeatureId`] with an owned [`GeoShape`] and an opaque
/// [`Attributes`] bag. The id is fixed at construction, the shape is never
/// mutated afterward, and [`Feature::extent`] derives the bounding extent
/// used for spatial filtering.
///
/// # Characteristics
/// - **Immutable**: no mutation after construction
/// - **Owned shape**: the feature exclusively owns its shape for its lifetime
/// - **Validated**: construction rejects empty shapes
#[derive(Clone, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
pub struct Feature {
    id: FeatureId,
    shape: GeoShape,
    attributes: Attributes,
}

impl Feature {
    /// Creates a feature with an empty attribute bag.
    ///
    /// # Returns
    /// * `Ok(Feature)` for a non-empty shape
    /// * `Err(FeatureError)` with kind `ValidationError` for an empty shape
    pub fn new(id: FeatureId, shape: GeoShape) -> FeatureResult<Feature> {
        Feature::with_attributes(id, shape, Attributes::new())
    }

    /// Creates a feature carrying the given attributes.
    pub fn with_attributes(
        id: FeatureId,
        shape: GeoShape,
        attributes: Attributes,
    ) -> FeatureResult<Feature> {
        if shape.is_empty() {
            return Err(FeatureError::new(
                &format!("feature {} has an empty shape", id),
                ErrorKind::ValidationError,
            ));
        }
        Ok(Feature {
            id,
            shape,
            attributes,
        })
    }

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn shape(&self) -> &GeoShape {
        &self.shape
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the bounding extent of this feature's shape.
    pub fn extent(&self) -> GeoExtent {
        self.shape.extent()
    }
}
