use std::hash::Hash;

/// A 2D axis-aligned extent represented by minimum and maximum coordinates.
///
/// `GeoExtent` defines a rectangular region in 2D space using the minimum
/// (min_x, min_y) and maximum (max_x, max_y) corners. It is the value type
/// spatial filtering operates on: every feature derives one from its shape,
/// and a range query is expressed as one.
///
/// Boundary semantics are inclusive: two extents that merely touch count as
/// intersecting.
///
/// # Examples
///
/// ```rust,ignore
/// use geofeature::GeoExtent;
///
/// let extent = GeoExtent::new(0.0, 0.0, 100.0, 100.0);
/// assert!(extent.contains_point(50.0, 50.0));
/// ```
#[derive(Clone, PartialEq, Default, Debug, serde::Deserialize, serde::Serialize)]
pub struct GeoExtent {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl Eq for GeoExtent {}

impl PartialOrd for GeoExtent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoExtent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.min_x
            .partial_cmp(&other.min_x)
            .unwrap()
            .then(self.min_y.partial_cmp(&other.min_y).unwrap())
            .then(self.max_x.partial_cmp(&other.max_x).unwrap())
            .then(self.max_y.partial_cmp(&other.max_y).unwrap())
    }
}

impl Hash for GeoExtent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.min_x.to_bits().hash(state);
        self.min_y.to_bits().hash(state);
        self.max_x.to_bits().hash(state);
        self.max_y.to_bits().hash(state);
    }
}

impl std::fmt::Display for GeoExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeoExtent({}, {}, {}, {})", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl GeoExtent {
    /// Creates a new extent with the specified corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> GeoExtent {
        GeoExtent {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the width of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the area of the extent.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the center point of the extent.
    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Checks if this extent contains a point. Boundary points count.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Checks if this extent fully contains another extent.
    pub fn contains(&self, other: &GeoExtent) -> bool {
        other.min_x >= self.min_x && other.max_x <= self.max_x
            && other.min_y >= self.min_y && other.max_y <= self.max_y
    }

    /// Checks if this extent intersects another extent.
    ///
    /// Inclusive on boundary touch: extents that share only an edge or a
    /// corner still intersect.
    pub fn intersects(&self, other: &GeoExtent) -> bool {
        self.min_x <= other.max_x && self.max_x >= other.min_x
            && self.min_y <= other.max_y && self.max_y >= other.min_y
    }

    /// Returns the union of this extent with another.
    pub fn union(&self, other: &GeoExtent) -> GeoExtent {
        GeoExtent::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Returns the intersection of this extent with another, if they intersect.
    pub fn intersection(&self, other: &GeoExtent) -> Option<GeoExtent> {
        if !self.intersects(other) {
            return None;
        }
        Some(GeoExtent::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        ))
    }

    /// Checks if this extent is a point (zero area).
    pub fn is_point(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    /// Checks if this extent is valid (min <= max on both axes).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new() {
        let extent = GeoExtent::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(extent.min_x, 1.0);
        assert_eq!(extent.min_y, 2.0);
        assert_eq!(extent.max_x, 3.0);
        assert_eq!(extent.max_y, 4.0);
    }

    #[test]
    fn test_default() {
        let extent = GeoExtent::default();
        assert_eq!(extent.min_x, 0.0);
        assert_eq!(extent.max_y, 0.0);
        assert!(extent.is_point());
    }

    #[test]
    fn test_intersects() {
        let a = GeoExtent::new(0.0, 0.0, 10.0, 10.0);
        let b = GeoExtent::new(5.0, 5.0, 15.0, 15.0);
        let c = GeoExtent::new(20.0, 20.0, 30.0, 30.0);
        let touching = GeoExtent::new(10.0, 10.0, 20.0, 20.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching)); // Touching counts as intersection
    }

    #[test]
    fn test_intersects_edge_touch_only() {
        let a = GeoExtent::new(0.0, 0.0, 5.0, 5.0);
        let b = GeoExtent::new(5.0, 0.0, 10.0, 5.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_self() {
        let extent = GeoExtent::new(-1.0, -1.0, 1.0, 1.0);
        assert!(extent.intersects(&extent));
    }

    #[test]
    fn test_contains() {
        let outer = GeoExtent::new(0.0, 0.0, 10.0, 10.0);
        let inner = GeoExtent::new(2.0, 2.0, 8.0, 8.0);
        let overlapping = GeoExtent::new(5.0, 5.0, 15.0, 15.0);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&overlapping));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_contains_point() {
        let extent = GeoExtent::new(0.0, 0.0, 10.0, 10.0);
        assert!(extent.contains_point(5.0, 5.0));
        assert!(extent.contains_point(0.0, 0.0));
        assert!(extent.contains_point(10.0, 10.0));
        assert!(!extent.contains_point(10.1, 5.0));
        assert!(!extent.contains_point(5.0, -0.1));
    }

    #[test]
    fn test_union() {
        let a = GeoExtent::new(0.0, 0.0, 5.0, 5.0);
        let b = GeoExtent::new(3.0, 3.0, 10.0, 10.0);
        let union = a.union(&b);
        assert_eq!(union, GeoExtent::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_intersection() {
        let a = GeoExtent::new(0.0, 0.0, 10.0, 10.0);
        let b = GeoExtent::new(5.0, 5.0, 15.0, 15.0);
        let c = GeoExtent::new(20.0, 20.0, 30.0, 30.0);

        assert_eq!(a.intersection(&b), Some(GeoExtent::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn test_dimensions() {
        let extent = GeoExtent::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(extent.width(), 3.0);
        assert_eq!(extent.height(), 6.0);
        assert_eq!(extent.area(), 18.0);
        assert_eq!(extent.center(), (2.5, 5.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(GeoExtent::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(GeoExtent::new(1.0, 1.0, 1.0, 1.0).is_valid());
        assert!(!GeoExtent::new(2.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!GeoExtent::new(0.0, 2.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_hash_and_eq() {
        let mut set = HashSet::new();
        set.insert(GeoExtent::new(0.0, 0.0, 1.0, 1.0));
        set.insert(GeoExtent::new(0.0, 0.0, 1.0, 1.0));
        set.insert(GeoExtent::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering() {
        let a = GeoExtent::new(0.0, 0.0, 1.0, 1.0);
        let b = GeoExtent::new(1.0, 0.0, 2.0, 1.0);
        assert!(a < b);
    }

    #[test]
    fn test_display() {
        let extent = GeoExtent::new(0.0, 0.5, 1.0, 1.5);
        assert_eq!(format!("{}", extent), "GeoExtent(0, 0.5, 1, 1.5)");
    }
}
