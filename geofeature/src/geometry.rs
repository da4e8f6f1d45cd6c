use crate::extent::GeoExtent;

/// A 2D coordinate pair.
#[derive(Clone, Copy, PartialEq, Default, Debug, serde::Deserialize, serde::Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Coordinate {
        Coordinate { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The geometric payload of a feature.
///
/// `GeoShape` covers the shape kinds the query layer needs to derive
/// bounding extents from: single points, line strings, and simple polygons
/// (outer ring only, no holes). The shape is immutable once attached to a
/// feature; the only operation the spatial layer requires of it is
/// [`GeoShape::extent`].
///
/// # Examples
///
/// ```rust,ignore
/// use geofeature::GeoShape;
///
/// let shape = GeoShape::point(1.0, 2.0);
/// let extent = shape.extent();
/// assert!(extent.is_point());
/// ```
#[derive(Clone, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
pub enum GeoShape {
    /// A single coordinate
    Point(Coordinate),
    /// An open sequence of coordinates
    LineString(Vec<Coordinate>),
    /// A closed ring of coordinates (outer ring only)
    Polygon(Vec<Coordinate>),
}

impl GeoShape {
    /// Creates a point shape from raw coordinates.
    pub fn point(x: f64, y: f64) -> GeoShape {
        GeoShape::Point(Coordinate::new(x, y))
    }

    /// Creates a line string shape from a coordinate sequence.
    pub fn line_string(coordinates: Vec<Coordinate>) -> GeoShape {
        GeoShape::LineString(coordinates)
    }

    /// Creates a polygon shape from its outer ring.
    pub fn polygon(ring: Vec<Coordinate>) -> GeoShape {
        GeoShape::Polygon(ring)
    }

    /// Creates an axis-aligned rectangle polygon covering `extent`.
    pub fn rectangle(extent: &GeoExtent) -> GeoShape {
        GeoShape::Polygon(vec![
            Coordinate::new(extent.min_x, extent.min_y),
            Coordinate::new(extent.max_x, extent.min_y),
            Coordinate::new(extent.max_x, extent.max_y),
            Coordinate::new(extent.min_x, extent.max_y),
        ])
    }

    /// Checks whether the shape has no coordinates at all.
    ///
    /// A point is never empty; line strings and polygons are empty when
    /// their coordinate sequence is.
    pub fn is_empty(&self) -> bool {
        match self {
            GeoShape::Point(_) => false,
            GeoShape::LineString(coordinates) => coordinates.is_empty(),
            GeoShape::Polygon(ring) => ring.is_empty(),
        }
    }

    /// Computes the bounding extent of this shape.
    ///
    /// A point yields a degenerate (zero-area) extent. An empty line string
    /// or polygon yields the default extent.
    pub fn extent(&self) -> GeoExtent {
        match self {
            GeoShape::Point(coordinate) => {
                GeoExtent::new(coordinate.x, coordinate.y, coordinate.x, coordinate.y)
            }
            GeoShape::LineString(coordinates) => extent_of(coordinates),
            GeoShape::Polygon(ring) => extent_of(ring),
        }
    }
}

fn extent_of(coordinates: &[Coordinate]) -> GeoExtent {
    let mut iter = coordinates.iter();
    let first = match iter.next() {
        Some(coordinate) => coordinate,
        None => return GeoExtent::default(),
    };

    let mut extent = GeoExtent::new(first.x, first.y, first.x, first.y);
    for coordinate in iter {
        extent.min_x = extent.min_x.min(coordinate.x);
        extent.min_y = extent.min_y.min(coordinate.y);
        extent.max_x = extent.max_x.max(coordinate.x);
        extent.max_y = extent.max_y.max(coordinate.y);
    }
    extent
}
