mod curve;
mod distance;
mod location;
mod polygon;
mod polyline;
mod segment;

pub use curve::Curve;
pub use distance::Distance;
pub use location::Location;
pub use polygon::Polygon;
pub use polyline::PolyLine;
pub use segment::{Segment, SegmentIntersection};

pub(crate) use location::Dm7;
#[cfg(test)]
pub(crate) use location::{DM7_PER_DEGREE, MAX_LATITUDE_DM7, MAX_LONGITUDE_DM7};
