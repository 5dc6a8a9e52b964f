use thiserror::Error;

/// Top-level error type for location and curve handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Construction(#[from] ConstructionError),

  #[error(transparent)]
  Parse(#[from] ParseError),
}

/// Errors raised while building locations and curves from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
  #[error("a curve needs at least one location")]
  EmptyCurve,

  #[error("latitude {0} (dm7) is out of range [-90, 90]")]
  LatitudeOutOfRange(i64),

  #[error("longitude {0} (dm7) is out of range [-180, 180]")]
  LongitudeOutOfRange(i64),

  #[error("{0} is not a finite number of degrees")]
  NotFinite(String),
}

/// Errors raised while reading text: WKT geometries and `"lat, lon"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("missing geometry keyword in {0:?}")]
  MissingKeyword(String),

  #[error("unsupported geometry {0:?}")]
  UnsupportedGeometry(String),

  #[error("geometry has no coordinates")]
  EmptyCoordinates,

  #[error("expected a coordinate pair, found {0} value(s) in {1:?}")]
  OddCoordinateCount(usize, String),

  #[error("invalid number {0:?}")]
  InvalidNumber(String),

  #[error("malformed geometry text {0:?}")]
  Malformed(String),

  #[error("coordinate out of range: {0}")]
  OutOfRange(ConstructionError),
}
