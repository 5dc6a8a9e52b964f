//! Well-Known Text for curves.
//!
//! Only the subset needed at the boundary of this crate is supported:
//! `POINT (x y)` and `LINESTRING (x1 y1, x2 y2, ...)` for [`PolyLine`], and a
//! single-ring `POLYGON ((x1 y1, ..., x1 y1))` for [`Polygon`]. Coordinates are
//! written longitude first.
//!
//! ```rust
//! # use geoline::data::{Curve, PolyLine};
//! # use geoline::wkt::{TwoWayConverter, WktPolyLineConverter};
//! let line = WktPolyLineConverter
//!   .backward_convert("LINESTRING(1 1, 2 2, 3 3, 3 1, 1 1)")
//!   .unwrap();
//! assert_eq!(line.len(), 5);
//! assert_eq!(
//!   WktPolyLineConverter.forward_convert(&line),
//!   "LINESTRING (1 1, 2 2, 3 3, 3 1, 1 1)"
//! );
//! ```

use std::fmt;

use crate::data::{Curve, Dm7, Location, PolyLine, Polygon};
use crate::{Error, ParseError};

/// Two-way conversion between a geometry and its WKT text.
pub trait TwoWayConverter {
  type Geometry;
  fn forward_convert(&self, geometry: &Self::Geometry) -> String;
  fn backward_convert(&self, wkt: &str) -> Result<Self::Geometry, Error>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WktPolyLineConverter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WktPolygonConverter;

impl TwoWayConverter for WktPolyLineConverter {
  type Geometry = PolyLine;

  fn forward_convert(&self, polyline: &PolyLine) -> String {
    if polyline.is_point() {
      format!("POINT ({})", Coordinate(polyline.first()))
    } else {
      format!("LINESTRING ({})", CoordinateList(polyline.locations()))
    }
  }

  fn backward_convert(&self, wkt: &str) -> Result<PolyLine, Error> {
    let parsed = parse_tagged(wkt).and_then(|(keyword, body)| match keyword.as_str() {
      "POINT" => {
        let locations = parse_coordinates(strip_parens(body)?)?;
        if locations.len() != 1 {
          return Err(ParseError::Malformed(wkt.to_string()));
        }
        Ok(locations)
      }
      "LINESTRING" => parse_coordinates(strip_parens(body)?),
      _ => Err(ParseError::UnsupportedGeometry(keyword)),
    });
    let locations = parsed.map_err(|error| rejected(wkt, error))?;
    PolyLine::new(locations)
  }
}

impl TwoWayConverter for WktPolygonConverter {
  type Geometry = Polygon;

  fn forward_convert(&self, polygon: &Polygon) -> String {
    let closed: Vec<Location> = polygon.closed_locations().copied().collect();
    format!("POLYGON (({}))", CoordinateList(&closed))
  }

  fn backward_convert(&self, wkt: &str) -> Result<Polygon, Error> {
    let parsed = parse_tagged(wkt).and_then(|(keyword, body)| match keyword.as_str() {
      "POLYGON" => {
        let ring = strip_parens(strip_parens(body)?)?;
        if ring.contains(|c: char| c == '(' || c == ')') {
          return Err(ParseError::UnsupportedGeometry(
            "POLYGON with interior rings".to_string(),
          ));
        }
        parse_coordinates(ring)
      }
      _ => Err(ParseError::UnsupportedGeometry(keyword)),
    });
    let locations = parsed.map_err(|error| rejected(wkt, error))?;
    Polygon::new(locations)
  }
}

fn rejected(wkt: &str, error: ParseError) -> Error {
  tracing::debug!(%error, wkt, "rejected WKT");
  error.into()
}

// Splits `KEYWORD (...)` into the upper-cased keyword and the remaining text.
fn parse_tagged(wkt: &str) -> Result<(String, &str), ParseError> {
  let text = wkt.trim();
  let split = text
    .find(|c: char| c == '(' || c.is_whitespace())
    .unwrap_or(text.len());
  let (keyword, body) = text.split_at(split);
  if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
    return Err(ParseError::MissingKeyword(wkt.to_string()));
  }
  let body = body.trim();
  if body.is_empty() || body.eq_ignore_ascii_case("EMPTY") {
    return Err(ParseError::EmptyCoordinates);
  }
  Ok((keyword.to_ascii_uppercase(), body))
}

fn strip_parens(text: &str) -> Result<&str, ParseError> {
  text
    .trim()
    .strip_prefix('(')
    .and_then(|inner| inner.strip_suffix(')'))
    .map(str::trim)
    .ok_or_else(|| ParseError::Malformed(text.to_string()))
}

fn parse_coordinates(text: &str) -> Result<Vec<Location>, ParseError> {
  if text.trim().is_empty() {
    return Err(ParseError::EmptyCoordinates);
  }
  text.split(',').map(parse_coordinate).collect()
}

fn parse_coordinate(pair: &str) -> Result<Location, ParseError> {
  let tokens: Vec<&str> = pair.split_whitespace().collect();
  if tokens.len() != 2 {
    return Err(ParseError::OddCoordinateCount(tokens.len(), pair.trim().to_string()));
  }
  let number = |token: &str| {
    token
      .parse::<f64>()
      .map_err(|_| ParseError::InvalidNumber(token.to_string()))
  };
  let longitude = number(tokens[0])?;
  let latitude = number(tokens[1])?;
  Location::try_from_degrees(latitude, longitude).map_err(ParseError::OutOfRange)
}

// `lon lat`
struct Coordinate<'a>(&'a Location);

impl fmt::Display for Coordinate<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {}",
      Dm7(self.0.longitude_dm7()),
      Dm7(self.0.latitude_dm7())
    )
  }
}

// `lon lat, lon lat, ...`
struct CoordinateList<'a>(&'a [Location]);

impl fmt::Display for CoordinateList<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (idx, location) in self.0.iter().enumerate() {
      if idx > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{}", Coordinate(location))?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::ConstructionError;
  use claims::{assert_err_eq, assert_ok};
  use test_strategy::proptest;

  fn parse(text: &str) -> Result<PolyLine, Error> {
    WktPolyLineConverter.backward_convert(text)
  }

  fn parse_error(text: &str) -> Error {
    Error::Parse(match parse(text) {
      Err(Error::Parse(error)) => error,
      other => panic!("expected a parse error for {:?}, got {:?}", text, other),
    })
  }

  #[proptest]
  fn polyline_round_trip(#[strategy(any_polyline(16))] line: PolyLine) {
    let text = WktPolyLineConverter.forward_convert(&line);
    assert_eq!(parse(&text), Ok(line));
  }

  #[proptest]
  fn full_precision_round_trip(#[strategy(precise_polyline(16))] line: PolyLine) {
    let text = WktPolyLineConverter.forward_convert(&line);
    assert_eq!(parse(&text), Ok(line));
  }

  #[proptest]
  fn polygon_round_trip(#[strategy(any_polyline(16))] line: PolyLine) {
    let polygon = Polygon::from(line);
    let text = WktPolygonConverter.forward_convert(&polygon);
    assert_eq!(WktPolygonConverter.backward_convert(&text), Ok(polygon));
  }

  #[test]
  fn renders_point_and_linestring() -> Result<(), Error> {
    let a = Location::from_degrees(37.332439, -122.05576)?;
    let b = Location::from_degrees(37.33531, -122.009566)?;
    assert_eq!(PolyLine::from(a).to_wkt(), "POINT (-122.05576 37.332439)");
    assert_eq!(
      PolyLine::new(vec![a, b])?.to_wkt(),
      "LINESTRING (-122.05576 37.332439, -122.009566 37.33531)"
    );
    Ok(())
  }

  #[test]
  fn renders_polygon_closed() -> Result<(), Error> {
    let polygon = Polygon::from_wkt("POLYGON ((1 1, 2 2, 3 3, 1 3, 1 1))")?;
    assert_eq!(polygon.len(), 4);
    assert_eq!(polygon.to_wkt(), "POLYGON ((1 1, 2 2, 3 3, 1 3, 1 1))");
    Ok(())
  }

  #[test]
  fn tolerant_input() -> Result<(), Error> {
    let compact = parse("LINESTRING(-122.0095413 37.3362091,-122.0095716 37.3353178)")?;
    let spaced = parse("  linestring ( -122.0095413  37.3362091 , -122.0095716 37.3353178 )  ")?;
    assert_eq!(compact, spaced);
    assert_eq!(
      compact.to_wkt(),
      "LINESTRING (-122.0095413 37.3362091, -122.0095716 37.3353178)"
    );
    assert_ok!(parse("POINT(1 2)"));
    Ok(())
  }

  #[test]
  fn single_location_linestring() -> Result<(), Error> {
    let line = parse("LINESTRING (1 2)")?;
    assert_eq!(line, parse("POINT (1 2)")?);
    Ok(())
  }

  #[test]
  fn rejects_missing_keyword() {
    assert_eq!(
      parse_error("(1 1, 2 2)"),
      Error::Parse(ParseError::MissingKeyword("(1 1, 2 2)".to_string()))
    );
    assert_eq!(
      parse_error("1 1, 2 2"),
      Error::Parse(ParseError::MissingKeyword("1 1, 2 2".to_string()))
    );
    assert_eq!(
      parse_error(""),
      Error::Parse(ParseError::MissingKeyword(String::new()))
    );
  }

  #[test]
  fn rejects_unsupported_geometry() {
    assert_eq!(
      parse_error("MULTIPOINT (1 1, 2 2)"),
      Error::Parse(ParseError::UnsupportedGeometry("MULTIPOINT".to_string()))
    );
    assert_eq!(
      parse_error("POLYGON ((1 1, 2 2, 1 1))"),
      Error::Parse(ParseError::UnsupportedGeometry("POLYGON".to_string()))
    );
    assert_err_eq!(
      WktPolygonConverter.backward_convert("LINESTRING (1 1, 2 2)"),
      Error::Parse(ParseError::UnsupportedGeometry("LINESTRING".to_string()))
    );
    assert_err_eq!(
      WktPolygonConverter.backward_convert("POLYGON ((0 0, 4 0, 4 4, 0 0), (1 1, 2 1, 2 2, 1 1))"),
      Error::Parse(ParseError::UnsupportedGeometry(
        "POLYGON with interior rings".to_string()
      ))
    );
  }

  #[test]
  fn rejects_empty_coordinates() {
    assert_eq!(parse_error("LINESTRING EMPTY"), Error::Parse(ParseError::EmptyCoordinates));
    assert_eq!(parse_error("LINESTRING ()"), Error::Parse(ParseError::EmptyCoordinates));
    assert_eq!(parse_error("LINESTRING"), Error::Parse(ParseError::EmptyCoordinates));
    assert_eq!(parse_error("POINT ( )"), Error::Parse(ParseError::EmptyCoordinates));
  }

  #[test]
  fn rejects_odd_token_counts() {
    assert_eq!(
      parse_error("LINESTRING (1 1, 2)"),
      Error::Parse(ParseError::OddCoordinateCount(1, "2".to_string()))
    );
    assert_eq!(
      parse_error("LINESTRING (1 1 1, 2 2 2)"),
      Error::Parse(ParseError::OddCoordinateCount(3, "1 1 1".to_string()))
    );
    assert_eq!(
      parse_error("LINESTRING (1 1, , 2 2)"),
      Error::Parse(ParseError::OddCoordinateCount(0, String::new()))
    );
  }

  #[test]
  fn rejects_bad_numbers_and_parens() {
    assert_eq!(
      parse_error("LINESTRING (1 1, 2 x)"),
      Error::Parse(ParseError::InvalidNumber("x".to_string()))
    );
    assert_eq!(
      parse_error("LINESTRING 1 1, 2 2"),
      Error::Parse(ParseError::Malformed("1 1, 2 2".to_string()))
    );
    assert_eq!(
      parse_error("LINESTRING (1 1, 2 2"),
      Error::Parse(ParseError::Malformed("(1 1, 2 2".to_string()))
    );
    assert_eq!(
      parse_error("POINT (1 1, 2 2)"),
      Error::Parse(ParseError::Malformed("POINT (1 1, 2 2)".to_string()))
    );
  }

  #[test]
  fn rejects_out_of_range() {
    assert_eq!(
      parse_error("POINT (10 91)"),
      Error::Parse(ParseError::OutOfRange(ConstructionError::LatitudeOutOfRange(
        910_000_000
      )))
    );
  }
}
