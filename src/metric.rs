//! Ground distance between two locations.
//!
//! Every distance computation on curves takes a [`Metric`]; the methods without
//! a `_with` suffix use [`Haversine`].

use crate::data::{Distance, Location};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub trait Metric {
  fn distance(&self, from: &Location, to: &Location) -> Distance;
}

/// Great-circle distance on a spherical earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl Metric for Haversine {
  fn distance(&self, from: &Location, to: &Location) -> Distance {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let half_dlat = ((lat2 - lat1) / 2.0).abs();
    let half_dlon = ((to.longitude().to_radians() - from.longitude().to_radians()) / 2.0).abs();
    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    Distance::meters(EARTH_RADIUS_METERS * c)
  }
}

/// Equirectangular projection. Cheaper than [`Haversine`] and accurate for
/// short distances away from the poles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equirectangular;

impl Metric for Equirectangular {
  fn distance(&self, from: &Location, to: &Location) -> Distance {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let dlon = to.longitude().to_radians() - from.longitude().to_radians();
    let x = dlon * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;
    Distance::meters(EARTH_RADIUS_METERS * x.hypot(y))
  }
}

impl<M: Metric + ?Sized> Metric for &M {
  fn distance(&self, from: &Location, to: &Location) -> Distance {
    (**self).distance(from, to)
  }
}
