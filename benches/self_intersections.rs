use criterion::{criterion_group, criterion_main, Criterion};
use geoline::data::{Curve, Location, PolyLine, Polygon};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Random walk around Cupertino with steps of up to ~100m.
fn random_walk(n: usize, rng: &mut SmallRng) -> PolyLine {
  let mut latitude = 373_324_390i64;
  let mut longitude = -1_220_557_600i64;
  let mut locations = Vec::with_capacity(n);
  for _ in 0..n {
    locations.push(Location::from_dm7(latitude, longitude).unwrap());
    latitude += rng.gen_range(-10_000..=10_000);
    longitude += rng.gen_range(-10_000..=10_000);
  }
  PolyLine::new(locations).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0x5eed);
  let short = random_walk(20, &mut rng);
  let long = random_walk(500, &mut rng);
  let ring = Polygon::from(random_walk(500, &mut rng));
  c.bench_function("PolyLine::self_intersections(20)", |b| {
    b.iter(|| short.self_intersections())
  });
  c.bench_function("PolyLine::self_intersections(500)", |b| {
    b.iter(|| long.self_intersections())
  });
  c.bench_function("Polygon::self_intersections(500)", |b| {
    b.iter(|| ring.self_intersections())
  });
  c.bench_function("PolyLine::average_distance_to(500)", |b| {
    b.iter(|| long.average_distance_to(&ring))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
