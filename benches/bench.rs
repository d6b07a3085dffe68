#![feature(test)]
/// Notes
/// 1. Every bench has 1,000 conversion
/// 2. Every point is in China, the offset series is always evaluated
extern crate test;

use test::Bencher;

use marstrans::{gcj02, Converter, GeoPoint, ReferenceSystem};

const REPEAT: usize = 50;
const POINTS: [GeoPoint; 20] = [
    GeoPoint::new(39.90923, 116.39737),
    GeoPoint::new(31.23039, 121.47370),
    GeoPoint::new(22.54310, 114.05787),
    GeoPoint::new(23.12911, 113.26436),
    GeoPoint::new(30.59276, 114.30525),
    GeoPoint::new(30.65946, 104.06573),
    GeoPoint::new(34.34127, 108.93984),
    GeoPoint::new(29.56301, 106.55156),
    GeoPoint::new(36.06708, 120.38260),
    GeoPoint::new(41.80569, 123.43147),
    GeoPoint::new(45.80377, 126.53497),
    GeoPoint::new(43.82584, 87.61688),
    GeoPoint::new(29.65262, 91.17211),
    GeoPoint::new(25.04061, 102.71225),
    GeoPoint::new(26.07430, 119.29659),
    GeoPoint::new(20.04422, 110.19983),
    GeoPoint::new(36.65184, 117.12009),
    GeoPoint::new(32.06071, 118.79687),
    GeoPoint::new(30.27415, 120.15515),
    GeoPoint::new(38.04232, 114.51486),
];

fn points() -> Vec<GeoPoint> {
    let mut ps = Vec::with_capacity(POINTS.len() * REPEAT);
    for _ in 0..REPEAT {
        ps.extend(POINTS);
    }
    ps
}

macro_rules! impl_bench {
    ($name:ident, $source:ident, $target:ident) => {
        #[bench]
        fn $name(b: &mut Bencher) {
            let converter = Converter::default();
            let ps = points();

            b.iter(|| {
                let _ = converter
                    .convert_points(ReferenceSystem::$source, ReferenceSystem::$target, &ps)
                    .unwrap();
            });
        }
    };
}

impl_bench!(wgs84_to_gcj02, WGS84, GCJ02);
impl_bench!(gcj02_to_wgs84, GCJ02, WGS84);
impl_bench!(gcj02_to_bd09, GCJ02, BD09);
impl_bench!(bd09_to_gcj02, BD09, GCJ02);
impl_bench!(wgs84_to_bd09, WGS84, BD09);
impl_bench!(bd09_to_wgs84, BD09, WGS84);

#[bench]
fn gcj02_to_wgs84_exact(b: &mut Bencher) {
    let converter = Converter::default();
    let ps: Vec<_> = points()
        .iter()
        .map(|p| {
            converter
                .convert(ReferenceSystem::WGS84, ReferenceSystem::GCJ02, p)
                .unwrap()
        })
        .collect();

    let region = converter.region;
    b.iter(|| {
        let _ = ps
            .iter()
            .map(|p| gcj02::gcj02_to_wgs84_exact(p, &region).unwrap())
            .collect::<Vec<_>>();
    });
}
