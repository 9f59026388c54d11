//! Benchmarks for the per-pixel gain map math.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use gainmap_codec::{
    CodecConfig, GainMapCodec, ImageSource, MapFilter, apply_gain, encode_gain,
    pack_rgba1010102,
};
use gainmap_core::{Color, ColorGamut, GainMapImage, P010Image, Yuv420Image};
use gainmap_primaries::gamut_to_gamut_transform;
use gainmap_transfer::{hlg, pq, srgb};

/// Transfer curves over a ramp.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_inv_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::inv_oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hlg_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| hlg::oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hlg_inv_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| hlg::inv_oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("pq_oetf", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| pq::oetf(black_box(x * pq::L_MAX)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Gain encode and apply.
fn bench_gain(c: &mut Criterion) {
    let mut group = c.benchmark_group("gain");

    let pairs: Vec<(f32, f32)> = (1..=10000)
        .map(|i| {
            let t = i as f32 / 10000.0;
            (t, t * (1.0 + 3.0 * t))
        })
        .collect();
    let colors: Vec<Color> = pairs.iter().map(|&(s, _)| Color::new(s, s * 0.5, s * 0.25)).collect();
    let codec = GainMapCodec::new(CodecConfig::default()).unwrap();

    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("encode_gain", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|&(s, h)| encode_gain(black_box(s), black_box(h), 4.0))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("codec_encode_gain", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|&(s, h)| codec.encode_gain(black_box(s), black_box(h)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("apply_gain", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&e| apply_gain(black_box(e), 0.5, 4.0))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("codec_apply_gain", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&e| codec.apply_gain(black_box(e), 0.5))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Gamut conversion through the lookup.
fn bench_gamut(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamut");

    let colors: Vec<Color> = (0..10000)
        .map(|i| {
            let t = i as f32 / 10000.0;
            Color::new(t, 1.0 - t, 0.5)
        })
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    for (sdr, hdr) in [
        (ColorGamut::Bt709, ColorGamut::Bt709),
        (ColorGamut::Bt709, ColorGamut::Bt2100),
        (ColorGamut::DisplayP3, ColorGamut::Bt2100),
    ] {
        let Some(f) = gamut_to_gamut_transform(sdr, hdr) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("convert", format!("{hdr}_to_{sdr}")),
            &colors,
            |b, v| b.iter(|| v.iter().map(|&e| f(black_box(e))).collect::<Vec<_>>()),
        );
    }

    group.finish();
}

/// Map sampling over a full-resolution frame.
fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    let (w, h, scale) = (480, 270, 4);
    let data: Vec<u8> = (0..w * h).map(|i| (i % 256) as u8).collect();
    let map = GainMapImage::new(w, h, &data).unwrap();

    group.throughput(Throughput::Elements((w * scale * h * scale) as u64));

    for filter in [MapFilter::Legacy, MapFilter::Bilinear] {
        group.bench_function(BenchmarkId::new("sample", format!("{filter:?}")), |b| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for y in 0..h * scale {
                    for x in 0..w * scale {
                        acc += filter.sample(&map, scale, black_box(x), black_box(y));
                    }
                }
                acc
            })
        });
    }

    group.finish();
}

/// Box-averaged source sampling and output packing.
fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");

    let (w, h) = (1920, 1080);
    let yuv: Vec<u8> = (0..w * h * 3 / 2).map(|i| (i % 251) as u8).collect();
    let p010: Vec<u16> = (0..w * h * 3 / 2).map(|i| ((i % 1021) as u16) << 6).collect();
    let sources = [
        ("yuv420", ImageSource::from(Yuv420Image::new(w, h, &yuv).unwrap())),
        ("p010", ImageSource::from(P010Image::new(w, h, &p010).unwrap())),
    ];

    for scale in [2, 4] {
        let (mw, mh) = (w / scale, h / scale);
        group.throughput(Throughput::Elements((mw * mh) as u64));

        for (name, source) in &sources {
            group.bench_function(BenchmarkId::new(*name, scale), |b| {
                b.iter(|| {
                    let mut acc = Color::ZERO;
                    for y in 0..mh {
                        for x in 0..mw {
                            acc += source.sample(scale, black_box(x), black_box(y));
                        }
                    }
                    acc
                })
            });
        }
    }

    let colors: Vec<Color> = (0..10000)
        .map(|i| Color::splat(i as f32 / 10000.0))
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));
    group.bench_function("pack_rgba1010102", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&e| pack_rgba1010102(black_box(e)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_transfer,
    bench_gain,
    bench_gamut,
    bench_map,
    bench_sampler,
);
criterion_main!(benches);
