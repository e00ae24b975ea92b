use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pixscale::{FilterType, Image, Raster, Rect, Rgba8, hq2x, resize};
use rand::Rng;

fn gradient_rgba(w: u32, h: u32) -> Image {
    let mut img = Raster::<Rgba8>::new(Rect::new(0, 0, w as i32, h as i32));
    let stride = img.stride();
    let pix = img.as_bytes_mut();
    for y in 0..h as usize {
        for x in 0..w as usize {
            let off = y * stride + x * 4;
            pix[off] = (x % 256) as u8;
            pix[off + 1] = (y % 256) as u8;
            pix[off + 2] = ((x + y) % 256) as u8;
            pix[off + 3] = 127;
        }
    }
    Image::Rgba8(img)
}

// Blocky sprite-like input; large flat runs with hard edges.
fn sprite_rgba(w: u32, h: u32) -> Raster<Rgba8> {
    let mut rng = rand::thread_rng();
    let palette: Vec<[u8; 4]> = (0..16)
        .map(|_| [rng.gen(), rng.gen(), rng.gen(), 255])
        .collect();

    let mut img = Raster::<Rgba8>::new(Rect::new(0, 0, w as i32, h as i32));
    let stride = img.stride();
    let pix = img.as_bytes_mut();
    for y in 0..h as usize {
        for x in 0..w as usize {
            let color = palette[(x / 8 + y / 8) % palette.len()];
            pix[y * stride + x * 4..y * stride + x * 4 + 4].copy_from_slice(&color);
        }
    }
    img
}

fn benchmark_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    group.sample_size(30);

    let img = gradient_rgba(3840, 2160);

    for res in [(1920, 1080), (1280, 720), (7680, 4320)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", res.0, res.1)),
            &res,
            |b, &(w, h)| {
                b.iter_custom(|iters| {
                    let mut total = Duration::from_secs(0);

                    for _i in 0..iters {
                        let start = Instant::now();
                        let out = resize(&img, w, h, FilterType::Lanczos3).unwrap();
                        total += start.elapsed();
                        drop(out);
                    }
                    total
                })
            },
        );
    }
}

fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    group.sample_size(30);

    let img = gradient_rgba(1920, 1080);

    for interp in [
        FilterType::NearestNeighbor,
        FilterType::Bilinear,
        FilterType::MitchellNetravali,
        FilterType::Lanczos3,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(interp), &interp, |b, &interp| {
            b.iter_custom(|iters| {
                let mut total = Duration::from_secs(0);

                for _i in 0..iters {
                    let start = Instant::now();
                    let out = resize(&img, 1280, 720, interp).unwrap();
                    total += start.elapsed();
                    drop(out);
                }
                total
            })
        });
    }
}

fn benchmark_hq2x(c: &mut Criterion) {
    let mut group = c.benchmark_group("hq2x");
    group.sample_size(30);

    for size in [64u32, 256, 1024] {
        let img = sprite_rgba(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &img, |b, img| {
            b.iter_custom(|iters| {
                let mut total = Duration::from_secs(0);

                for _i in 0..iters {
                    let start = Instant::now();
                    let out = hq2x(img);
                    total += start.elapsed();
                    drop(out);
                }
                total
            })
        });
    }
}

criterion_group!(benches, benchmark_resize, benchmark_filters, benchmark_hq2x);
criterion_main!(benches);
