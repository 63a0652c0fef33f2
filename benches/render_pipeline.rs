use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use fractal_zoom::ExplorerConfig;
use fractal_zoom::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use fractal_zoom::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use fractal_zoom::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use fractal_zoom::core::data::screen_size::ScreenSize;
use fractal_zoom::core::fractals::colour_mapping::palette::PaletteColourMap;

fn bench_render_pipeline(c: &mut Criterion) {
    let screen = ScreenSize::new(320, 240).unwrap();
    let mut session = ExplorerConfig::default().build_session().unwrap();
    session.viewport_mut().set_zoom(64.0);
    let algorithm = session.snapshot().algorithm(screen).unwrap();

    let mut group = c.benchmark_group("render_pipeline");

    group.bench_function("generate_fractal_serial", |b| {
        b.iter(|| generate_fractal_serial(black_box(&algorithm)))
    });

    group.bench_function("generate_fractal_parallel_rayon", |b| {
        b.iter(|| generate_fractal_parallel_rayon(black_box(&algorithm)))
    });

    let values = generate_fractal_parallel_rayon(&algorithm);
    let colour_map = PaletteColourMap::new(session.max_iterations());
    group.bench_function("generate_pixel_buffer", |b| {
        b.iter(|| generate_pixel_buffer(black_box(values.clone()), &colour_map, screen).unwrap())
    });

    group.bench_function("session_render_frame", |b| {
        b.iter(|| session.render_frame(black_box(screen)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
