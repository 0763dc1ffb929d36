use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_zoom::{FrameBuffer, RasterSpec, ZoomConfig, ZoomPreset, ZoomState, render_frame};

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for preset in [ZoomPreset::Classic, ZoomPreset::Rapid] {
        let config = ZoomConfig {
            raster: RasterSpec::new(320, 320).unwrap(),
            start_paused: false,
            ..ZoomConfig::from_preset(preset)
        };
        let mut state = ZoomState::from_config(&config).unwrap();
        // a few frames in, so the depth cap has grown past its start value
        for _ in 0..30 {
            state.advance();
        }
        let mut buffer = FrameBuffer::new(config.raster);

        group.bench_function(preset.display_name(), |b| {
            b.iter(|| render_frame(black_box(&state), &mut buffer))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
