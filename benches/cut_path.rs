use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cutcorner::lyon::math::point;
use cutcorner::{
    Capabilities, Color, CornerCutPathBuilder, CornerCuts, CutCornerConfig, CutPath, Host,
    MeshCanvas, Rect, RecordingCanvas, Stroke,
};

struct NoopHost;

impl Host for NoopHost {
    fn invalidate(&mut self) {}
}

fn bench_rebuild(c: &mut Criterion) {
    let rect = Rect::new(point(0.0, 0.0), point(320.0, 180.0));
    let cuts = CornerCuts::new(24.0, 0.0, 12.0, 24.0);
    let mut path = CutPath::new();

    c.bench_function("cut_path_rebuild", |b| {
        b.iter(|| {
            path.rebuild(black_box(&rect), black_box(&cuts), 24.0, black_box(2.5));
            black_box(path.len())
        })
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut builder = CornerCutPathBuilder::new();
    builder.attach(
        NoopHost,
        CutCornerConfig::new(CornerCuts::uniform(16.0), Stroke::new(4.0, Color::BLACK)),
    );
    builder.resize(320.0, 180.0);

    let mut recording = RecordingCanvas::new(Capabilities {
        path_difference: true,
    });
    c.bench_function("draw_recording", |b| {
        b.iter(|| {
            builder.pre_draw(&mut recording);
            builder.draw_path(&mut recording);
            black_box(recording.take_commands())
        })
    });

    let mut mesh = MeshCanvas::new();
    c.bench_function("draw_mesh_cached", |b| {
        b.iter(|| {
            builder.pre_draw(&mut mesh);
            builder.draw_path(&mut mesh);
            black_box(mesh.take_commands())
        })
    });
}

criterion_group!(benches, bench_rebuild, bench_draw);
criterion_main!(benches);
