use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vista::camera::{
    Camera, OrbitControls, Ray, TransitionStep, ViewPresets,
    ViewTransitionController,
};
use vista::hotspot::{Hotspot, HotspotSet, HoverStyle, InfoPayload};
use vista::options::ControlOptions;
use vista::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::EaseInOut;
    c.bench_function("ease_in_out", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn full_transition_benchmark(c: &mut Criterion) {
    let top = ViewPresets::standard(14.0);
    let Some(view) = top.get(ViewPresets::TOP).copied() else {
        return;
    };
    c.bench_function("top_view_transition_60hz", |b| {
        b.iter(|| {
            let mut rig =
                OrbitControls::new(Camera::default(), ControlOptions::default());
            let mut controller = ViewTransitionController::default();
            let _ = controller.go_to(&mut rig, view.position, view.target, None);
            while controller.update(&mut rig, 1.0 / 60.0)
                != TransitionStep::Finished
            {}
            black_box(rig.camera.eye)
        })
    });
}

fn hit_test_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotspot_hit_test");

    for count in [4, 32, 256] {
        let hotspots: Vec<Hotspot> = (0..count)
            .map(|i| Hotspot {
                name: format!("marker-{i}"),
                anchor: Vec3::new(i as f32 * 3.0, 0.0, 0.0),
                radius: 1.0,
                info: InfoPayload::default(),
                view: None,
            })
            .collect();
        let set = HotspotSet::new(hotspots, HoverStyle::default());
        let ray = Ray {
            origin: Vec3::new(-10.0, 0.0, 0.0),
            dir: Vec3::X,
        };

        group.bench_function(format!("{count}_markers"), |b| {
            b.iter(|| black_box(set.hit_test(black_box(&ray))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    full_transition_benchmark,
    hit_test_benchmark
);
criterion_main!(benches);
