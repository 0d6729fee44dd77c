// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::{Rc, Weak};

use burrow_camera::{
    Camera, CameraConfig, CameraController, FollowOptions, FollowTarget, RegionRegistry,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

const DT: f64 = 1.0 / 60.0;

fn regions() -> RegionRegistry {
    RegionRegistry::from_entries([
        ("world", (0.0, 0.0, 2000.0, 2000.0)),
        ("center", (800.0, 800.0, 400.0, 400.0)),
        ("tl", (100.0, 100.0, 200.0, 200.0)),
        ("tr", (1700.0, 100.0, 200.0, 200.0)),
        ("bl", (100.0, 1700.0, 200.0, 200.0)),
        ("br", (1700.0, 1700.0, 200.0, 200.0)),
    ])
    .expect("static region table is valid")
}

fn controller(target: &Rc<Cell<Point>>) -> CameraController {
    let weak: Weak<dyn FollowTarget> = Rc::downgrade(target);
    CameraController::new(
        Camera::new(&CameraConfig::default()),
        regions(),
        weak,
        FollowOptions::default(),
    )
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");
    let target = Rc::new(Cell::new(Point::new(1000.0, 1000.0)));

    group.bench_function("focus_and_tick_60", |b| {
        b.iter_batched(
            || controller(&target),
            |mut ctl| {
                ctl.focus(black_box("tl")).expect("region exists");
                for _ in 0..60 {
                    ctl.tick(DT);
                }
                black_box(ctl.camera().position())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("settle_all_regions", |b| {
        let names: Vec<String> = regions().iter().map(|r| r.name().to_owned()).collect();
        b.iter_batched(
            || controller(&target),
            |mut ctl| {
                for name in &names {
                    ctl.focus(name).expect("region exists");
                    for _ in 0..240 {
                        ctl.tick(DT);
                    }
                }
                black_box(ctl.camera().zoom())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_follow(c: &mut Criterion) {
    let mut group = c.benchmark_group("follow");

    group.bench_function("orbit_600_ticks", |b| {
        b.iter_batched(
            || {
                let target = Rc::new(Cell::new(Point::new(1500.0, 1000.0)));
                let mut ctl = controller(&target);
                ctl.follow().expect("target is alive");
                (target, ctl)
            },
            |(target, mut ctl)| {
                for i in 0..600 {
                    let angle = f64::from(i) * 0.02;
                    let (sin, cos) = angle.sin_cos();
                    target.set(Point::new(1000.0 + cos * 500.0, 1000.0 + sin * 500.0));
                    ctl.tick(DT);
                }
                black_box(ctl.camera().position())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    c.bench_function("wheel_zoom_about_cursor", |b| {
        let config = CameraConfig::default().with_behaviors(burrow_camera::Behaviors::WHEEL);
        b.iter_batched(
            || Camera::new(&config),
            |mut camera| {
                for step in [1, 1, -1, 2, -3, 1] {
                    camera.wheel(black_box(Point::new(320.0, 180.0)), step);
                }
                black_box(camera.viewport().world_to_screen_transform())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_snap, bench_follow, bench_wheel);
criterion_main!(benches);
