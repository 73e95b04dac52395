// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dendrite::model::{Document, NodeId};
use dendrite::ops;
use dendrite::render::render_scene;

// Benchmark identity (keep stable):
// - Group name in this file: `render.scene`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (`small`, `wide_fanout`, `deep_chain`).

fn small_fixture() -> Document {
    let mut doc = Document::new();
    let root = NodeId::root();
    let a = ops::create_child(&mut doc, &root, "first branch").expect("create");
    ops::create_child(&mut doc, &root, "second branch").expect("create");
    ops::create_child(&mut doc, &a, "leaf").expect("create");
    doc
}

fn wide_fanout_fixture() -> Document {
    let mut doc = Document::new();
    let root = NodeId::root();
    for k in 0..24 {
        let branch = ops::create_child(&mut doc, &root, &format!("branch {k}")).expect("create");
        ops::create_child(&mut doc, &branch, "a slightly longer leaf label").expect("create");
    }
    doc
}

fn deep_chain_fixture() -> Document {
    let mut doc = Document::new();
    let mut anchor = NodeId::root();
    for k in 0..32 {
        anchor = ops::create_child(&mut doc, &anchor, &format!("step {k}")).expect("create");
    }
    // Long links back to the root exercise the curve rasterizer.
    let last = anchor;
    let _ = ops::link(&mut doc, &last, &NodeId::root());
    doc
}

fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.scene");

    let small = small_fixture();
    group.bench_function("small", |b| {
        b.iter(|| {
            let canvas = render_scene(black_box(&small), 120, 40);
            black_box(canvas.rows().count())
        })
    });

    let wide = wide_fanout_fixture();
    group.bench_function("wide_fanout", |b| {
        b.iter(|| {
            let canvas = render_scene(black_box(&wide), 200, 60);
            black_box(canvas.rows().count())
        })
    });

    let deep = deep_chain_fixture();
    group.bench_function("deep_chain", |b| {
        b.iter(|| {
            let canvas = render_scene(black_box(&deep), 200, 60);
            black_box(canvas.rows().count())
        })
    });

    group.finish();
}

criterion_group!(benches, benches_render);
criterion_main!(benches);
