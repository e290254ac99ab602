use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use tui_sidescroll::assets::PixelImage;
use tui_sidescroll::core::{AnimatedSprite, DirectionalCharacter, FrameSequence, Scene};
use tui_sidescroll::term::{PixelCanvas, Rgb, SceneView, Viewport};
use tui_sidescroll::types::{Position, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_MOVE_INTERVAL_TICKS};

fn demo_scene() -> Scene<PixelImage> {
    let mut scene = Scene::new();
    scene.push_sprite(AnimatedSprite::still(PixelImage::solid(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        [40, 90, 160, 255],
    )));

    let idle = AnimatedSprite::still(PixelImage::solid(32, 48, [220, 180, 40, 255]));
    let walk_frames = (0..8u8)
        .map(|i| PixelImage::solid(32, 52, [220, 180, i * 30, 255]))
        .collect();
    let walk = AnimatedSprite::new(FrameSequence::new(walk_frames).unwrap(), 50);
    let mut hero = DirectionalCharacter::from_sprites(None, Some(idle), None, Some(walk)).unwrap();
    hero.set_position(Position::new(30, 230));
    hero.set_move_interval(DEFAULT_MOVE_INTERVAL_TICKS);
    let id = scene.push_character(hero);
    scene.set_controlled(id);
    scene.handle_directional_input(false, true);
    scene
}

fn benchmark_frame_update(c: &mut Criterion) {
    let mut scene = demo_scene();
    let mut now = 0u64;

    c.bench_function("scene_update_16ms", |b| {
        b.iter(|| {
            now += 16;
            black_box(scene.update(black_box(now)).unwrap());
        })
    });
}

fn benchmark_catch_up(c: &mut Criterion) {
    c.bench_function("scene_catch_up_1s", |b| {
        b.iter_batched(
            demo_scene,
            |mut scene| black_box(scene.update(black_box(1_000)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_render(c: &mut Criterion) {
    let scene = demo_scene();
    let mut canvas = PixelCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let view = SceneView::default();

    c.bench_function("scene_render_pixels", |b| {
        b.iter(|| {
            canvas.clear(Rgb::default());
            scene.render(&mut canvas).unwrap();
            black_box(canvas.pixel(0, 0));
        })
    });

    scene.render(&mut canvas).unwrap();
    c.bench_function("scene_view_160x48", |b| {
        b.iter(|| black_box(view.render(&canvas, Some("walking"), Viewport::new(160, 48))))
    });
}

criterion_group!(benches, benchmark_frame_update, benchmark_catch_up, benchmark_render);
criterion_main!(benches);
