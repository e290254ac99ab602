//! Asset loading tests against images generated on disk

use std::fs::{self, File};
use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use tempfile::TempDir;

use tui_sidescroll::assets::{ImageLoader, PixelImage};
use tui_sidescroll::config::SceneManifest;
use tui_sidescroll::core::{
    AnimatedSprite, AssetError, CharacterAssets, DirectionalCharacter, FrameImage, Scene,
};
use tui_sidescroll::setup::build_scene;
use tui_sidescroll::types::{Facing, Position};

fn write_png(path: &Path, width: u32, height: u32) {
    let mut img = RgbaImage::new(width, height);
    for (x, _, p) in img.enumerate_pixels_mut() {
        *p = Rgba([(x * 40) as u8, 0, 0, 255]);
    }
    img.save(path).unwrap();
}

fn write_gif(path: &Path, width: u32, height: u32, frames: usize, delay_ms: u32) {
    let file = File::create(path).unwrap();
    let mut encoder = GifEncoder::new(file);
    let frames = (0..frames).map(|i| {
        let shade = (i * 60) as u8;
        Frame::from_parts(
            RgbaImage::from_pixel(width, height, Rgba([shade, shade, 255, 255])),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    });
    encoder.encode_frames(frames).unwrap();
}

#[test]
fn test_still_image_loads_as_single_frame() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let path = dir.join("bg.png");
    write_png(&path, 6, 4);

    let mut loader = ImageLoader::new();
    let mut sprite: AnimatedSprite<PixelImage> = AnimatedSprite::load(&mut loader, &path).unwrap();
    assert_eq!(sprite.frame_count(), 1);
    assert_eq!((sprite.current_frame().width(), sprite.current_frame().height()), (6, 4));

    for _ in 0..5 {
        sprite.advance_frame();
    }
    assert_eq!(sprite.current_index(), 0);
}

#[test]
fn test_gif_loads_frames_and_duration() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let path = dir.join("walk.gif");
    write_gif(&path, 4, 5, 3, 120);

    let mut loader = ImageLoader::new();
    let sprite: AnimatedSprite<PixelImage> = AnimatedSprite::load(&mut loader, &path).unwrap();
    assert_eq!(sprite.frame_count(), 3);
    assert_eq!(sprite.frame_duration_ticks(), 120);
    assert_eq!(sprite.current_frame().height(), 5);

    // Second load is served from the cache with shared pixels.
    let again: AnimatedSprite<PixelImage> = AnimatedSprite::load(&mut loader, &path).unwrap();
    assert_eq!(again.frames()[0], sprite.frames()[0]);
    assert_eq!(loader.cached_len(), 1);
}

#[test]
fn test_unreadable_asset_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let path = dir.join("broken.png");
    fs::write(&path, b"not an image").unwrap();

    let mut loader = ImageLoader::new();
    let err = AnimatedSprite::<PixelImage>::load(&mut loader, &path).unwrap_err();
    assert!(matches!(err, AssetError::Unreadable { .. }));
}

#[test]
fn test_character_requires_idle_art() {
    let mut loader = ImageLoader::new();
    let assets = CharacterAssets {
        walk_right: Some("walk.gif".into()),
        ..CharacterAssets::default()
    };
    let err = DirectionalCharacter::<PixelImage>::load(&mut loader, &assets).unwrap_err();
    assert!(matches!(err, AssetError::MissingIdleArt));
}

#[test]
fn test_character_mirrors_missing_left_art() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let idle = dir.join("idle.png");
    let walk = dir.join("walk.gif");
    write_png(&idle, 5, 10);
    write_gif(&walk, 5, 13, 2, 80);

    let mut loader = ImageLoader::new();
    let assets = CharacterAssets {
        idle_right: Some(idle),
        walk_right: Some(walk),
        ..CharacterAssets::default()
    };
    let c: DirectionalCharacter<PixelImage> = DirectionalCharacter::load(&mut loader, &assets).unwrap();

    assert_eq!(c.vertical_offset(), 3);
    let right = c.sprite(Facing::Right, false).current_frame();
    let left = c.sprite(Facing::Left, false).current_frame();
    assert_eq!(left, &right.mirrored());
    assert_eq!(c.sprite(Facing::Left, true).frame_count(), 2);
    assert_eq!(c.sprite(Facing::Left, true).frame_duration_ticks(), 80);
}

#[test]
fn test_build_scene_from_manifest_file() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    write_png(&dir.join("bg.png"), 20, 10);
    write_png(&dir.join("hero.png"), 3, 4);
    write_gif(&dir.join("hero-walk.gif"), 3, 4, 4, 100);
    let manifest_path = dir.join("scene.json");
    fs::write(
        &manifest_path,
        r#"{
            "canvas": { "width": 20, "height": 10 },
            "background": "bg.png",
            "character": {
                "idle_right": "hero.png",
                "walk_right": "hero-walk.gif",
                "position": [5, 6],
                "move_interval_ms": 3,
                "walk_frame_divisor": 2
            }
        }"#,
    )
    .unwrap();

    let manifest = SceneManifest::load(&manifest_path).unwrap();
    let mut loader = ImageLoader::new();
    let (mut scene, player): (Scene<PixelImage>, _) = build_scene(&manifest, &mut loader, 1_000).unwrap();

    assert_eq!(scene.entities().len(), 2);
    assert_eq!(player.index(), 1);
    let hero = scene.controlled().unwrap();
    assert_eq!(hero.position(), Position::new(5, 6));
    assert_eq!(hero.move_interval(), 3);
    assert_eq!(hero.walk_frame_duration(), 50);

    // Load time is not replayed.
    assert_eq!(scene.update(1_000).unwrap(), 0);

    scene.handle_directional_input(false, true);
    scene.update(1_009).unwrap();
    assert_eq!(scene.controlled().unwrap().position(), Position::new(8, 6));

    // Fixture files go away with the scratch directory.
    let root = dir.to_path_buf();
    drop(tmp);
    assert!(!root.exists());
}

#[test]
fn test_manifest_without_character_art_fails() {
    let manifest = SceneManifest::from_json("{}").unwrap();
    let mut loader = ImageLoader::new();
    let result: Result<(Scene<PixelImage>, _), _> = build_scene(&manifest, &mut loader, 0);
    assert!(matches!(result, Err(AssetError::MissingIdleArt)));
}
