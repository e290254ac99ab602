//! AnimatedSprite timer and mirroring tests

use tui_sidescroll::assets::PixelImage;
use tui_sidescroll::core::{AnimatedSprite, FrameImage, FrameSequence};
use tui_sidescroll::types::Position;

fn striped(width: u32, height: u32, seed: u8) -> PixelImage {
    let mut raw = image::RgbaImage::new(width, height);
    for (x, y, p) in raw.enumerate_pixels_mut() {
        *p = image::Rgba([seed, (x * 17) as u8, (y * 31) as u8, 255]);
    }
    PixelImage::from_rgba(raw)
}

fn sprite(frames: u8, duration: u32) -> AnimatedSprite<PixelImage> {
    let seq = FrameSequence::new((0..frames).map(|i| striped(5, 3, i)).collect()).unwrap();
    AnimatedSprite::new(seq, duration)
}

#[test]
fn test_exactly_one_frame_switch_per_duration() {
    for duration in [1u32, 2, 3, 7, 16] {
        for frames in [1u8, 2, 5] {
            let mut s = sprite(frames, duration);
            for round in 1..=3usize {
                for _ in 0..duration {
                    s.advance_frame();
                }
                assert_eq!(
                    s.current_index(),
                    round % frames as usize,
                    "duration {duration}, frames {frames}, round {round}"
                );
                assert_eq!(s.frame_accumulator(), 0);
            }
        }
    }
}

#[test]
fn test_zero_duration_never_stalls() {
    let mut s = sprite(4, 0);
    for tick in 1..=9usize {
        s.advance_frame();
        assert_eq!(s.current_index(), tick % 4);
    }
}

#[test]
fn test_mirroring_twice_is_pixel_identical() {
    let original = sprite(3, 42);
    let twice = original.mirrored().mirrored();

    assert_eq!(twice.frame_count(), original.frame_count());
    assert_eq!(twice.frame_duration_ticks(), 42);
    for (a, b) in original.frames().iter().zip(twice.frames().iter()) {
        assert_eq!(a.as_rgba(), b.as_rgba());
    }

    let once = original.mirrored();
    assert_ne!(once.frames()[0].as_rgba(), original.frames()[0].as_rgba());
    assert_eq!(once.frames()[0].width(), 5);
}

#[test]
fn test_mirroring_keeps_position_and_interval() {
    let mut s = sprite(2, 5);
    s.set_position(Position::new(-4, 9));
    s.set_move_interval_ticks(7);
    let m = s.mirrored();
    assert_eq!(m.position(), Position::new(-4, 9));
    assert_eq!(m.move_interval_ticks(), 7);
    assert_eq!(m.current_index(), 0);
}

#[test]
fn test_position_moves_once_per_interval() {
    let mut s = sprite(1, 0);
    s.set_move_interval_ticks(7);
    for _ in 0..21 {
        s.advance_position(Position::new(1, 0));
    }
    assert_eq!(s.position(), Position::new(3, 0));
    assert_eq!(s.move_accumulator(), 0);
}
