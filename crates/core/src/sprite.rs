//! AnimatedSprite: a frame sequence with two independent tick timers.
//!
//! One timer gates frame advance, the other gates position movement. Both are
//! driven one tick at a time by the scene, so their cadence depends only on the
//! number of elapsed milliseconds and never on how often the scene is drawn.

use std::path::Path;

use crate::error::AssetError;
use crate::frame::{AssetLoader, Canvas, FrameImage, FrameSequence};
use crate::timebase::normalize_ticks;
use crate::types::Position;

#[derive(Debug, Clone)]
pub struct AnimatedSprite<F> {
    position: Position,
    frames: FrameSequence<F>,
    current_index: usize,
    /// Ticks each frame stays on screen; 0 advances every tick.
    frame_duration_ticks: u32,
    frame_accumulator: u32,
    /// Ticks between position steps; 0 steps every tick.
    move_interval_ticks: u32,
    move_accumulator: u32,
}

impl<F> AnimatedSprite<F> {
    pub fn new(frames: FrameSequence<F>, frame_duration_ticks: u32) -> Self {
        Self {
            position: Position::default(),
            frames,
            current_index: 0,
            frame_duration_ticks,
            frame_accumulator: 0,
            move_interval_ticks: 0,
            move_accumulator: 0,
        }
    }

    /// A single-frame sprite. It never visibly animates.
    pub fn still(frame: F) -> Self {
        Self::new(FrameSequence::single(frame), 0)
    }

    /// Load a sprite from disk: `.gif` files as animations, anything else as a
    /// still image.
    pub fn load<L>(loader: &mut L, path: &Path) -> Result<Self, AssetError>
    where
        L: AssetLoader<F> + ?Sized,
    {
        let is_gif = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("gif"));

        if !is_gif {
            let frame = loader.load_image(path)?;
            log::debug!("loaded still sprite {}", path.display());
            return Ok(Self::still(frame));
        }

        let (duration_ms, frames) = loader.load_animation(path)?;
        let count = frames.len();
        let frames = FrameSequence::new(frames).ok_or_else(|| AssetError::EmptyAnimation {
            path: path.to_path_buf(),
        })?;
        let duration = normalize_ticks(i64::from(duration_ms));
        log::debug!(
            "loaded animated sprite {} ({count} frames, {duration} ticks/frame)",
            path.display()
        );
        Ok(Self::new(frames, duration))
    }

    /// One tick of the frame timer.
    pub fn advance_frame(&mut self) {
        self.frame_accumulator += 1;
        let due = self.frame_duration_ticks == 0 || self.frame_accumulator >= self.frame_duration_ticks;
        if due {
            self.frame_accumulator = 0;
            self.current_index = (self.current_index + 1) % self.frames.len();
        }
    }

    /// One tick of the movement timer; moves by `delta` when the interval is due.
    pub fn advance_position(&mut self, delta: Position) {
        self.move_accumulator += 1;
        let due = self.move_interval_ticks == 0 || self.move_accumulator >= self.move_interval_ticks;
        if due {
            self.move_accumulator = 0;
            self.position = self.position.offset(delta);
        }
    }

    pub fn render<C: Canvas<F>>(&self, canvas: &mut C) {
        self.render_at(canvas, self.position);
    }

    /// Draw the current frame at `at` instead of the sprite's own position.
    pub fn render_at<C: Canvas<F>>(&self, canvas: &mut C, at: Position) {
        canvas.draw_frame(self.current_frame(), at);
    }

    pub fn current_frame(&self) -> &F {
        &self.frames[self.current_index]
    }

    pub fn frames(&self) -> &FrameSequence<F> {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn frame_duration_ticks(&self) -> u32 {
        self.frame_duration_ticks
    }

    pub fn set_frame_duration_ticks(&mut self, ticks: u32) {
        self.frame_duration_ticks = ticks;
    }

    pub fn frame_accumulator(&self) -> u32 {
        self.frame_accumulator
    }

    pub fn move_interval_ticks(&self) -> u32 {
        self.move_interval_ticks
    }

    pub fn set_move_interval_ticks(&mut self, ticks: u32) {
        self.move_interval_ticks = ticks;
    }

    pub fn move_accumulator(&self) -> u32 {
        self.move_accumulator
    }
}

impl<F: FrameImage> AnimatedSprite<F> {
    /// A horizontally mirrored copy with the same frame count, frame duration,
    /// and position. Timers and frame index start fresh.
    pub fn mirrored(&self) -> Self {
        let mut sprite = Self::new(self.frames.mirrored(), self.frame_duration_ticks);
        sprite.position = self.position;
        sprite.move_interval_ticks = self.move_interval_ticks;
        sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Tag(u8);

    fn sprite(frames: u8, duration: u32) -> AnimatedSprite<Tag> {
        let seq = FrameSequence::new((0..frames).map(Tag).collect()).unwrap();
        AnimatedSprite::new(seq, duration)
    }

    #[test]
    fn frame_advances_once_per_duration() {
        let mut s = sprite(3, 4);
        for _ in 0..3 {
            s.advance_frame();
        }
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.frame_accumulator(), 3);

        s.advance_frame();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.frame_accumulator(), 0);
    }

    #[test]
    fn frame_index_wraps() {
        let mut s = sprite(2, 1);
        s.advance_frame();
        s.advance_frame();
        assert_eq!(s.current_index(), 0);
        assert_eq!(*s.current_frame(), Tag(0));
    }

    #[test]
    fn zero_duration_advances_every_tick() {
        let mut s = sprite(3, 0);
        s.advance_frame();
        assert_eq!(s.current_index(), 1);
        s.advance_frame();
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.frame_accumulator(), 0);
    }

    #[test]
    fn still_sprite_never_faults() {
        let mut s = AnimatedSprite::still(Tag(9));
        for _ in 0..10 {
            s.advance_frame();
        }
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.frame_count(), 1);
    }

    #[test]
    fn movement_is_throttled_by_interval() {
        let mut s = sprite(1, 0);
        s.set_position(Position::new(10, 5));
        s.set_move_interval_ticks(3);

        s.advance_position(Position::new(-1, 0));
        s.advance_position(Position::new(-1, 0));
        assert_eq!(s.position(), Position::new(10, 5));
        assert_eq!(s.move_accumulator(), 2);

        s.advance_position(Position::new(-1, 0));
        assert_eq!(s.position(), Position::new(9, 5));
        assert_eq!(s.move_accumulator(), 0);
    }

    #[test]
    fn frame_and_move_timers_are_independent() {
        let mut s = sprite(4, 2);
        s.set_move_interval_ticks(5);
        for _ in 0..5 {
            s.advance_frame();
            s.advance_position(Position::new(1, 0));
        }
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.frame_accumulator(), 1);
        assert_eq!(s.position(), Position::new(1, 0));
    }
}
