//! DirectionalCharacter: four sprite variants driven by a facing/walking state.
//!
//! The four variants (idle-left, idle-right, walk-left, walk-right) always share
//! position and movement cadence. Only the active one animates; all four move
//! while walking, so switching state mid-stride never jumps.

use std::path::{Path, PathBuf};

use crate::error::AssetError;
use crate::frame::{AssetLoader, Canvas, FrameImage};
use crate::sprite::AnimatedSprite;
use crate::types::{Facing, Position};

/// Art files for a character. Missing variants are synthesized by mirroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterAssets {
    pub idle_left: Option<PathBuf>,
    pub idle_right: Option<PathBuf>,
    pub walk_left: Option<PathBuf>,
    pub walk_right: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DirectionalCharacter<F> {
    idle_left: AnimatedSprite<F>,
    idle_right: AnimatedSprite<F>,
    walk_left: AnimatedSprite<F>,
    walk_right: AnimatedSprite<F>,
    facing: Facing,
    walking: bool,
    /// Walk frame height minus idle frame height.
    vertical_offset: i32,
}

/// Resolve a left/right pair, mirroring whichever side is missing.
fn resolve_pair<F: FrameImage>(
    left: Option<AnimatedSprite<F>>,
    right: Option<AnimatedSprite<F>>,
    what: &str,
) -> Option<(AnimatedSprite<F>, AnimatedSprite<F>)> {
    match (left, right) {
        (Some(l), Some(r)) => Some((l, r)),
        (Some(l), None) => {
            log::debug!("{what}-right synthesized by mirroring {what}-left");
            let r = l.mirrored();
            Some((l, r))
        }
        (None, Some(r)) => {
            log::debug!("{what}-left synthesized by mirroring {what}-right");
            Some((r.mirrored(), r))
        }
        (None, None) => None,
    }
}

fn load_optional<F, L>(loader: &mut L, path: Option<&Path>) -> Result<Option<AnimatedSprite<F>>, AssetError>
where
    L: AssetLoader<F> + ?Sized,
{
    path.map(|p| AnimatedSprite::load(loader, p)).transpose()
}

impl<F: FrameImage> DirectionalCharacter<F> {
    /// Build a character from up to four sprites.
    ///
    /// At least one idle sprite is required. A missing side of a pair is the
    /// mirror of the other side; with no walk art at all the idle pair doubles
    /// as walk art. The resulting character faces right and stands still, and
    /// all four variants take the idle-right sprite's position and interval.
    pub fn from_sprites(
        idle_left: Option<AnimatedSprite<F>>,
        idle_right: Option<AnimatedSprite<F>>,
        walk_left: Option<AnimatedSprite<F>>,
        walk_right: Option<AnimatedSprite<F>>,
    ) -> Result<Self, AssetError>
    where
        F: Clone,
    {
        let (idle_left, idle_right) =
            resolve_pair(idle_left, idle_right, "idle").ok_or(AssetError::MissingIdleArt)?;
        let (walk_left, walk_right) = match resolve_pair(walk_left, walk_right, "walk") {
            Some(pair) => pair,
            None => {
                log::warn!("character has no walk art; reusing idle art");
                (idle_left.clone(), idle_right.clone())
            }
        };

        let vertical_offset =
            walk_right.frames().first().height() as i32 - idle_right.frames().first().height() as i32;

        let position = idle_right.position();
        let interval = idle_right.move_interval_ticks();
        let mut character = Self {
            idle_left,
            idle_right,
            walk_left,
            walk_right,
            facing: Facing::Right,
            walking: false,
            vertical_offset,
        };
        character.set_position(position);
        character.set_move_interval(interval);
        Ok(character)
    }

    /// Load a character's art through `loader`.
    pub fn load<L>(loader: &mut L, assets: &CharacterAssets) -> Result<Self, AssetError>
    where
        L: AssetLoader<F> + ?Sized,
        F: Clone,
    {
        if assets.idle_left.is_none() && assets.idle_right.is_none() {
            return Err(AssetError::MissingIdleArt);
        }
        let idle_left = load_optional(loader, assets.idle_left.as_deref())?;
        let idle_right = load_optional(loader, assets.idle_right.as_deref())?;
        let walk_left = load_optional(loader, assets.walk_left.as_deref())?;
        let walk_right = load_optional(loader, assets.walk_right.as_deref())?;
        Self::from_sprites(idle_left, idle_right, walk_left, walk_right)
    }
}

impl<F> DirectionalCharacter<F> {
    pub fn sprite(&self, facing: Facing, walking: bool) -> &AnimatedSprite<F> {
        match (facing, walking) {
            (Facing::Left, false) => &self.idle_left,
            (Facing::Left, true) => &self.walk_left,
            (Facing::Right, false) => &self.idle_right,
            (Facing::Right, true) => &self.walk_right,
        }
    }

    fn sprite_mut(&mut self, facing: Facing, walking: bool) -> &mut AnimatedSprite<F> {
        match (facing, walking) {
            (Facing::Left, false) => &mut self.idle_left,
            (Facing::Left, true) => &mut self.walk_left,
            (Facing::Right, false) => &mut self.idle_right,
            (Facing::Right, true) => &mut self.walk_right,
        }
    }

    /// The variant selected by the current (facing, walking) state.
    pub fn active_sprite(&self) -> &AnimatedSprite<F> {
        self.sprite(self.facing, self.walking)
    }

    fn sprites_mut(&mut self) -> [&mut AnimatedSprite<F>; 4] {
        [
            &mut self.idle_left,
            &mut self.idle_right,
            &mut self.walk_left,
            &mut self.walk_right,
        ]
    }

    /// One tick: animate, then move.
    pub fn tick(&mut self) {
        self.animate();
        self.apply_movement();
    }

    /// Advance the active sprite's frame timer. Inactive variants stay frozen.
    pub fn animate(&mut self) {
        self.sprite_mut(self.facing, self.walking).advance_frame();
    }

    /// While walking, advance every variant's movement timer by one tick.
    pub fn apply_movement(&mut self) {
        if !self.walking {
            return;
        }
        let delta = self.facing.step();
        for sprite in self.sprites_mut() {
            sprite.advance_position(delta);
        }
    }

    /// Turn-before-walk state machine, sampled once per update.
    ///
    /// Holding the direction already faced starts walking; holding the other
    /// direction only turns. Neither or both keys stop walking.
    pub fn handle_directional_input(&mut self, left_held: bool, right_held: bool) {
        let wanted = match (left_held, right_held) {
            (true, false) => Facing::Left,
            (false, true) => Facing::Right,
            _ => {
                self.walking = false;
                return;
            }
        };
        if self.facing == wanted {
            self.walking = true;
        } else {
            log::trace!("character turned {}", wanted.as_str());
            self.facing = wanted;
            self.walking = false;
        }
    }

    pub fn render<C: Canvas<F>>(&self, canvas: &mut C) {
        let mut at = self.position();
        if self.walking {
            at.y = at.y.saturating_sub(self.vertical_offset);
        }
        self.active_sprite().render_at(canvas, at);
    }

    pub fn set_position(&mut self, position: Position) {
        for sprite in self.sprites_mut() {
            sprite.set_position(position);
        }
    }

    pub fn set_move_interval(&mut self, ticks: u32) {
        for sprite in self.sprites_mut() {
            sprite.set_move_interval_ticks(ticks);
        }
    }

    /// Set the frame duration of both walk variants.
    pub fn set_walk_frame_duration(&mut self, ticks: u32) {
        self.walk_left.set_frame_duration_ticks(ticks);
        self.walk_right.set_frame_duration_ticks(ticks);
    }

    pub fn walk_frame_duration(&self) -> u32 {
        self.walk_right.frame_duration_ticks()
    }

    pub fn position(&self) -> Position {
        self.idle_right.position()
    }

    pub fn move_interval(&self) -> u32 {
        self.idle_right.move_interval_ticks()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    pub fn vertical_offset(&self) -> i32 {
        self.vertical_offset
    }
}
