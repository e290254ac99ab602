//! Scene: flat entity list plus the controlled character, stepped in lock-step
//! one tick at a time.

use crate::character::DirectionalCharacter;
use crate::error::ClockError;
use crate::frame::Canvas;
use crate::sprite::AnimatedSprite;
use crate::timebase::Timebase;

/// Catch-up batches at least this large are logged.
const LARGE_CATCH_UP_TICKS: u64 = 250;

/// Index of an entity in its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Anything the scene paints and animates.
#[derive(Debug, Clone)]
pub enum Entity<F> {
    Sprite(AnimatedSprite<F>),
    Character(DirectionalCharacter<F>),
}

impl<F> Entity<F> {
    /// One animation tick.
    pub fn animate(&mut self) {
        match self {
            Entity::Sprite(s) => s.advance_frame(),
            Entity::Character(c) => c.animate(),
        }
    }

    pub fn render<C: Canvas<F>>(&self, canvas: &mut C) {
        match self {
            Entity::Sprite(s) => s.render(canvas),
            Entity::Character(c) => c.render(canvas),
        }
    }

    pub fn as_character(&self) -> Option<&DirectionalCharacter<F>> {
        match self {
            Entity::Character(c) => Some(c),
            Entity::Sprite(_) => None,
        }
    }

    pub fn as_character_mut(&mut self) -> Option<&mut DirectionalCharacter<F>> {
        match self {
            Entity::Character(c) => Some(c),
            Entity::Sprite(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scene<F> {
    entities: Vec<Entity<F>>,
    controlled: Option<EntityId>,
    timebase: Timebase,
}

impl<F> Scene<F> {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A scene whose first update counts ticks from `start_ms`.
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            entities: Vec::new(),
            controlled: None,
            timebase: Timebase::new(start_ms),
        }
    }

    pub fn push_sprite(&mut self, sprite: AnimatedSprite<F>) -> EntityId {
        self.push(Entity::Sprite(sprite))
    }

    pub fn push_character(&mut self, character: DirectionalCharacter<F>) -> EntityId {
        self.push(Entity::Character(character))
    }

    fn push(&mut self, entity: Entity<F>) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    /// Hand input control to a character entity.
    ///
    /// Returns false (and leaves control unchanged) if `id` is not a character.
    pub fn set_controlled(&mut self, id: EntityId) -> bool {
        let is_character = self
            .entities
            .get(id.0)
            .and_then(Entity::as_character)
            .is_some();
        if is_character {
            self.controlled = Some(id);
        }
        is_character
    }

    pub fn controlled(&self) -> Option<&DirectionalCharacter<F>> {
        self.controlled
            .and_then(|id| self.entities.get(id.0))
            .and_then(Entity::as_character)
    }

    pub fn controlled_mut(&mut self) -> Option<&mut DirectionalCharacter<F>> {
        let id = self.controlled?;
        self.entities.get_mut(id.0).and_then(Entity::as_character_mut)
    }

    pub fn entities(&self) -> &[Entity<F>] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity<F>> {
        self.entities.get(id.0)
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.timebase.last_tick_ms()
    }

    /// Replay every millisecond since the previous update as one tick.
    ///
    /// Within a tick every entity animates (in list order) before the
    /// controlled character moves, and no entity sees tick `n + 1` before all
    /// have seen tick `n`. Returns the number of ticks applied.
    pub fn update(&mut self, now_ms: u64) -> Result<u64, ClockError> {
        let ticks = self.timebase.advance(now_ms)?;
        if ticks >= LARGE_CATCH_UP_TICKS {
            log::debug!("catching up {ticks} ticks");
        }
        for _ in 0..ticks {
            self.step();
        }
        Ok(ticks)
    }

    fn step(&mut self) {
        for entity in &mut self.entities {
            entity.animate();
        }
        if let Some(character) = self.controlled_mut() {
            character.apply_movement();
        }
    }

    /// Feed one sample of the directional keys to the controlled character.
    pub fn handle_directional_input(&mut self, left_held: bool, right_held: bool) {
        if let Some(character) = self.controlled_mut() {
            character.handle_directional_input(left_held, right_held);
        }
    }

    /// Paint every entity in list order, then present.
    pub fn render<C: Canvas<F>>(&self, canvas: &mut C) -> Result<(), C::Error> {
        for entity in &self.entities {
            entity.render(canvas);
        }
        canvas.present()
    }
}

impl<F> Default for Scene<F> {
    fn default() -> Self {
        Self::new()
    }
}
