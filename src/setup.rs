//! Scene construction from a manifest.

use crate::config::SceneManifest;
use crate::core::{
    normalize_ticks, AnimatedSprite, AssetError, AssetLoader, DirectionalCharacter, EntityId,
    FrameImage, Scene,
};

/// Load every asset named by `manifest` and assemble the scene.
///
/// The background (if any) is painted first, then the controlled character.
/// The scene's timebase starts at `start_ms`, so load time is not replayed.
pub fn build_scene<F, L>(
    manifest: &SceneManifest,
    loader: &mut L,
    start_ms: u64,
) -> Result<(Scene<F>, EntityId), AssetError>
where
    F: FrameImage + Clone,
    L: AssetLoader<F> + ?Sized,
{
    let mut scene = Scene::starting_at(start_ms);

    if let Some(path) = manifest.background.as_deref() {
        scene.push_sprite(AnimatedSprite::load(loader, path)?);
    }

    let character = &manifest.character;
    let mut player = DirectionalCharacter::load(loader, &character.assets())?;
    player.set_position(character.position());
    player.set_move_interval(normalize_ticks(character.move_interval_ms));
    let divisor = character.walk_frame_divisor.max(1);
    player.set_walk_frame_duration(player.walk_frame_duration() / divisor);

    let id = scene.push_character(player);
    scene.set_controlled(id);
    log::info!(
        "scene ready: {} entities, player at {:?}",
        scene.entities().len(),
        character.position()
    );
    Ok((scene, id))
}
