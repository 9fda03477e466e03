//! Character domain: sprite preloading and the frame handle library.
//!
//! Warms every frame of every action once, before interaction begins. Loading
//! is best-effort: a frame that fails to load is logged and treated as
//! settled, and rendering falls back per-frame instead of crashing.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use super::catalog::{Action, frame_path};

/// Handles for every queued sprite frame, keyed by action.
#[derive(Resource, Debug, Default)]
pub struct SpriteLibrary {
    frames: HashMap<Action, Vec<Handle<Image>>>,
    preloaded: bool,
}

impl SpriteLibrary {
    /// Queue every frame of every action. Idempotent: the first call does the
    /// work, subsequent calls return immediately without re-issuing loads.
    pub fn preload(&mut self, asset_server: &AssetServer) {
        if self.preloaded {
            return;
        }
        let mut total = 0;
        for action in Action::ALL {
            let seq = action.sequence();
            let handles: Vec<Handle<Image>> = (0..seq.frames)
                .map(|i| asset_server.load(frame_path(action, i)))
                .collect();
            total += handles.len();
            self.frames.insert(action, handles);
        }
        self.preloaded = true;
        info!(
            "Queued {} sprite frames across {} actions",
            total,
            Action::ALL.len()
        );
    }

    pub fn is_preloaded(&self) -> bool {
        self.preloaded
    }

    /// Handle for one frame of an action, if queued.
    pub fn frame(&self, action: Action, index: u32) -> Option<&Handle<Image>> {
        self.frames.get(&action)?.get(index as usize)
    }

    /// First frame of the action that actually finished loading. Fallback for
    /// frames whose asset failed or has not arrived yet.
    pub fn first_loaded(&self, action: Action, images: &Assets<Image>) -> Option<Handle<Image>> {
        self.frames
            .get(&action)?
            .iter()
            .find(|h| images.contains(*h))
            .cloned()
    }

    /// Whether every queued load reached a terminal state. A failed load
    /// counts as settled so missing assets never block startup.
    pub fn all_settled(&self, asset_server: &AssetServer) -> bool {
        self.preloaded
            && self.frames.values().flatten().all(|handle| {
                matches!(
                    asset_server.get_load_state(handle.id()),
                    Some(LoadState::Loaded) | Some(LoadState::Failed(_))
                )
            })
    }

    /// Count of queued frames whose load has failed so far.
    pub fn failed_count(&self, asset_server: &AssetServer) -> usize {
        self.frames
            .values()
            .flatten()
            .filter(|handle| {
                matches!(
                    asset_server.get_load_state(handle.id()),
                    Some(LoadState::Failed(_))
                )
            })
            .count()
    }
}

/// Kick off the warm-up at startup.
pub(crate) fn preload_sprites(
    mut library: ResMut<SpriteLibrary>,
    asset_server: Res<AssetServer>,
) {
    library.preload(&asset_server);
}
