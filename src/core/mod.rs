//! Core domain: app/page states, camera, and the seeded RNG.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// Top-level app flow: boot preloads sprites, then the game runs.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum AppState {
    #[default]
    Boot,
    Playing,
}

/// The CV page currently shown. One page at a time, navigated from the
/// dungeon map.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Experience,
    Skills,
    Education,
    Achievements,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Experience,
        Page::Skills,
        Page::Education,
        Page::Achievements,
        Page::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "HOME",
            Page::Experience => "EXPERIENCE",
            Page::Skills => "SKILLS",
            Page::Education => "EDUCATION",
            Page::Achievements => "ACHIEVEMENTS",
            Page::Contact => "CONTACT",
        }
    }
}

/// Pages the player has navigated to, for the dungeon map's cleared-room
/// styling.
#[derive(Resource, Debug, Default)]
pub struct PageGraph {
    pub visited: Vec<Page>,
}

impl PageGraph {
    pub fn record(&mut self, page: Page) {
        if !self.visited.contains(&page) {
            self.visited.push(page);
        }
    }

    pub fn is_visited(&self, page: Page) -> bool {
        self.visited.contains(&page)
    }
}

/// Seed for this session's RNG, logged at startup for reproducibility.
#[derive(Resource, Debug)]
pub struct RunSeed(pub u64);

/// Session RNG shared by idle blinks and fireworks.
#[derive(Resource)]
pub struct GameRng(pub ChaCha8Rng);

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let seed: u64 = rand::random();
        info!("Session seed: {}", seed);

        app.init_state::<AppState>()
            .init_state::<Page>()
            .init_resource::<PageGraph>()
            .insert_resource(RunSeed(seed))
            .insert_resource(GameRng(ChaCha8Rng::seed_from_u64(seed)))
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                record_visited.run_if(resource_changed::<State<Page>>),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn record_visited(page: Res<State<Page>>, mut graph: ResMut<PageGraph>) {
    graph.record(*page.get());
}
