//! Effects domain: celebratory fireworks on the achievements page.


use bevy::prelude::*;
use rand::Rng;

use crate::core::{AppState, GameRng, Page};

const BURST_INTERVAL: f32 = 1.4;
const PARTICLES_PER_BURST: usize = 28;
const PARTICLE_GRAVITY: f32 = 320.0;
const PARTICLE_LIFETIME: f32 = 1.6;
const PARTICLE_SIZE: f32 = 5.0;

const PALETTE: [Color; 5] = [
    Color::srgb(1.0, 0.35, 0.35),
    Color::srgb(1.0, 0.8, 0.3),
    Color::srgb(0.4, 0.9, 0.5),
    Color::srgb(0.45, 0.6, 1.0),
    Color::srgb(0.9, 0.5, 1.0),
];

/// One firework spark. Ballistic, fading, short-lived.
#[derive(Component, Debug)]
pub struct Particle {
    pub velocity: Vec2,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

#[derive(Resource, Debug)]
struct BurstTimer(Timer);

impl Default for BurstTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(BURST_INTERVAL, TimerMode::Repeating))
    }
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BurstTimer>()
            .add_systems(
                Update,
                emit_bursts
                    .run_if(in_state(AppState::Playing))
                    .run_if(in_state(Page::Achievements)),
            )
            .add_systems(Update, update_particles.run_if(in_state(AppState::Playing)))
            .add_systems(OnExit(Page::Achievements), clear_particles);
    }
}

fn emit_bursts(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<BurstTimer>,
    mut rng: ResMut<GameRng>,
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let (half_w, half_h) = windows
        .single()
        .map(|w| (w.width() / 2.0, w.height() / 2.0))
        .unwrap_or((400.0, 300.0));

    let center = Vec2::new(
        rng.0.random_range(-half_w * 0.7..half_w * 0.7),
        rng.0.random_range(0.0..half_h * 0.8),
    );
    let color = PALETTE[rng.0.random_range(0..PALETTE.len())];
    debug!("Firework burst at {:?}", center);

    for _ in 0..PARTICLES_PER_BURST {
        let angle = rng.0.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.0.random_range(60.0..240.0);
        let lifetime = PARTICLE_LIFETIME * rng.0.random_range(0.6..1.0);
        commands.spawn((
            Particle {
                velocity: Vec2::from_angle(angle) * speed,
                lifetime,
                max_lifetime: lifetime,
            },
            Sprite::from_color(color, Vec2::splat(PARTICLE_SIZE)),
            Transform::from_xyz(center.x, center.y, 5.0),
        ));
    }
}

/// Advance one spark ballistically. Returns `false` once its lifetime is
/// spent.
pub(crate) fn step_particle(particle: &mut Particle, translation: &mut Vec3, dt: f32) -> bool {
    particle.lifetime -= dt;
    if particle.lifetime <= 0.0 {
        return false;
    }
    particle.velocity.y -= PARTICLE_GRAVITY * dt;
    translation.x += particle.velocity.x * dt;
    translation.y += particle.velocity.y * dt;
    true
}

fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut transform, mut sprite) in &mut particles {
        if !step_particle(&mut particle, &mut transform.translation, dt) {
            commands.entity(entity).despawn();
            continue;
        }
        sprite
            .color
            .set_alpha(particle.lifetime / particle.max_lifetime);
    }
}

fn clear_particles(mut commands: Commands, particles: Query<Entity, With<Particle>>) {
    for entity in &particles {
        commands.entity(entity).despawn();
    }
}
