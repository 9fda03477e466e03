//! Character domain: the action catalog and sprite sequence table.
//!
//! Every animation the character can play is one `Action` variant, and the
//! per-action folder/frame-count/frame-delay table is an exhaustive match so
//! a missing entry is a compile error rather than a silent lookup miss.

/// Named animation/behavior states of the playable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Idle,
    IdleBlinking,
    Walking,
    Running,
    JumpStart,
    JumpLoop,
    Falling,
    Slashing,
    RunSlashing,
    AirSlashing,
    Kicking,
    Throwing,
    RunThrowing,
    AirThrowing,
    Sliding,
    Hurt,
    Dying,
}

/// One action's frame sequence: asset folder, frame count, and the number of
/// animation ticks between frame advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSequence {
    pub folder: &'static str,
    pub frames: u32,
    pub frame_delay: u32,
}

impl Action {
    /// Every action, in declaration order. Used by the preloader.
    pub const ALL: [Action; 17] = [
        Action::Idle,
        Action::IdleBlinking,
        Action::Walking,
        Action::Running,
        Action::JumpStart,
        Action::JumpLoop,
        Action::Falling,
        Action::Slashing,
        Action::RunSlashing,
        Action::AirSlashing,
        Action::Kicking,
        Action::Throwing,
        Action::RunThrowing,
        Action::AirThrowing,
        Action::Sliding,
        Action::Hurt,
        Action::Dying,
    ];

    /// Sequence data for this action. Frame counts match the shipped asset
    /// pack; frame delays are in animation ticks.
    pub const fn sequence(self) -> SpriteSequence {
        match self {
            Action::Idle => SpriteSequence {
                folder: "idle",
                frames: 18,
                frame_delay: 6,
            },
            Action::IdleBlinking => SpriteSequence {
                folder: "idle_blinking",
                frames: 18,
                frame_delay: 6,
            },
            Action::Walking => SpriteSequence {
                folder: "walking",
                frames: 24,
                frame_delay: 3,
            },
            Action::Running => SpriteSequence {
                folder: "running",
                frames: 12,
                frame_delay: 2,
            },
            Action::JumpStart => SpriteSequence {
                folder: "jump_start",
                frames: 6,
                frame_delay: 3,
            },
            Action::JumpLoop => SpriteSequence {
                folder: "jump_loop",
                frames: 6,
                frame_delay: 4,
            },
            Action::Falling => SpriteSequence {
                folder: "falling_down",
                frames: 6,
                frame_delay: 4,
            },
            Action::Slashing => SpriteSequence {
                folder: "slashing",
                frames: 12,
                frame_delay: 2,
            },
            Action::RunSlashing => SpriteSequence {
                folder: "run_slashing",
                frames: 12,
                frame_delay: 2,
            },
            Action::AirSlashing => SpriteSequence {
                folder: "slashing_in_the_air",
                frames: 12,
                frame_delay: 2,
            },
            Action::Kicking => SpriteSequence {
                folder: "kicking",
                frames: 12,
                frame_delay: 2,
            },
            Action::Throwing => SpriteSequence {
                folder: "throwing",
                frames: 12,
                frame_delay: 3,
            },
            Action::RunThrowing => SpriteSequence {
                folder: "run_throwing",
                frames: 12,
                frame_delay: 2,
            },
            Action::AirThrowing => SpriteSequence {
                folder: "throwing_in_the_air",
                frames: 12,
                frame_delay: 2,
            },
            Action::Sliding => SpriteSequence {
                folder: "sliding",
                frames: 6,
                frame_delay: 3,
            },
            Action::Hurt => SpriteSequence {
                folder: "hurt",
                frames: 12,
                frame_delay: 3,
            },
            Action::Dying => SpriteSequence {
                folder: "dying",
                frames: 15,
                frame_delay: 4,
            },
        }
    }
}

/// Asset path for one frame, relative to `assets/`.
///
/// The folder name appears twice: once as the directory, once inside the file
/// name, e.g. `png/png_sequences/jump_start/0_skeleton_crusader_jump_start_003.png`.
pub fn frame_path(action: Action, frame: u32) -> String {
    let seq = action.sequence();
    format!(
        "png/png_sequences/{folder}/0_skeleton_crusader_{folder}_{frame:03}.png",
        folder = seq.folder,
        frame = frame
    )
}
