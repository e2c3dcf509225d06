//! Animation clips and playback.
//!
//! The locomotion FSM only picks clips and asks whether one-shot clips are
//! still running; frame progression lives here.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::AnimationChannel;

/// Clips a character can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    #[default]
    Idle,
    Running,
    Jump,
    Fall,
    Land,
    WallSlide,
    WallJump,
}

impl AnimationClip {
    pub fn name(self) -> &'static str {
        match self {
            AnimationClip::Idle => "idle",
            AnimationClip::Running => "running",
            AnimationClip::Jump => "jump",
            AnimationClip::Fall => "fall",
            AnimationClip::Land => "land",
            AnimationClip::WallSlide => "wall_slide",
            AnimationClip::WallJump => "wall_jump",
        }
    }

    pub fn total_frames(self) -> u32 {
        match self {
            AnimationClip::Idle => 4,
            AnimationClip::Running => 6,
            AnimationClip::Jump => 2,
            AnimationClip::Fall => 2,
            AnimationClip::Land => 3,
            AnimationClip::WallSlide => 2,
            AnimationClip::WallJump => 3,
        }
    }

    /// Seconds per frame.
    pub fn frame_duration(self) -> f32 {
        match self {
            AnimationClip::Running => 0.1,
            AnimationClip::Land => 0.08, // Snappy recovery
            _ => 0.15,
        }
    }

    pub fn looping(self) -> bool {
        matches!(
            self,
            AnimationClip::Idle
                | AnimationClip::Running
                | AnimationClip::Fall
                | AnimationClip::WallSlide
        )
    }

    /// Placeholder tint until real sprite sheets exist.
    pub fn tint(self) -> Color {
        match self {
            AnimationClip::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationClip::Running => Color::srgb(0.85, 0.95, 0.85),
            AnimationClip::Jump => Color::srgb(0.85, 0.85, 0.95),
            AnimationClip::Fall => Color::srgb(0.75, 0.75, 0.9),
            AnimationClip::Land => Color::srgb(0.95, 0.9, 0.75),
            AnimationClip::WallSlide => Color::srgb(0.95, 0.8, 0.8),
            AnimationClip::WallJump => Color::srgb(1.0, 0.7, 0.5),
        }
    }
}

/// Component for clip playback on a character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Clip currently assigned (kept after it finishes or is stopped).
    pub clip: AnimationClip,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    pub playing: bool,
    /// Number of times a clip was (re)started.
    pub restarts: u32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            clip: AnimationClip::Idle,
            current_frame: 0,
            frame_timer: 0.0,
            playing: false,
            restarts: 0,
        }
    }
}

impl AnimationController {
    /// Advance playback by `dt`. Returns true when a one-shot clip just finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }

        let frame_duration = self.clip.frame_duration();
        let total_frames = self.clip.total_frames();
        self.frame_timer += dt;

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.current_frame += 1;

            if self.current_frame >= total_frames {
                if self.clip.looping() {
                    self.current_frame = 0;
                } else {
                    self.current_frame = total_frames - 1;
                    self.playing = false;
                    return true;
                }
            }
        }

        false
    }

    /// Sprite key for the current frame, e.g. `player_land_2`.
    pub fn sprite_key(&self, base: &str) -> String {
        format!("{}_{}_{}", base, self.clip.name(), self.current_frame + 1)
    }
}

impl AnimationChannel for AnimationController {
    fn play(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        self.restarts += 1;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Message fired when a one-shot clip completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub clip: AnimationClip,
}

impl Message for AnimationFinished {}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            finished_events.write(AnimationFinished {
                entity,
                clip: controller.clip,
            });
        }
    }
}

/// Tint sprites by their current clip.
pub fn tint_by_clip(
    mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.color = controller.clip.tint();
    }
}
