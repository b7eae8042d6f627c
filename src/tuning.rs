//! Device profiles and the playfield constants derived from them
//!
//! Desktop plays on a fixed 600x200 field. Mobile scales everything to the
//! viewport, trading a little speed and jump height for a smaller screen.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Device class, picked once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceProfile::Desktop => "Desktop",
            DeviceProfile::Mobile => "Mobile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "desktop" | "pc" => Some(DeviceProfile::Desktop),
            "mobile" | "phone" | "tablet" => Some(DeviceProfile::Mobile),
            _ => None,
        }
    }

    /// Guess the profile from a browser user agent string
    pub fn detect(user_agent: &str) -> Self {
        const MOBILE_MARKERS: [&str; 5] = ["Mobi", "Android", "iPhone", "iPad", "iPod"];
        let ua = user_agent.to_lowercase();
        if MOBILE_MARKERS
            .iter()
            .any(|marker| ua.contains(&marker.to_lowercase()))
        {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    /// Horizontal obstacle speed (pixels per tick)
    pub fn obstacle_speed(&self) -> f32 {
        match self {
            DeviceProfile::Desktop => 5.0,
            DeviceProfile::Mobile => 3.0,
        }
    }

    /// Multiplier applied to the jump impulse when a jump starts
    pub fn jump_factor(&self) -> f32 {
        match self {
            DeviceProfile::Desktop => 0.7,
            DeviceProfile::Mobile => 0.75,
        }
    }

    /// Canvas size for a viewport
    pub fn playfield_size(&self, viewport: Viewport) -> (f32, f32) {
        match self {
            DeviceProfile::Desktop => (600.0, 200.0),
            DeviceProfile::Mobile => {
                let width = (viewport.width * 0.95).floor();
                let height = (viewport.height * 0.6).min(width * 0.33).floor();
                (width, height)
            }
        }
    }

    /// Edge length of the runner and the obstacle
    pub fn entity_size(&self, playfield_height: f32) -> f32 {
        match self {
            DeviceProfile::Desktop => 30.0,
            DeviceProfile::Mobile => (playfield_height * 0.15).floor(),
        }
    }

    /// Gravity per tick (applied at half strength while airborne)
    pub fn gravity(&self, playfield_height: f32) -> f32 {
        match self {
            DeviceProfile::Desktop => 2.0,
            DeviceProfile::Mobile => playfield_height * 0.01,
        }
    }

    /// Raw jump impulse, before `jump_factor`; negative is upward
    pub fn jump_velocity(&self, playfield_height: f32, runner_size: f32) -> f32 {
        match self {
            DeviceProfile::Desktop => -20.0,
            DeviceProfile::Mobile => {
                -(playfield_height * 0.17).min(playfield_height - runner_size - 10.0)
            }
        }
    }
}

/// Browser window size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The bounded region the runner and obstacle live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Ground band thickness at the bottom
    pub ground: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, ground: f32) -> Self {
        Self {
            width,
            height,
            ground,
        }
    }

    /// Top edge of the ground band
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - self.ground
    }

    /// Resting y for an entity of the given size
    #[inline]
    pub fn floor_top(&self, size: f32) -> f32 {
        self.floor_y() - size
    }

    /// Largest x an entity of the given size may reach
    #[inline]
    pub fn max_x(&self, size: f32) -> f32 {
        self.width - size - RIGHT_MARGIN
    }
}

/// Everything the simulation needs to know about the current device and screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub profile: DeviceProfile,
    pub playfield: Playfield,
    pub runner_size: f32,
    pub obstacle_size: f32,
    pub obstacle_speed: f32,
    pub gravity: f32,
    /// Raw upward impulse (negative)
    pub jump_velocity: f32,
    /// Damping applied to `jump_velocity` when a jump starts
    pub jump_factor: f32,
}

impl Tuning {
    /// Derive the tuning for a profile on a viewport
    pub fn configure(profile: DeviceProfile, viewport: Viewport) -> Result<Self, ConfigError> {
        if !(viewport.width.is_finite()
            && viewport.height.is_finite()
            && viewport.width > 0.0
            && viewport.height > 0.0)
        {
            return Err(ConfigError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let (width, height) = profile.playfield_size(viewport);
        let size = profile.entity_size(height);
        let tuning = Self {
            profile,
            playfield: Playfield::new(width, height, GROUND_THICKNESS),
            runner_size: size,
            obstacle_size: size,
            obstacle_speed: profile.obstacle_speed(),
            gravity: profile.gravity(height),
            jump_velocity: profile.jump_velocity(height, size),
            jump_factor: profile.jump_factor(),
        };
        tuning.validate()
    }

    /// Check that the physics is well defined for these numbers
    pub fn validate(self) -> Result<Self, ConfigError> {
        let positive = [
            ("playfield width", self.playfield.width),
            ("playfield height", self.playfield.height),
            ("ground thickness", self.playfield.ground),
            ("runner size", self.runner_size),
            ("obstacle size", self.obstacle_size),
            ("obstacle speed", self.obstacle_speed),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if !(self.jump_velocity < 0.0) {
            return Err(ConfigError::JumpNotUpward(self.jump_velocity));
        }
        if !(self.jump_factor > 0.0 && self.jump_factor <= 1.0) {
            return Err(ConfigError::JumpFactorOutOfRange(self.jump_factor));
        }

        let field = self.playfield;
        let too_small = |entity: &'static str, size: f32| ConfigError::PlayfieldTooSmall {
            entity,
            width: field.width,
            height: field.height,
            ground: field.ground,
            size,
        };
        if field.floor_top(self.runner_size) < 0.0
            || field.max_x(self.runner_size) < RUNNER_START_X
        {
            return Err(too_small("runner", self.runner_size));
        }
        if field.floor_top(self.obstacle_size) < 0.0 {
            return Err(too_small("obstacle", self.obstacle_size));
        }

        Ok(self)
    }

    /// Vertical velocity a jump starts with
    #[inline]
    pub fn launch_velocity(&self) -> f32 {
        self.jump_velocity * self.jump_factor
    }
}
