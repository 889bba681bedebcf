use core::fmt;

/// Invariant checked after every frame by strict replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCode {
    HealthRange,
    StaminaRange,
    DashTimerRange,
    DashCooldownRange,
    DashTimerOutsideDash,
    ParryWindowRange,
    PlayerScreenBounds,
    CameraBounds,
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HealthRange => write!(f, "HEALTH_RANGE"),
            Self::StaminaRange => write!(f, "STAMINA_RANGE"),
            Self::DashTimerRange => write!(f, "DASH_TIMER_RANGE"),
            Self::DashCooldownRange => write!(f, "DASH_COOLDOWN_RANGE"),
            Self::DashTimerOutsideDash => write!(f, "DASH_TIMER_OUTSIDE_DASH"),
            Self::ParryWindowRange => write!(f, "PARRY_WINDOW_RANGE"),
            Self::PlayerScreenBounds => write!(f, "PLAYER_SCREEN_BOUNDS"),
            Self::CameraBounds => write!(f, "CAMERA_BOUNDS"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuleCode {}
