use thiserror::Error;

/// Top-level error type for the Caliber workspace.
#[derive(Debug, Error)]
pub enum CaliberError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gear geometry error: {0}")]
    Gear(#[from] GearError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid speed: {0} (must be within 0.1..=5.0)")]
    InvalidSpeed(f32),

    #[error("Invalid explode factor: {0} (must be within 0.0..=2.0)")]
    InvalidExplode(f32),

    #[error("Invalid window resolution: {0}x{1} (both sides must be > 0)")]
    InvalidResolution(u32, u32),
}

/// Gear specification errors.
///
/// Copy + static layout for cheap propagation; raised fail-fast at spec
/// construction time since a bad spec is a programming error, not a runtime
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GearError {
    #[error("Tooth count {got} is below the minimum of 3")]
    ToothCountTooLow { got: u32 },

    #[error("Gear radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("Gear thickness must be positive, got {0}")]
    NonPositiveThickness(f32),
}
