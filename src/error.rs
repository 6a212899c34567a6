//! Error type for fallible parsing and configuration.
//!
//! The layout computations themselves never fail; degenerate input is
//! handled by definition. Only textual input (clock times, day names,
//! config files) can be rejected.

/// Errors raised while parsing timeline input or configuration.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Invalid clock time '{0}': expected HH:MM between 00:00 and 24:00")]
    InvalidClockTime(String),

    #[error("Invalid availability window {from}-{to}: start must precede end")]
    InvalidWindow { from: String, to: String },

    #[error("Invalid operating hours {start}-{end}: expected 0 <= start < end <= 24")]
    InvalidOperatingHours { start: u32, end: u32 },

    #[error("Invalid timeline scale: {0} px per hour must be positive")]
    InvalidScale(f64),

    #[error("Unknown day of week: {0}")]
    UnknownDay(String),

    #[error("Invalid timeline config: {0}")]
    Config(#[from] toml::de::Error),
}
