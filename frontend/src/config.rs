use log::Level;

/// How long the "Copied!" confirmation stays up after a successful copy.
pub const COPY_CONFIRMATION_MS: u32 = 1400;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub const BOOKING_SUBJECT: &str = "Booking inquiry";

pub const SITE_CONTENT: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
