//! Canvas particle simulations: twinkling stars, falling snow and confetti bursts.

pub mod confetti;
pub mod snow;
pub mod stars;

pub use confetti::ConfettiField;
pub use snow::SnowField;
pub use stars::StarField;
