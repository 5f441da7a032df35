//! bowl-core: ten-pin bowling frame derivation and scoring.

pub mod frame;
pub mod score;

pub use frame::{frames, Frame, FrameKind, InvalidGameError, ALL_PINS, FRAMES_PER_GAME, MAX_ROLLS};
pub use score::{frame_scores, running_totals, score};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
