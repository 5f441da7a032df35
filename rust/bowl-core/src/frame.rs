//! Frame derivation: grouping a flat roll sequence into ten frames.
//!
//! Frames carry no pinfall of their own; they are a positional view over
//! the caller's roll sequence, derived once and never mutated.

use thiserror::Error;

/// Frames in a game.
pub const FRAMES_PER_GAME: usize = 10;

/// Pins standing at the start of a delivery.
pub const ALL_PINS: u8 = 10;

/// Longest legal game: 9 frames of up to 2 rolls plus up to 3 in the tenth.
pub const MAX_ROLLS: usize = 21;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidGameError {
    #[error("roll {roll} knocked down {pins} pins, outside 0..=10")]
    PinsOutOfRange { roll: usize, pins: u8 },
    #[error("frame {frame} totals {total} pins across two rolls")]
    TooManyPinsInFrame { frame: u8, total: u8 },
    #[error("roll sequence ends inside frame {frame}")]
    TruncatedGame { frame: u8 },
    #[error("frame {frame} earned a bonus roll that is missing")]
    MissingBonusRoll { frame: u8 },
    #[error("{extra} roll(s) past the end of the game")]
    TrailingRolls { extra: usize },
}

/// How a frame resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Fewer than 10 pins across the frame's first two rolls.
    Open,
    /// All 10 pins across the first two rolls (first roll below 10).
    Spare,
    /// All 10 pins on the first roll.
    Strike,
}

/// One of the ten frames, located within the roll sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Frame number, 1..=10.
    pub number: u8,
    /// Index of the frame's first roll in the game's roll sequence.
    pub start: usize,
    /// Rolls this frame consumes: 1 for a strike, 2 otherwise; the tenth
    /// consumes 3 when it earned a bonus roll.
    pub len: u8,
    pub kind: FrameKind,
}

/// Derive the ten frames of a complete game from its roll sequence.
///
/// No explicit frame boundaries exist in the input; they are recovered
/// positionally. Rejects malformed input outright: pin counts outside
/// 0..=10, two-roll frames summing past 10, games that end mid-frame or
/// without an earned tenth-frame bonus roll, and rolls past the end of
/// the game.
pub fn frames(rolls: &[u8]) -> Result<[Frame; FRAMES_PER_GAME], InvalidGameError> {
    for (i, &pins) in rolls.iter().enumerate() {
        if pins > ALL_PINS {
            return Err(InvalidGameError::PinsOutOfRange { roll: i, pins });
        }
    }

    let mut out = [Frame {
        number: 0,
        start: 0,
        len: 0,
        kind: FrameKind::Open,
    }; FRAMES_PER_GAME];
    let mut i = 0usize;

    for number in 1..=9u8 {
        let first = *rolls
            .get(i)
            .ok_or(InvalidGameError::TruncatedGame { frame: number })?;
        let frame = if first == ALL_PINS {
            Frame {
                number,
                start: i,
                len: 1,
                kind: FrameKind::Strike,
            }
        } else {
            let second = *rolls
                .get(i + 1)
                .ok_or(InvalidGameError::TruncatedGame { frame: number })?;
            let total = first + second;
            if total > ALL_PINS {
                return Err(InvalidGameError::TooManyPinsInFrame {
                    frame: number,
                    total,
                });
            }
            let kind = if total == ALL_PINS {
                FrameKind::Spare
            } else {
                FrameKind::Open
            };
            Frame {
                number,
                start: i,
                len: 2,
                kind,
            }
        };
        out[(number - 1) as usize] = frame;
        i += frame.len as usize;
    }

    out[FRAMES_PER_GAME - 1] = tenth_frame(rolls, i)?;
    i += out[FRAMES_PER_GAME - 1].len as usize;

    if i < rolls.len() {
        return Err(InvalidGameError::TrailingRolls {
            extra: rolls.len() - i,
        });
    }

    Ok(out)
}

/// The tenth frame takes 2 rolls, or 3 when a strike/spare earned a
/// bonus roll. Bonus rolls resolve this frame's score only; they never
/// open a frame of their own.
fn tenth_frame(rolls: &[u8], start: usize) -> Result<Frame, InvalidGameError> {
    let first = *rolls
        .get(start)
        .ok_or(InvalidGameError::TruncatedGame { frame: 10 })?;
    let second = *rolls
        .get(start + 1)
        .ok_or(InvalidGameError::TruncatedGame { frame: 10 })?;

    let kind = if first == ALL_PINS {
        FrameKind::Strike
    } else if first + second == ALL_PINS {
        FrameKind::Spare
    } else if first + second > ALL_PINS {
        return Err(InvalidGameError::TooManyPinsInFrame {
            frame: 10,
            total: first + second,
        });
    } else {
        FrameKind::Open
    };

    let len = match kind {
        FrameKind::Open => 2,
        FrameKind::Spare | FrameKind::Strike => {
            let third = *rolls
                .get(start + 2)
                .ok_or(InvalidGameError::MissingBonusRoll { frame: 10 })?;
            // After a strike, the next two deliveries share a rack unless
            // the first of them is itself a strike.
            if kind == FrameKind::Strike && second < ALL_PINS && second + third > ALL_PINS {
                return Err(InvalidGameError::TooManyPinsInFrame {
                    frame: 10,
                    total: second + third,
                });
            }
            3
        }
    };

    Ok(Frame {
        number: 10,
        start,
        len,
        kind,
    })
}
