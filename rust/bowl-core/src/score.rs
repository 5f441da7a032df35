//! Scoring over a derived frame layout.
//!
//! Bonus lookahead is by roll index, not by frame: a strike counts the
//! two deliveries that follow it wherever they land, a spare counts one.
//! The tenth frame is self-contained and gets no lookahead at all.

use crate::frame::{frames, Frame, FrameKind, InvalidGameError, ALL_PINS, FRAMES_PER_GAME};

/// Total score of a complete game.
///
/// Pure: identical input always yields the identical total. Malformed
/// input is rejected with `InvalidGameError`; there is no best-effort
/// partial total.
pub fn score(rolls: &[u8]) -> Result<u16, InvalidGameError> {
    Ok(frame_scores(rolls)?.iter().map(|&s| u16::from(s)).sum())
}

/// Per-frame scores (base pinfall plus earned bonus), frame 1 first.
pub fn frame_scores(rolls: &[u8]) -> Result<[u8; FRAMES_PER_GAME], InvalidGameError> {
    let layout = frames(rolls)?;
    let mut out = [0u8; FRAMES_PER_GAME];
    for (slot, frame) in out.iter_mut().zip(&layout) {
        *slot = frame_score(rolls, frame);
    }
    Ok(out)
}

/// Cumulative scoreboard totals; the last entry equals `score`.
pub fn running_totals(rolls: &[u8]) -> Result<[u16; FRAMES_PER_GAME], InvalidGameError> {
    let per_frame = frame_scores(rolls)?;
    let mut out = [0u16; FRAMES_PER_GAME];
    let mut sum = 0u16;
    for (slot, &s) in out.iter_mut().zip(&per_frame) {
        sum += u16::from(s);
        *slot = sum;
    }
    Ok(out)
}

fn frame_score(rolls: &[u8], frame: &Frame) -> u8 {
    let s = frame.start;
    if frame.number == 10 {
        // Sum of its own 2-3 rolls; bonus rolls live inside the frame.
        return rolls[s..s + frame.len as usize].iter().sum();
    }
    // `frames` validated the layout, so every lookahead roll below
    // exists: a strike or spare in frame 9 reaches into the tenth.
    match frame.kind {
        FrameKind::Strike => ALL_PINS + rolls[s + 1] + rolls[s + 2],
        FrameKind::Spare => ALL_PINS + rolls[s + 2],
        FrameKind::Open => rolls[s] + rolls[s + 1],
    }
}
