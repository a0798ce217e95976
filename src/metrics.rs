//! Fixed font metrics, so layout never depends on a live text-measurement backend and is identical
//! from run to run.
//!
//! Advances are given in thousandths of an em for a Helvetica-like face, and scaled linearly by
//! the font size.

use crate::render::Dimension;

/// The reference size which the advance table is expressed in.
pub const UNITS_PER_EM: Dimension = 1000;

const ASCENT: Dimension = 750;
const DESCENT: Dimension = 250;
const DEFAULT_ADVANCE: Dimension = 556;

/// The size of a run of text.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Metrics {
    pub width: Dimension,
    pub height: Dimension,

    /// The distance from the top of the run to the font baseline.
    pub baseline: Dimension,
}

fn advance(c: char) -> Dimension {
    match c {
        '0'..='9' => 556,
        // Minus is as wide as plus, like a typeset minus sign rather than a hyphen
        '+' | '-' | '=' | '<' | '>' => 584,
        '*' => 389,
        '/' | '.' | ',' | ' ' => 278,
        '(' | ')' | '[' | ']' => 333,

        'f' | 't' => 278,
        'i' | 'j' | 'l' => 222,
        'm' => 833,
        'r' => 333,
        'w' => 722,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'a'..='z' => 556,

        'I' => 278,
        'J' => 500,
        'L' => 556,
        'F' | 'T' | 'Z' => 611,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'G' | 'O' | 'Q' => 778,
        'M' => 833,
        'W' => 944,
        'A'..='Z' => 667,

        _ => DEFAULT_ADVANCE,
    }
}

/// Scales a length in table units to pixels at `font_size`, rounding to the nearest pixel.
pub fn scale(units: Dimension, font_size: Dimension) -> Dimension {
    (units * font_size + UNITS_PER_EM / 2) / UNITS_PER_EM
}

/// Measures `text` at `font_size`.
pub fn get_metrics(text: &str, font_size: Dimension) -> Metrics {
    let units: Dimension = text.chars().map(advance).sum();

    Metrics {
        width: scale(units, font_size),
        height: scale(ASCENT + DESCENT, font_size),
        baseline: scale(ASCENT, font_size),
    }
}
