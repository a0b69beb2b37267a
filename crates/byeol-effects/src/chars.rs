//! Character constants for the star effect.

/// Characters used for shooting star heads.
pub const HEAD_CHARS: &[char] = &['✦', '✧', '*'];

/// Characters used for star trails, brightest first.
pub const TRAIL_CHARS: &[char] = &['•', '·', '.'];

/// Characters used for the twinkling backdrop.
pub const BACKDROP_CHARS: &[char] = &['.', '·', '+', '˙'];
