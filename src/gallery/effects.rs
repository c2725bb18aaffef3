//! Headline scramble and card tilt math
//!
//! Pure text and geometry helpers; the controller owns the timers and DOM
//! writes that drive them.

use rand::Rng;

/// Glyph pool for the scramble effect. The run of underscores weights the
/// pool toward blanks.
pub const GLITCH_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";

/// Interval between scramble passes, in milliseconds.
pub const GLITCH_INTERVAL_MS: i32 = 3000;
/// Delay before the original text is restored, in milliseconds.
pub const GLITCH_RESTORE_MS: i32 = 100;

/// Scramble `text`, swapping roughly one character in ten for a glyph.
pub fn scramble<R: Rng>(text: &str, rng: &mut R) -> String {
    let glyphs: Vec<char> = GLITCH_GLYPHS.chars().collect();
    text.chars()
        .map(|c| {
            if rng.random::<f32>() > 0.9 {
                glyphs[rng.random_range(0..glyphs.len())]
            } else {
                c
            }
        })
        .collect()
}

/// Resting transform applied when the pointer leaves a card.
pub const TILT_REST: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";

/// CSS transform tilting a card toward the pointer, up to 10 degrees per
/// axis with a slight zoom. `x` and `y` are pointer offsets from the card's
/// top-left corner.
pub fn tilt_transform(x: f32, y: f32, width: f32, height: f32) -> String {
    let rot_y = (x / width - 0.5) * 20.0;
    let rot_x = (0.5 - y / height) * 20.0;
    format!("perspective(1000px) rotateX({rot_x:.2}deg) rotateY({rot_y:.2}deg) scale(1.02)")
}
