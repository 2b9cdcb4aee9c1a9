/// Tuning constants for pointer avoidance and the celebration effects.
///
/// Distances are CSS pixels, angles are degrees and delays are seconds unless
/// the name says otherwise. The values mirror the stylesheet's expectations
/// (keyframes read the `--tx/--ty` and `--fx/--fy` custom properties).
// Pointer avoidance
pub const AVOID_RADIUS_PX: f64 = 120.0; // pointer closer than this triggers a jump
pub const JUMP_DISTANCE_PX: f64 = 80.0; // magnitude of every jump
pub const VIEWPORT_PADDING_PX: f64 = 16.0; // gap kept to the viewport edges

// Dancing bears
pub const DANCER_COUNT: usize = 5;
pub const DANCER_GLYPH: &str = "🐻‍❄️";
pub const DANCER_DELAY_STEP_SEC: f64 = 0.15;
pub const DANCER_LEFT_START_PCT: f64 = 20.0;
pub const DANCER_LEFT_STEP_PCT: f64 = 15.0;

// Radial heart burst around the success message
pub const HEART_BURST_COUNT: usize = 12;
pub const HEART_BURST_ANGLE_DEG: (f64, f64) = (-180.0, 180.0);
pub const HEART_BURST_DIST_PX: (f64, f64) = (80.0, 160.0);
pub const HEART_BURST_MAX_DELAY_SEC: f64 = 0.3;
pub const HEART_BURST_CLEAR_MS: u32 = 2000;
pub const HEART_BURST_GLYPHS: &[&str] = &["💕", "💖", "💗", "❤️"];

// Side fireworks
pub const FIREWORK_PARTICLES_PER_SIDE: usize = 12;
pub const FIREWORK_ARC_DEG: (f64, f64) = (-30.0, 70.0); // fan around +x; the right side adds 180
pub const FIREWORK_DIST_PX: (f64, f64) = (120.0, 270.0);
pub const FIREWORK_DELAY_STEP_SEC: f64 = 0.04;
pub const FIREWORK_REMOVE_MS: u32 = 2500;
pub const FIREWORK_GLYPHS: &[&str] = &["💕", "💖", "💗", "❤️", "💖"];

// Ambient background hearts
pub const BACKGROUND_HEART_COUNT: usize = 9;
pub const BACKGROUND_LEFT_START_PCT: f64 = 5.0;
pub const BACKGROUND_LEFT_STEP_PCT: f64 = 10.0;
pub const BACKGROUND_GLYPHS: &[&str] = &["💖", "💕", "❤️", "💗"];

// Rejection banner
pub const REJECT_MESSAGE_VISIBLE_MS: u32 = 4500;
pub const REJECT_MESSAGES: &[&str] = &[
    "Not a valid choice",
    "Nice try.",
    "Still not valid.",
    "The correct answer starts with Y…",
    "Try the other button.",
    "Nope! ❌",
    "Wrong button! 😅",
    "Not gonna work.",
    "So close... yet so far.",
];

// Markup contract
pub const NO_BUTTON_ID: &str = "no-btn";
pub const YES_BUTTON_ID: &str = "yes-btn";
pub const NO_BUTTON_SPACER_ID: &str = "no-btn-spacer";
pub const INITIAL_PANEL_ID: &str = "initial-content";
pub const SUCCESS_PANEL_ID: &str = "success-content";
pub const REJECT_MESSAGE_ID: &str = "invalid-choice-msg";
pub const HIDDEN_CLASS: &str = "hidden";
