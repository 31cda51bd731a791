// Shared timing/visual/audio tuning constants used by the landing page.

// Rotation
pub const ROTATION_DURATION_MS: f64 = 6000.0; // time to turn from one face to the next

// Visual mapping
pub const TARGET_BLEND: f32 = 0.05; // target color chases measured bands
pub const CURRENT_BLEND: f32 = 0.01; // displayed color chases target
pub const HUE_SATURATION: f32 = 0.4;
pub const HUE_LIGHTNESS: f32 = 0.7;
pub const BASE_COLOR_RGB: [f32; 3] = [0.0, 0.667, 1.0]; // #00aaff

// Analysis
pub const FFT_SIZE: u32 = 256; // frequency bins = FFT_SIZE / 2
pub const BYTE_MAX: f32 = 255.0;

// Gain normalization
pub const GAIN_PEAK_DECAY: f32 = 0.995; // per frame
pub const GAIN_PEAK_FLOOR: f32 = 0.08; // below this, treat as silence and don't boost
pub const GAIN_MAX_BOOST: f32 = 4.0;

// Playback
pub const DEFAULT_VOLUME: f64 = 0.3;
pub const PLAYBACK_TICK_MS: i32 = 50;
pub const FADE_OUT_MS: f64 = 1000.0;
pub const FADE_IN_MS: f64 = 300.0;
pub const FADE_OUT_FLOOR: f64 = 0.05; // switch source once volume is at or under this
pub const FADE_LEAD_MS: f64 = FADE_OUT_MS + PLAYBACK_TICK_MS as f64; // remaining time that starts a fade

// Session persistence
pub const SAVE_INTERVAL_MS: f64 = 500.0;
pub const SAVE_TAIL_GUARD_SEC: f64 = 1.2; // don't save positions this close to the end
pub const RESUME_END_GUARD_SEC: f64 = 1.5; // skip the track if saved this close to the end
pub const KEY_POSITION: &str = "musicPosition";
pub const KEY_PLAYING: &str = "musicPlaying";
pub const KEY_TRACK_INDEX: &str = "musicTrackIndex";

// Camera
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Lighting
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0]; // normalized before use
pub const AMBIENT_LIGHT: f32 = 0.12;
