pub const WINDOW_WIDTH: i32 = 1024;           // Initial window size (half a scene texture)
pub const WINDOW_HEIGHT: i32 = 512;
pub const FPS: u32 = 60;                      // Render loop target frame rate

pub const TEXTURE_WIDTH: i32 = 2048;          // Scene texture dimensions
pub const TEXTURE_HEIGHT: i32 = 1024;
pub const TEXTURE_RATIO: f32 = TEXTURE_WIDTH as f32 / TEXTURE_HEIGHT as f32;

pub const HUE_TICK_RATE: f32 = 30.0;          // Hue-shift samples per second
pub const HUE_TICK_MS: f32 = 1000.0 / HUE_TICK_RATE;
