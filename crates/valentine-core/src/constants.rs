// Shared scene tuning constants used by the core builder and the web frontend.

// Greeting
pub const GREETING_LINE: &str = "Happy Valentines";
pub const NAME_INDENT: &str = "        "; // leading spaces on the name line
pub const ABSENT_NAME: &str = "null"; // rendered when `?name=` is missing
pub const NAME_QUERY_KEY: &str = "name";

// Text geometry
pub const TEXT_SIZE: f32 = 0.5;
pub const TEXT_DEPTH: f32 = 0.2;
pub const TEXT_CURVE_SEGMENTS: u32 = 12;
pub const TEXT_BEVEL_THICKNESS: f32 = 0.03;
pub const TEXT_BEVEL_SIZE: f32 = 0.02;
pub const TEXT_BEVEL_OFFSET: f32 = 0.0;
pub const TEXT_BEVEL_SEGMENTS: u32 = 5;

// Heart extrusion (outline is ~110 units wide, hence the tiny instance scale)
pub const HEART_DEPTH: f32 = 8.0;
pub const HEART_STEPS: u32 = 2;
pub const HEART_BEVEL_SEGMENTS: u32 = 2;
pub const HEART_BEVEL_SIZE: f32 = 20.0;
pub const HEART_BEVEL_THICKNESS: f32 = 20.0;
pub const HEART_CURVE_SEGMENTS: u32 = 12;

// Heart field
pub const HEART_COUNT: usize = 100;
pub const HEART_SPREAD: f32 = 15.0; // side of the cube hearts are scattered in
pub const HEART_SCALE: f32 = 0.005;
pub const ROTATION_STEP: f32 = 0.01; // radians added to x and y every frame

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START: [f32; 3] = [1.0, 1.0, 2.0];

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // dolly scale per wheel notch

// Output
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Static assets, relative to the page
pub const FONT_PATH: &str = "/fonts/helvetiker_regular.typeface.json";
pub const MATCAP_PATH: &str = "textures/matcaps/8.png";
