// Default tuning for the reveal effect, shared by the web and native front-ends.

// Boundary ring
pub const ANCHOR_COUNT: usize = 32;
pub const MIN_ANCHOR_COUNT: usize = 3;
pub const REST_RADIUS: f32 = 800.0; // px, radius of the hole at rest
pub const SPRING_TENSION: f32 = 0.04; // pull toward the home position per tick
pub const BOUNDARY_DAMPING: f32 = 0.92; // velocity kept per tick
pub const VELOCITY_GAIN: f32 = 0.7; // pointer speed -> bulge offset
pub const DRAG: f32 = 0.3; // bulge offset -> push along motion

// Particles
pub const MAX_PARTICLES: usize = 25;
pub const MOTION_THRESHOLD: f32 = 2.0; // px/tick, soft gate
pub const SPAWN_THRESHOLD: f32 = 3.0; // px/tick, strict gate
pub const PARTICLE_RADIUS_MIN: f32 = 3.0;
pub const PARTICLE_RADIUS_MAX: f32 = 8.0;
pub const VELOCITY_INHERIT: f32 = 0.2; // share of the reversed pointer velocity
pub const VELOCITY_JITTER: f32 = 0.5; // full span, centered on zero
pub const ANGLE_JITTER: f32 = 0.8; // radians, full span centered on the trailing direction
pub const INITIAL_OPACITY: f32 = 0.7;
pub const DECAY_RATE_MIN: f32 = 0.01;
pub const DECAY_RATE_MAX: f32 = 0.03;
pub const PARTICLE_DAMPING: f32 = 0.98;
pub const PARTICLE_RGB: [u8; 3] = [0xff, 0xff, 0xff];

// Veil
pub const VEIL_RGB: [u8; 3] = [0xff, 0xa5, 0x00];
pub const VEIL_INNER_RADIUS: f32 = 100.0; // px
pub const VEIL_OUTER_RADIUS_FACTOR: f32 = 0.8; // times surface width

// Misc
pub const DEFAULT_SEED: u64 = 42;
pub const CURVE_FLATTEN_SEGMENTS: usize = 8;
pub const STATS_INTERVAL_SEC: f32 = 5.0;
