// Page wiring for the web front-end.

// Canvas the veil is drawn into
pub const OVERLAY_CANVAS_ID: &str = "overlay";

// Optional overrides read from the overlay canvas
pub const ATTR_VEIL_COLOR: &str = "data-veil-color";
pub const ATTR_POINTS: &str = "data-points";
pub const ATTR_RADIUS: &str = "data-radius";
pub const ATTR_MAX_PARTICLES: &str = "data-max-particles";
pub const ATTR_SEED: &str = "data-seed";

// Upper bounds accepted for overrides
pub const MAX_POINTS_OVERRIDE: usize = 512;
pub const MAX_PARTICLES_OVERRIDE: usize = 1000;

// Composite operations of CanvasRenderingContext2d
pub const COMPOSITE_OVER: &str = "source-over";
pub const COMPOSITE_ERASE: &str = "destination-out";
