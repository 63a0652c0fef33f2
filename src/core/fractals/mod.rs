pub mod colour_mapping;
pub mod escape;
pub mod escape_time;
pub mod fractal_kinds;
