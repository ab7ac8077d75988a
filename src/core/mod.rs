pub mod rotating_frame;
pub mod station;
pub mod window;
