pub mod appearance;
pub mod emitter;
pub mod motion;

pub use appearance::refresh_appearance;
pub use emitter::{spawn, spawn_count};
pub use motion::integrate;
