pub mod controls;
pub mod export;
pub mod plugin;
pub mod preview;
pub mod ui;

pub use plugin::PfxRenderPlugin;
