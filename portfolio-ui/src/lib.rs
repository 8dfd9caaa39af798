pub mod api;
pub mod content;
pub mod desktop;
pub mod interop;
pub mod windows;

pub use desktop::Desktop;
pub use windows::WindowLayer;
