pub mod app;
pub mod image_adjust;
pub mod listeners;
pub mod zoom_controls;

pub use app::{App, AppProps};
pub use image_adjust::{ImageAdjust, ImageAdjustProps};
