pub mod binding;
pub mod drag;
pub mod gesture;
pub mod image;
pub mod pointers;

pub use binding::{BindingChange, GestureBinding};
pub use drag::Drag;
pub use gesture::{GestureController, ZoomDirection};
pub use image::{ImageSlot, LoadTicket};
pub use pointers::{PointerId, PointerSample, PointerTracker};
