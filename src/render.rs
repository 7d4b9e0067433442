//! Draw geometry and painting.
//!
//! The image's center sits on the surface's center; zoom scales around the
//! image's own center and the offset is applied afterwards.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::ViewportError;
use crate::model::Transform;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub trait NaturalSize {
    /// Intrinsic pixel size, `(0, 0)` while undecoded.
    fn natural_size(&self) -> (f64, f64);
}

impl NaturalSize for HtmlImageElement {
    fn natural_size(&self) -> (f64, f64) {
        (self.natural_width() as f64, self.natural_height() as f64)
    }
}

/// A 2D drawing target.
pub trait Surface<I> {
    fn clear(&self, size: SurfaceSize);
    fn draw_image(&self, image: &I, rect: DrawRect) -> Result<(), ViewportError>;
}

impl Surface<HtmlImageElement> for CanvasRenderingContext2d {
    fn clear(&self, size: SurfaceSize) {
        self.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn draw_image(&self, image: &HtmlImageElement, rect: DrawRect) -> Result<(), ViewportError> {
        self.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        )?;
        Ok(())
    }
}

pub fn draw_rect(image: (f64, f64), surface: SurfaceSize, transform: &Transform) -> DrawRect {
    let (w, h) = image;
    let zoom = transform.zoom;
    let centre_x = surface.width / 2.0 - w / 2.0 * zoom;
    let centre_y = surface.height / 2.0 - h / 2.0 * zoom;
    DrawRect {
        x: centre_x + transform.offset_x,
        y: centre_y + transform.offset_y,
        width: w * zoom,
        height: h * zoom,
    }
}

/// Clear the surface and draw the image. With no decoded image nothing is
/// touched and `Ok(None)` is returned.
pub fn paint<I, S>(
    surface: &S,
    image: Option<&I>,
    transform: &Transform,
    size: SurfaceSize,
) -> Result<Option<DrawRect>, ViewportError>
where
    I: NaturalSize,
    S: Surface<I>,
{
    let Some(image) = image else {
        return Ok(None);
    };
    let natural = image.natural_size();
    if natural.0 <= 0.0 || natural.1 <= 0.0 {
        return Ok(None);
    }
    let rect = draw_rect(natural, size, transform);
    surface.clear(size);
    surface.draw_image(image, rect)?;
    Ok(Some(rect))
}

/// Wipe the whole surface. Used once when the current image is dropped, so
/// its last frame does not linger while the next one loads.
pub fn blank<I, S: Surface<I>>(surface: &S, size: SurfaceSize) {
    surface.clear(size);
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ViewportError> {
    canvas
        .get_context("2d")?
        .ok_or(ViewportError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ViewportError::NoContext)
}
