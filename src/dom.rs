use valentine_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn location_href(window: &web::Window) -> Option<String> {
    window.location().href().ok()
}

pub fn query_canvas(
    window: &web::Window,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("query_selector({}) failed: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("no element matches {}", selector))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("{} is not a canvas", selector))
}

/// Window inner size in CSS pixels plus the current device pixel ratio.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(
        css(window.inner_width()),
        css(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

/// Sets the drawing buffer to the viewport's backing size and the CSS box to
/// its logical size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}
