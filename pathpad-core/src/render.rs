//! SVG assembly for the render collaborator.
//!
//! Everything here is a pure function of drawing state, re-run whenever the
//! session revision moves. Nothing in this module mutates anything.

use crate::state::{CanvasMode, Document, Extent, Layer, LayerSet};

/// `<path>` markup for one layer's outlines.
#[must_use]
pub fn layer_markup(layer: &Layer) -> String {
    let style = &layer.style;
    let fill = style
        .fill
        .map_or_else(|| "none".to_owned(), |color| color.to_string());
    format!(
        r#"<path d="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
        layer.path_code(),
        style.stroke,
        style.stroke_width,
        fill
    )
}
/// Guide overlay for the layer being edited, grouped so styling and toggling
/// stay independent of the path markup.
#[must_use]
pub fn guide_markup(layer: &Layer) -> String {
    format!(r#"<g class="guides">{}</g>"#, layer.guide_code())
}
/// Wrap body fragments in an `<svg>` document sized to the recorded extent.
/// With no extent reported yet, the document is left unsized.
#[must_use]
pub fn wrap_svg(fragments: &[String], extent: Option<Extent>) -> String {
    let size = extent.map_or_else(String::new, |extent| {
        format!(
            r#" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#,
            w = extent.width,
            h = extent.height
        )
    });
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"{size}>{}</svg>"#,
        fragments.concat()
    )
}
/// Render per the document mode: the edited layer plus its guides while
/// editing, every layer and no guides in preview.
#[must_use]
pub fn render(document: &Document, layers: &LayerSet) -> String {
    let fragments: Vec<String> = match document.mode {
        CanvasMode::Edit => {
            let layer = layers.active();
            vec![layer_markup(layer), guide_markup(layer)]
        }
        CanvasMode::Preview => layers.layers().iter().map(layer_markup).collect(),
    };
    wrap_svg(&fragments, document.extent)
}
