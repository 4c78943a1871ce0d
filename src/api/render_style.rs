use crate::render::Color;

/// Style contract for the current render frame.
///
/// Font sizes and stroke widths are given at zoom 1.0 and scaled with the
/// view transform when the frame is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub node_fill_color: Color,
    pub node_border_color: Color,
    pub node_border_width: f64,
    pub node_corner_radius: f64,
    /// Border applied to the highlighted node instead of `node_border_*`.
    pub highlight_border_color: Color,
    pub highlight_border_width: f64,
    pub highlight_fill_color: Color,
    pub avatar_fill_color: Color,
    pub avatar_text_color: Color,
    pub name_text_color: Color,
    pub role_text_color: Color,
    pub toggle_fill_color: Color,
    pub toggle_border_color: Color,
    pub toggle_text_color: Color,
    pub connector_color: Color,
    pub connector_width: f64,
    pub name_font_size_px: f64,
    pub role_font_size_px: f64,
    pub avatar_font_size_px: f64,
    pub toggle_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_fill_color: Color::rgb(1.0, 1.0, 1.0),
            node_border_color: Color::rgb(0.85, 0.86, 0.89),
            node_border_width: 1.0,
            node_corner_radius: 8.0,
            highlight_border_color: Color::rgb(0.16, 0.44, 0.93),
            highlight_border_width: 3.0,
            highlight_fill_color: Color::rgb(0.93, 0.96, 1.0),
            avatar_fill_color: Color::rgb(0.88, 0.91, 0.97),
            avatar_text_color: Color::rgb(0.16, 0.24, 0.45),
            name_text_color: Color::rgb(0.09, 0.11, 0.15),
            role_text_color: Color::rgb(0.42, 0.45, 0.5),
            toggle_fill_color: Color::rgb(1.0, 1.0, 1.0),
            toggle_border_color: Color::rgb(0.7, 0.72, 0.76),
            toggle_text_color: Color::rgb(0.25, 0.27, 0.31),
            connector_color: Color::rgb(0.75, 0.77, 0.8),
            connector_width: 1.5,
            name_font_size_px: 13.0,
            role_font_size_px: 11.0,
            avatar_font_size_px: 12.0,
            toggle_font_size_px: 12.0,
        }
    }
}
