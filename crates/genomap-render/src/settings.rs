use serde::{Deserialize, Serialize};

/// Canvas and label settings handed through to the diagram renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSettings {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Radius of the circular backbone in pixels.
    pub backbone_radius: f32,
    /// Effort spent placing labels (higher is slower, 1-10).
    pub label_placement_quality: u8,
    /// Length of the line connecting a label to its feature.
    pub label_line_length: f64,
    /// Thickness of that line.
    pub label_line_thickness: f32,
    /// Draw a warning on the map when labels had to be dropped.
    pub show_warning: bool,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            backbone_radius: 160.0,
            label_placement_quality: 10,
            label_line_length: 8.0,
            label_line_thickness: 0.5,
            show_warning: true,
        }
    }
}
