use genomap_core::{GeneFeature, Strand};
use serde::{Deserialize, Serialize};

use crate::color::{ColorPicker, ColorScheme, Rgb};

/// How a feature's arc is drawn on the backbone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    Standard,
    ClockwiseArrow,
    CounterclockwiseArrow,
}

impl Decoration {
    pub fn for_strand(strand: Strand) -> Self {
        match strand {
            Strand::Forward => Decoration::ClockwiseArrow,
            Strand::Reverse => Decoration::CounterclockwiseArrow,
        }
    }
}

/// A gene with its visual attributes, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramFeature {
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
    pub color: Rgb,
    pub decoration: Decoration,
}

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub scheme: ColorScheme,
    /// Draw arrows pointing along the strand instead of plain arcs.
    pub strand_decoration: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::default(),
            strand_decoration: true,
        }
    }
}

/// Assigns color and decoration to parsed genes.
pub struct FeatureStyler {
    picker: ColorPicker,
    strand_decoration: bool,
}

impl FeatureStyler {
    pub fn new(options: StyleOptions) -> Self {
        Self {
            picker: ColorPicker::new(options.scheme),
            strand_decoration: options.strand_decoration,
        }
    }

    pub fn style(&mut self, feature: &GeneFeature) -> DiagramFeature {
        let decoration = if self.strand_decoration {
            Decoration::for_strand(feature.strand)
        } else {
            Decoration::Standard
        };

        DiagramFeature {
            label: feature.label.clone(),
            start: feature.start,
            end: feature.end,
            strand: feature.strand,
            color: self.picker.next_color(feature.strand.is_reverse()),
            decoration,
        }
    }
}
