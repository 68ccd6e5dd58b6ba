//! A renderer that records what it was told instead of drawing it.
//!
//! The resulting [`DiagramPlan`] is plain JSON, so any circular-map tool can
//! rasterize it.

use serde::{Deserialize, Serialize};

use crate::settings::DiagramSettings;
use crate::style::DiagramFeature;
use crate::DiagramRenderer;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramPlan {
    pub settings: DiagramSettings,
    pub sequence_length: usize,
    pub title: String,
    pub features: Vec<DiagramFeature>,
}

impl DiagramPlan {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Default)]
pub struct PlanRenderer {
    plan: DiagramPlan,
}

impl PlanRenderer {
    pub fn new(settings: DiagramSettings) -> Self {
        Self {
            plan: DiagramPlan {
                settings,
                ..Default::default()
            },
        }
    }

    pub fn finish(self) -> DiagramPlan {
        self.plan
    }
}

impl DiagramRenderer for PlanRenderer {
    fn set_sequence_length(&mut self, length: usize) {
        self.plan.sequence_length = length;
    }

    fn set_title(&mut self, title: &str) {
        self.plan.title = title.to_string();
    }

    fn add_feature(&mut self, feature: DiagramFeature) {
        self.plan.features.push(feature);
    }
}
