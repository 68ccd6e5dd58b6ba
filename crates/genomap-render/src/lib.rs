//! Turns a parsed [`GenomeModel`] into renderer calls.
//!
//! Parsing never deals with color or decoration; those are assigned here by a
//! [`FeatureStyler`] while the model is fed to a [`DiagramRenderer`].

pub mod color;
pub mod plan;
pub mod settings;
pub mod style;

use genomap_core::GenomeModel;
use log::debug;

pub use color::{ColorParseError, ColorScheme, Rgb};
pub use plan::{DiagramPlan, PlanRenderer};
pub use settings::DiagramSettings;
pub use style::{Decoration, DiagramFeature, FeatureStyler, StyleOptions};

/// What a circular genome map needs to be told.
pub trait DiagramRenderer {
    fn set_sequence_length(&mut self, length: usize);
    fn set_title(&mut self, title: &str);
    fn add_feature(&mut self, feature: DiagramFeature);
}

/// Feed `model` to `renderer`, styling each gene on the way.
pub fn render_genome<R: DiagramRenderer + ?Sized>(
    model: &GenomeModel,
    styler: &mut FeatureStyler,
    renderer: &mut R,
) {
    renderer.set_sequence_length(model.sequence_length());
    renderer.set_title(model.organism_name());

    for feature in model.features() {
        renderer.add_feature(styler.style(feature));
    }

    debug!(
        "sent {} features for '{}' to the renderer",
        model.feature_count(),
        model.organism_name()
    );
}

/// Shorthand for rendering into a [`DiagramPlan`].
pub fn plan_genome(
    model: &GenomeModel,
    settings: DiagramSettings,
    options: StyleOptions,
) -> DiagramPlan {
    let mut styler = FeatureStyler::new(options);
    let mut renderer = PlanRenderer::new(settings);
    render_genome(model, &mut styler, &mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use genomap_core::{GeneFeature, Strand};
    use pretty_assertions::assert_eq;

    fn phix() -> GenomeModel {
        GenomeModel::new(
            5386,
            "Escherichia phage phiX174",
            vec![
                GeneFeature::new("A", 3981, 5386, Strand::Forward),
                GeneFeature::new("K", 51, 221, Strand::Forward),
                GeneFeature::new("anti", 900, 1000, Strand::Reverse),
            ],
        )
    }

    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl DiagramRenderer for CallLog {
        fn set_sequence_length(&mut self, length: usize) {
            self.0.push(format!("length {}", length));
        }

        fn set_title(&mut self, title: &str) {
            self.0.push(format!("title {}", title));
        }

        fn add_feature(&mut self, feature: DiagramFeature) {
            self.0.push(format!("feature {} {}", feature.label, feature.strand));
        }
    }

    #[test]
    fn test_render_genome_call_order() {
        let mut styler = FeatureStyler::new(StyleOptions::default());
        let mut calls = CallLog::default();
        render_genome(&phix(), &mut styler, &mut calls);

        assert_eq!(
            calls.0,
            vec![
                "length 5386",
                "title Escherichia phage phiX174",
                "feature A forward",
                "feature K forward",
                "feature anti reverse",
            ]
        );
    }

    #[test]
    fn test_plan_genome() {
        let plan = plan_genome(
            &phix(),
            DiagramSettings::default(),
            StyleOptions {
                scheme: ColorScheme::strand_defaults(),
                strand_decoration: true,
            },
        );

        assert_eq!(plan.sequence_length, 5386);
        assert_eq!(plan.title, "Escherichia phage phiX174");
        assert_eq!(plan.features.len(), 3);
        assert_eq!(plan.features[2].decoration, Decoration::CounterclockwiseArrow);
    }

    #[test]
    fn test_seeded_plans_are_identical() {
        let options = || StyleOptions {
            scheme: ColorScheme::Random { seed: Some(2021) },
            strand_decoration: true,
        };
        let a = plan_genome(&phix(), DiagramSettings::default(), options());
        let b = plan_genome(&phix(), DiagramSettings::default(), options());
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_json_shape() {
        let plan = plan_genome(
            &phix(),
            DiagramSettings::default(),
            StyleOptions {
                scheme: ColorScheme::strand_defaults(),
                strand_decoration: false,
            },
        );
        let json: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();

        assert_eq!(json["sequenceLength"], 5386);
        assert_eq!(json["settings"]["backboneRadius"], 160.0);
        assert_eq!(json["features"][0]["label"], "A");
        assert_eq!(json["features"][0]["color"], "#60a5fa");
        assert_eq!(json["features"][0]["decoration"], "standard");
        assert_eq!(json["features"][2]["strand"], "reverse");
    }
}
