use serde::Serialize;

use crate::feature::GeneFeature;

/// Everything a circular map needs from an annotation file: the declared
/// length, the organism, and the genes in the order they were written.
///
/// Only the parser and [`GenomeModel::new`] build one; there is no
/// deserialization path around the parser's coordinate checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomeModel {
    sequence_length: usize,
    organism_name: String,
    features: Vec<GeneFeature>,
}

impl GenomeModel {
    pub fn new(
        sequence_length: usize,
        organism_name: impl Into<String>,
        features: Vec<GeneFeature>,
    ) -> Self {
        Self {
            sequence_length,
            organism_name: organism_name.into(),
            features,
        }
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn organism_name(&self) -> &str {
        &self.organism_name
    }

    pub fn features(&self) -> &[GeneFeature] {
        &self.features
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn into_features(self) -> Vec<GeneFeature> {
        self.features
    }

    /// Features whose coordinates fall outside `1..=sequence_length`.
    ///
    /// The parser passes such coordinates through untouched; callers that
    /// need them rejected can check here.
    pub fn out_of_bounds(&self) -> Vec<&GeneFeature> {
        self.features
            .iter()
            .filter(|f| !f.fits_within(self.sequence_length))
            .collect()
    }

    pub fn reverse_strand_count(&self) -> usize {
        self.features
            .iter()
            .filter(|f| f.strand.is_reverse())
            .count()
    }
}
