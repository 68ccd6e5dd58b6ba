use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Reverse)
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "forward"),
            Strand::Reverse => write!(f, "reverse"),
        }
    }
}

/// A gene annotation taken from the features table.
///
/// Coordinates are 1-based and inclusive, exactly as written in the
/// annotation. They are not checked against the sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneFeature {
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

impl GeneFeature {
    pub fn new(label: impl Into<String>, start: usize, end: usize, strand: Strand) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            strand,
        }
    }

    /// Whether both ends fall inside `1..=sequence_length`.
    pub fn fits_within(&self, sequence_length: usize) -> bool {
        self.start >= 1 && self.end <= sequence_length && self.start <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_direction() {
        assert!(Strand::Reverse.is_reverse());
        assert!(!Strand::Forward.is_reverse());
        assert_eq!(Strand::Reverse.to_string(), "reverse");
    }

    #[test]
    fn test_fits_within_at_usize_max() {
        let f = GeneFeature::new("big", 1, usize::MAX, Strand::Forward);
        assert!(!f.fits_within(48502));
        assert!(f.fits_within(usize::MAX));
    }

    #[test]
    fn test_fits_within() {
        let f = GeneFeature::new("cI", 100, 200, Strand::Reverse);
        assert!(f.fits_within(200));
        assert!(!f.fits_within(199));
    }

    #[test]
    fn test_strand_serializes_lowercase() {
        let json = serde_json::to_string(&Strand::Reverse).unwrap();
        assert_eq!(json, "\"reverse\"");
    }
}
