use std::path::PathBuf;

use clap::Parser;
use genomap_formats::{LocationPolicy, ParseOptions};
use genomap_render::{color, ColorScheme, Rgb, StyleOptions};

/// genomap - extract the genes of a GenBank file for a circular genome map
///
/// Writes a JSON diagram plan (sequence length, title, styled genes) that a
/// map renderer can draw. Without FILE, asks for a file name interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// GenBank file to read (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    pub output: String,

    /// Seed for random feature colors, for reproducible plans
    #[arg(long = "seed", conflicts_with = "strand_colors")]
    pub seed: Option<u64>,

    /// Color genes by strand instead of randomly
    #[arg(long = "strand-colors")]
    pub strand_colors: bool,

    /// Forward-strand color (#rrggbb), implies --strand-colors
    #[arg(long = "forward-color", value_name = "HEX")]
    pub forward_color: Option<Rgb>,

    /// Reverse-strand color (#rrggbb), implies --strand-colors
    #[arg(long = "reverse-color", value_name = "HEX")]
    pub reverse_color: Option<Rgb>,

    /// Draw plain arcs instead of strand arrows
    #[arg(long = "no-strand-decoration")]
    pub no_strand_decoration: bool,

    /// Skip genes with join()/order() locations instead of failing
    #[arg(long = "skip-unsupported")]
    pub skip_unsupported: bool,

    /// Accept partial locations such as <1..>336, dropping the markers
    #[arg(long = "allow-partial")]
    pub allow_partial: bool,

    /// Print a plain-text gene table instead of the JSON plan
    #[arg(long = "summary", conflicts_with = "normalize")]
    pub summary: bool,

    /// Print the extracted genes back as minimal GenBank text
    #[arg(long = "normalize")]
    pub normalize: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plan,
    Summary,
    Normalize,
}

impl Args {
    pub fn mode(&self) -> OutputMode {
        if self.summary {
            OutputMode::Summary
        } else if self.normalize {
            OutputMode::Normalize
        } else {
            OutputMode::Plan
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            unsupported_locations: if self.skip_unsupported {
                LocationPolicy::Skip
            } else {
                LocationPolicy::Reject
            },
            allow_partial_bounds: self.allow_partial,
        }
    }

    pub fn style_options(&self) -> StyleOptions {
        let by_strand =
            self.strand_colors || self.forward_color.is_some() || self.reverse_color.is_some();

        let scheme = if by_strand {
            ColorScheme::ByStrand {
                forward: self.forward_color.unwrap_or(color::DEFAULT_FORWARD),
                reverse: self.reverse_color.unwrap_or(color::DEFAULT_REVERSE),
            }
        } else {
            ColorScheme::Random { seed: self.seed }
        };

        StyleOptions {
            scheme,
            strand_decoration: !self.no_strand_decoration,
        }
    }
}
