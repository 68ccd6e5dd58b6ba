//! Gene extraction from GenBank flat files.
//!
//! The scanner makes a single pass over the input and reads only three
//! things, in document order:
//!
//! 1. the sequence length from the `LOCUS` header line,
//! 2. the organism name from the line following the first `SOURCE` marker,
//! 3. every `gene` entry of the feature table together with the quoted
//!    label on the line right after it.
//!
//! Everything else in the file is ignored.

use std::io::BufRead;
use std::sync::LazyLock;

use genomap_core::{GeneFeature, GenomeModel};
use log::{debug, info, trace, warn};
use regex::Regex;

use crate::{LocationPolicy, ParseError, ParseOptions};

pub mod location;

use location::{format_location, parse_location, parse_partial_location};

/// Width of the keyword column (`LOCUS `) that precedes the header tokens.
pub const HEADER_PREFIX_WIDTH: usize = 6;

/// The organism name sits on the line after the first line containing this.
pub const SOURCE_MARKER: &str = "SOURCE";

/// A `gene` key laid out in feature-table columns: five spaces of indent, the
/// key, then padding up to the location column (column 22).
pub const GENE_MARKER: &str = "     gene            ";

/// After the keyword column: locus name, whitespace, length token.
static HEADER_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^.{{{}}}\s*\S+\s+(?P<length>\S+)",
        HEADER_PREFIX_WIDTH
    ))
    .expect("header rule is a valid regex")
});

/// Label is everything from the first quote up to (not including) the final
/// character of the trimmed line, which is the closing quote.
static LABEL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^"]*"(?P<label>.*).$"#).expect("label rule is a valid regex"));

/// Pulls lines from the input while counting them, so errors can point at a
/// line number.
pub struct LineCursor<I> {
    lines: I,
    line_no: usize,
}

impl<I, S> LineCursor<I>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self { lines, line_no: 0 }
    }

    pub fn next_line(&mut self) -> Result<Option<S>, ParseError> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                line.map(Some)
            }
            None => Ok(None),
        }
    }

    /// 1-based number of the line most recently returned.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Parse a GenBank format string into a GenomeModel
pub fn parse(input: &str) -> Result<GenomeModel, ParseError> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<GenomeModel, ParseError> {
    parse_lines_with_options(input.lines(), options)
}

/// Parse from any sequence of lines (without line terminators).
pub fn parse_lines<I, S>(lines: I) -> Result<GenomeModel, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with_options(lines, &ParseOptions::default())
}

pub fn parse_lines_with_options<I, S>(
    lines: I,
    options: &ParseOptions,
) -> Result<GenomeModel, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan(LineCursor::new(lines.into_iter().map(Ok)), options)
}

/// Parse from a buffered reader. Read failures surface as [`ParseError::Io`].
pub fn parse_reader<R: BufRead>(reader: R) -> Result<GenomeModel, ParseError> {
    parse_reader_with_options(reader, &ParseOptions::default())
}

pub fn parse_reader_with_options<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> Result<GenomeModel, ParseError> {
    let lines = reader.lines().map(|line| line.map_err(ParseError::from));
    scan(LineCursor::new(lines), options)
}

fn scan<I, S>(mut cursor: LineCursor<I>, options: &ParseOptions) -> Result<GenomeModel, ParseError>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    let header = cursor
        .next_line()?
        .ok_or_else(|| ParseError::MalformedHeader("input is empty".to_string()))?;
    let sequence_length = read_sequence_length(header.as_ref())?;
    debug!("header declares a sequence of {} bp", sequence_length);

    let organism_name = read_organism_name(&mut cursor)?;
    debug!(
        "organism '{}' found on line {}",
        organism_name,
        cursor.line_no()
    );

    let features = scan_gene_features(&mut cursor, options)?;
    info!(
        "parsed {} gene features from {} lines ({})",
        features.len(),
        cursor.line_no(),
        organism_name
    );

    Ok(GenomeModel::new(sequence_length, organism_name, features))
}

/// Read the declared sequence length from the header line.
///
/// `LOCUS       NC_001416   48502 bp    DNA     linear   PHG 15-JUN-2017`
/// yields `48502`.
pub fn read_sequence_length(header: &str) -> Result<usize, ParseError> {
    let caps = HEADER_RULE.captures(header).ok_or_else(|| {
        ParseError::MalformedHeader(format!("expected a name and a length in '{}'", header))
    })?;
    let token = &caps["length"];

    match token.parse::<usize>() {
        Ok(0) => Err(ParseError::MalformedHeader(
            "sequence length must be positive".to_string(),
        )),
        Ok(length) => Ok(length),
        Err(e) => Err(ParseError::MalformedHeader(format!(
            "length token '{}' is not an integer: {}",
            token, e
        ))),
    }
}

/// Skip ahead to the `SOURCE` marker and read the organism from the next line,
/// dropping its leading field label (e.g. `ORGANISM`) and the blanks around
/// the remainder.
pub fn read_organism_name<I, S>(cursor: &mut LineCursor<I>) -> Result<String, ParseError>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    loop {
        let line = cursor.next_line()?.ok_or(ParseError::MissingSourceSection)?;
        if line.as_ref().contains(SOURCE_MARKER) {
            break;
        }
    }

    let organism_line = cursor.next_line()?.ok_or(ParseError::MissingSourceSection)?;
    let trimmed = organism_line.as_ref().trim();
    let name = match trimmed.split_once(' ') {
        Some((_label, rest)) => rest.trim(),
        None => trimmed,
    };

    if name.is_empty() {
        return Err(ParseError::MissingSourceSection);
    }

    Ok(name.to_string())
}

/// Scan the rest of the input for `gene` entries.
pub fn scan_gene_features<I, S>(
    cursor: &mut LineCursor<I>,
    options: &ParseOptions,
) -> Result<Vec<GeneFeature>, ParseError>
where
    I: Iterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    let mut features = Vec::new();

    while let Some(line) = cursor.next_line()? {
        let Some(expr) = gene_location_expr(line.as_ref()) else {
            continue;
        };
        let decl_line = cursor.line_no();

        let parsed = if options.allow_partial_bounds {
            parse_partial_location(expr)
        } else {
            parse_location(expr)
        };
        let location = match parsed {
            Ok(loc) => Some(loc),
            Err(e) if options.unsupported_locations == LocationPolicy::Reject => {
                return Err(ParseError::MalformedFeature {
                    line: decl_line,
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                warn!("line {}: skipping gene: {}", decl_line, e);
                None
            }
        };

        // The label line is consumed even when the gene itself is skipped.
        let label_line = cursor
            .next_line()?
            .ok_or_else(|| ParseError::MalformedFeature {
                line: decl_line,
                reason: "gene entry has no label line".to_string(),
            })?;
        let label = read_label(label_line.as_ref()).map_err(|reason| {
            ParseError::MalformedFeature {
                line: cursor.line_no(),
                reason: reason.to_string(),
            }
        })?;

        if let Some(loc) = location {
            trace!(
                "gene '{}' {}..{} ({}) at line {}",
                label,
                loc.start,
                loc.end,
                loc.strand,
                decl_line
            );
            features.push(GeneFeature::new(label, loc.start, loc.end, loc.strand));
        }
    }

    Ok(features)
}

/// Location text of a `gene` entry, or `None` if the line declares no gene.
fn gene_location_expr(line: &str) -> Option<&str> {
    line.find(GENE_MARKER)
        .map(|pos| line[pos + GENE_MARKER.len()..].trim())
}

/// Label from a qualifier line such as `/gene="lacZ"`.
pub fn read_label(line: &str) -> Result<&str, &'static str> {
    let trimmed = line.trim();
    if !trimmed.contains('"') {
        return Err("label line has no quoted text");
    }

    LABEL_RULE
        .captures(trimmed)
        .and_then(|caps| caps.name("label"))
        .map(|m| m.as_str())
        .ok_or("label line ends at its opening quote")
}

/// Write the minimal GenBank text that [`parse`] reads back into `model`.
pub fn serialize(model: &GenomeModel) -> String {
    let mut out = String::new();
    let organism = model.organism_name();

    out.push_str(&format!(
        "LOCUS       {:<16} {} bp    DNA     linear   UNK\n",
        locus_name(organism),
        model.sequence_length()
    ));
    out.push_str(&format!("SOURCE      {}\n", organism));
    out.push_str(&format!("  ORGANISM  {}\n", organism));

    if model.feature_count() > 0 {
        out.push_str("FEATURES             Location/Qualifiers\n");
        for feat in model.features() {
            out.push_str(GENE_MARKER);
            out.push_str(&format_location(feat.start, feat.end, feat.strand));
            out.push('\n');
            out.push_str(&format!("                     /gene=\"{}\"\n", feat.label));
        }
    }

    out.push_str("//\n");
    out
}

fn locus_name(organism: &str) -> String {
    let name: String = organism
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if name.is_empty() {
        "unnamed".to_string()
    } else {
        name
    }
}
