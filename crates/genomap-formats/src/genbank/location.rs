//! Grammar for the location column of a `gene` entry.
//!
//! ```text
//! location   := complement | span
//! complement := "complement(" span ")"
//! span       := position ".." position
//! position   := ["<" | ">"] digits
//! ```
//!
//! Partial-boundary markers (`<`, `>`) are rejected unless the caller asks
//! for them through [`parse_partial_location`], which drops them. Anything
//! else, such as `join(...)` or a single base, is always rejected.

use genomap_core::Strand;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt},
    sequence::{delimited, pair, separated_pair},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneLocation {
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("unsupported location expression '{0}'")]
    Unsupported(String),
    #[error("location '{0}' has a partial boundary marker")]
    PartialBoundary(String),
    #[error("location '{0}' uses position 0, coordinates are 1-based")]
    ZeroPosition(String),
    #[error("location end {end} precedes start {start}")]
    Inverted { start: usize, end: usize },
}

/// A coordinate and whether it carried a `<` or `>` marker.
fn position(input: &str) -> IResult<&str, (usize, bool)> {
    map(
        pair(opt(one_of("<>")), map_res(digit1, str::parse::<usize>)),
        |(marker, n)| (n, marker.is_some()),
    )(input)
}

type Span = ((usize, bool), (usize, bool));

fn span(input: &str) -> IResult<&str, Span> {
    separated_pair(position, tag(".."), position)(input)
}

fn complement(input: &str) -> IResult<&str, Span> {
    delimited(tag("complement("), span, char(')'))(input)
}

/// The location plus whether either end was marked partial.
fn oriented(strand: Strand) -> impl Fn(Span) -> (GeneLocation, bool) {
    move |((start, start_partial), (end, end_partial))| {
        (
            GeneLocation { start, end, strand },
            start_partial || end_partial,
        )
    }
}

fn location(input: &str) -> IResult<&str, (GeneLocation, bool)> {
    alt((
        map(complement, oriented(Strand::Reverse)),
        map(span, oriented(Strand::Forward)),
    ))(input)
}

/// Parse a location expression such as `12..45` or `complement(100..200)`.
///
/// `<12..45` and other partial forms are refused with
/// [`LocationError::PartialBoundary`].
pub fn parse_location(expr: &str) -> Result<GeneLocation, LocationError> {
    parse_checked(expr, false)
}

/// Like [`parse_location`], but accepts `<` and `>` and drops them.
pub fn parse_partial_location(expr: &str) -> Result<GeneLocation, LocationError> {
    parse_checked(expr, true)
}

fn parse_checked(expr: &str, allow_partial: bool) -> Result<GeneLocation, LocationError> {
    let expr = expr.trim();
    let (_, (loc, partial)) = all_consuming(location)(expr)
        .map_err(|_| LocationError::Unsupported(expr.to_string()))?;

    if partial && !allow_partial {
        return Err(LocationError::PartialBoundary(expr.to_string()));
    }
    if loc.start == 0 {
        return Err(LocationError::ZeroPosition(expr.to_string()));
    }
    if loc.end < loc.start {
        return Err(LocationError::Inverted {
            start: loc.start,
            end: loc.end,
        });
    }

    Ok(loc)
}

/// Inverse of [`parse_location`] for the two supported forms.
pub fn format_location(start: usize, end: usize, strand: Strand) -> String {
    match strand {
        Strand::Forward => format!("{}..{}", start, end),
        Strand::Reverse => format!("complement({}..{})", start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forward_span() {
        let loc = parse_location("12..45").unwrap();
        assert_eq!(loc.start, 12);
        assert_eq!(loc.end, 45);
        assert_eq!(loc.strand, Strand::Forward);
    }

    #[test]
    fn test_parse_complement() {
        let loc = parse_location("complement(100..200)").unwrap();
        assert_eq!(loc.start, 100);
        assert_eq!(loc.end, 200);
        assert_eq!(loc.strand, Strand::Reverse);
    }

    #[test]
    fn test_partial_markers_rejected() {
        assert_eq!(
            parse_location("<12..>45"),
            Err(LocationError::PartialBoundary("<12..>45".to_string()))
        );
        assert_eq!(
            parse_location("complement(5..>90)"),
            Err(LocationError::PartialBoundary("complement(5..>90)".to_string()))
        );
    }

    #[test]
    fn test_partial_markers_dropped_on_request() {
        let loc = parse_partial_location("<1..>336").unwrap();
        assert_eq!((loc.start, loc.end), (1, 336));

        let loc = parse_partial_location("complement(<5..90)").unwrap();
        assert_eq!((loc.start, loc.end), (5, 90));
        assert_eq!(loc.strand, Strand::Reverse);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(parse_location("  7..9 ").is_ok());
    }

    #[test]
    fn test_rejects_compound_locations() {
        assert_eq!(
            parse_location("join(1..5,10..20)"),
            Err(LocationError::Unsupported("join(1..5,10..20)".to_string()))
        );
        assert!(parse_location("complement(join(1..5,10..20))").is_err());
        assert!(parse_location("complement(100..200").is_err());
        assert!(parse_location("42").is_err());
        assert!(parse_location("12..45x").is_err());
        assert!(parse_partial_location("<<1..5").is_err());
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        assert_eq!(
            parse_location("0..10"),
            Err(LocationError::ZeroPosition("0..10".to_string()))
        );
        assert_eq!(
            parse_location("50..10"),
            Err(LocationError::Inverted { start: 50, end: 10 })
        );
    }

    #[test]
    fn test_rejects_overflowing_position() {
        assert!(parse_location("1..99999999999999999999999999").is_err());
    }

    #[test]
    fn test_accepts_usize_max_end() {
        let expr = format!("1..{}", usize::MAX);
        assert_eq!(parse_location(&expr).unwrap().end, usize::MAX);
    }

    #[test]
    fn test_format_location() {
        assert_eq!(format_location(12, 45, Strand::Forward), "12..45");
        assert_eq!(
            format_location(100, 200, Strand::Reverse),
            "complement(100..200)"
        );
    }
}
