use std::ops::RangeInclusive;

use crate::Item;

/// Parses a [span descriptor][crate] and returns the inclusive range of processor
/// indexes it covers.
///
/// A bare index `N` is equivalent to the range `N-N`.
///
/// See [package-level documentation][crate] for details.
pub fn parse(descriptor: &str) -> crate::Result<RangeInclusive<Item>> {
    if let Some((span_start, span_end_inc)) = descriptor.split_once('-') {
        parse_span(span_start, span_end_inc)
    } else {
        parse_single(descriptor).map(|index| index..=index)
    }
}

fn parse_span(span_start: &str, span_end_inc: &str) -> crate::Result<RangeInclusive<Item>> {
    let span_start = span_start.parse::<Item>().map_err(|inner| {
        crate::Error::caused_by(
            span_start.to_string(),
            "span start could not be parsed as an integer".to_string(),
            inner,
        )
    })?;

    let span_end_inc = span_end_inc.parse::<Item>().map_err(|inner| {
        crate::Error::caused_by(
            span_end_inc.to_string(),
            "span end could not be parsed as an integer".to_string(),
            inner,
        )
    })?;

    if span_start > span_end_inc {
        return Err(crate::Error::new(
            format!("{span_start}-{span_end_inc}"),
            "span start must be <= end".to_string(),
        ));
    }

    Ok(span_start..=span_end_inc)
}

fn parse_single(single_index: &str) -> crate::Result<Item> {
    single_index.parse::<Item>().map_err(|inner| {
        crate::Error::caused_by(
            single_index.to_string(),
            "descriptor was not a span but could not be parsed as an integer either".to_string(),
            inner,
        )
    })
}
