//! Parsing of raw console input into domain values.

use crate::error::{CliError, Result};
use kinship_domain::{NodeId, PartialDate};

/// Parse `YYYY-MM-DD`, where `N` stands for an unknown digit.
///
/// A component with any `N` in it is unknown as a whole: `19NN` is an
/// unknown year. Such a component is either a run of `N` of any length or
/// has its full width, mixing digits and `N`. A known year must be 4 digits
/// and a known month or day 2 digits. No calendar check is made.
///
/// # Examples
///
/// ```
/// use kinship_cli::input::parse_date;
///
/// let date = parse_date("1950-NN-12").unwrap();
/// assert_eq!(date.year, Some(1950));
/// assert_eq!(date.month, None);
/// assert_eq!(date.day, Some(12));
/// ```
pub fn parse_date(input: &str) -> Result<PartialDate> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid_date(
            input,
            format!("expected 3 '-'-separated parts (YYYY-MM-DD), got {}", parts.len()),
        ));
    }

    let year = parse_component(input, parts[0], 4, "year")?;
    let month = parse_component(input, parts[1], 2, "month")?;
    let day = parse_component(input, parts[2], 2, "day")?;

    Ok(PartialDate::new(
        year.map(|y| y as u16),
        month.map(|m| m as u8),
        day.map(|d| d as u8),
    ))
}

/// Parse a death date; `alive` (any case) means no death date.
pub fn parse_death(input: &str) -> Result<Option<PartialDate>> {
    if input.trim().eq_ignore_ascii_case("alive") {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

/// Parse a node id typed by the user.
pub fn parse_node_id(input: &str) -> Result<NodeId> {
    input.parse().map_err(CliError::InvalidInput)
}

fn parse_component(input: &str, part: &str, width: usize, name: &str) -> Result<Option<u32>> {
    let is_unknown_digit = |c: char| c.eq_ignore_ascii_case(&'n');
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit() || is_unknown_digit(c)) {
        return Err(invalid_date(
            input,
            format!("{} must be digits or N, got '{}'", name, part),
        ));
    }
    if part.chars().any(is_unknown_digit) {
        if part.chars().all(is_unknown_digit) || part.len() == width {
            return Ok(None);
        }
        return Err(invalid_date(
            input,
            format!("{} must have {} characters when mixing digits and N, got '{}'", name, width, part),
        ));
    }
    if part.len() != width {
        return Err(invalid_date(
            input,
            format!("{} must have {} digits, got '{}'", name, width, part),
        ));
    }
    part.parse()
        .map(Some)
        .map_err(|e| invalid_date(input, format!("{}: {}", name, e)))
}

fn invalid_date(input: &str, reason: String) -> CliError {
    CliError::InvalidDate {
        input: input.to_string(),
        reason,
    }
}
