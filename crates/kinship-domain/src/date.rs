//! Partial calendar dates

use std::fmt;

/// A calendar date with zero or more components unknown
///
/// An unknown component is distinct from the whole date being absent: a
/// person whose birth year is known but whose birthday is not has
/// `Some(PartialDate { year: Some(..), month: None, day: None })`.
///
/// No calendar validity is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialDate {
    /// Four-digit year, if known
    pub year: Option<u16>,

    /// Two-digit month, if known
    pub month: Option<u8>,

    /// Two-digit day of month, if known
    pub day: Option<u8>,
}

impl PartialDate {
    /// Create a date from its (possibly unknown) components
    pub fn new(year: Option<u16>, month: Option<u8>, day: Option<u8>) -> Self {
        Self { year, month, day }
    }

    /// Create a fully known date
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::PartialDate;
    ///
    /// let date = PartialDate::ymd(1950, 4, 12);
    /// assert_eq!(date.to_string(), "1950-04-12");
    /// ```
    pub fn ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(Some(year), Some(month), Some(day))
    }

    /// True when no component is known
    pub fn is_unknown(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// Unknown components print as runs of `N`, the same form the console accepts.
impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}", year)?,
            None => f.write_str("NNNN")?,
        }
        match self.month {
            Some(month) => write!(f, "-{:02}", month)?,
            None => f.write_str("-NN")?,
        }
        match self.day {
            Some(day) => write!(f, "-{:02}", day),
            None => f.write_str("-NN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_known_date() {
        assert_eq!(PartialDate::ymd(1983, 5, 2).to_string(), "1983-05-02");
    }

    #[test]
    fn test_display_unknown_components() {
        let date = PartialDate::new(Some(1901), None, None);
        assert_eq!(date.to_string(), "1901-NN-NN");

        let date = PartialDate::new(None, Some(7), None);
        assert_eq!(date.to_string(), "NNNN-07-NN");
    }

    #[test]
    fn test_is_unknown() {
        assert!(PartialDate::default().is_unknown());
        assert!(!PartialDate::new(None, None, Some(3)).is_unknown());
    }
}
