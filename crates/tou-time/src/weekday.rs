//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), the values the
/// day-of-week field of a tariff rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Look up an English weekday name, full or three-letter, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL.iter().copied().find(|w| {
            let long = w.to_string();
            long.eq_ignore_ascii_case(name) || long[..3].eq_ignore_ascii_case(name)
        })
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        // num_days_from_monday is always 0..=6
        ALL[w.num_days_from_monday() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_conversion() {
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::from_ordinal(1), Some(Weekday::Monday));
        assert_eq!(Weekday::from_ordinal(7), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_ordinal(8), None);
    }

    #[test]
    fn from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon).ordinal(), 1);
        assert_eq!(Weekday::from(chrono::Weekday::Sun).ordinal(), 7);
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::from_name("tue"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_name("SATURDAY"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_name("Tues"), None);
    }
}
