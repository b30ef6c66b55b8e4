use crate::errors::Error;
use crate::models::{Date, Day, Time};

// Day names matched in this order, first hit wins.
const DAYS: [(&str, Day); 5] = [
    ("mon", Day::Mon),
    ("tue", Day::Tue),
    ("wed", Day::Wed),
    ("thurs", Day::Thurs),
    ("fri", Day::Fri),
];

/// Strict unsigned conversion: ASCII digits only, no sign, no whitespace.
fn parse_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses `H:M` into a `Time`. Values are not range-checked.
pub fn time_from_string(text: &str) -> Result<Time, Error> {
    let (hours, minutes) = text
        .split_once(':')
        .ok_or_else(|| Error::parse("No time separator found."))?;

    let hour = parse_number(hours).ok_or_else(|| Error::parse("Could not parse hours."))?;
    let minute = parse_number(minutes).ok_or_else(|| Error::parse("Could not parse minutes."))?;

    Ok(Time { hour, minute })
}

/// Finds a weekday name anywhere in `text`, so `monday` matches as well as `mon`.
pub fn date_from_string(text: &str) -> Result<Date, Error> {
    DAYS.iter()
        .find(|(name, _)| text.contains(name))
        .map(|&(_, day)| Date { weekno: 0, day })
        .ok_or_else(|| Error::parse("Unrecognised day"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_from_string() {
        assert_eq!(time_from_string("09:00"), Ok(Time::new(9, 0)));
        assert_eq!(time_from_string("4:01"), Ok(Time::new(4, 1)));
        assert_eq!(time_from_string("0:0"), Ok(Time::new(0, 0)));
    }

    #[test]
    fn test_time_is_not_range_checked() {
        assert_eq!(time_from_string("99:99"), Ok(Time::new(99, 99)));
        assert_eq!(time_from_string("25:61"), Ok(Time::new(25, 61)));
    }

    #[test]
    fn test_time_without_separator() {
        let err = time_from_string("0900").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
        assert_eq!(err.message, "No time separator found.");
    }

    #[test]
    fn test_time_with_empty_minutes() {
        let err = time_from_string("09:").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
        assert_eq!(err.message, "Could not parse minutes.");
    }

    #[test]
    fn test_time_with_bad_hours() {
        for text in [":30", "9a:30", "+9:30", " 9:30", "-1:30"] {
            let err = time_from_string(text).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Parse, "{text}");
            assert_eq!(err.message, "Could not parse hours.", "{text}");
        }
    }

    #[test]
    fn test_time_with_bad_minutes() {
        for text in ["9:3x", "9:30 ", "9:+30", "9:30:00", "9:99999999999"] {
            let err = time_from_string(text).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Parse, "{text}");
            assert_eq!(err.message, "Could not parse minutes.", "{text}");
        }
    }

    #[test]
    fn test_date_from_string() {
        assert_eq!(date_from_string("mon").map(|d| d.day), Ok(Day::Mon));
        assert_eq!(date_from_string("tuesday").map(|d| d.day), Ok(Day::Tue));
        assert_eq!(date_from_string("wednesday").map(|d| d.day), Ok(Day::Wed));
        assert_eq!(date_from_string("thursday").map(|d| d.day), Ok(Day::Thurs));
        assert_eq!(
            date_from_string("fri"),
            Ok(Date {
                weekno: 0,
                day: Day::Fri
            })
        );
    }

    #[test]
    fn test_date_priority_order() {
        // Both "mon" and "fri" appear, mon is checked first.
        assert_eq!(date_from_string("frimon").map(|d| d.day), Ok(Day::Mon));
    }

    #[test]
    fn test_date_unsupported_days() {
        for text in ["sat", "sun", "thu", "Mon", ""] {
            let err = date_from_string(text).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Parse, "{text}");
            assert_eq!(err.message, "Unrecognised day");
        }
    }
}
