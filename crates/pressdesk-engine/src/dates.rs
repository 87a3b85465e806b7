use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

pub const MISSING_DATE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

/// Day-first layout with dotted time, as the `id-ID` locale prints it.
const DISPLAY_FORMAT: &str = "%-d/%-m/%Y, %H.%M.%S";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Renders service timestamps for display.
///
/// The UTC offset is an explicit value so derivations that use it stay pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDisplay {
    offset: FixedOffset,
}

impl DateDisplay {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Offset of the local timezone, captured once.
    pub fn local() -> Self {
        Self::new(Local::now().offset().fix())
    }

    /// `None` when `minutes` is outside ±24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// `"N/A"` for a missing or empty value, `"Invalid Date"` for one that does not parse.
    pub fn format(&self, raw: Option<&str>) -> String {
        let raw = match raw.map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => return MISSING_DATE.to_string(),
        };

        match parse_timestamp(raw) {
            Some(ts) => ts
                .with_timezone(&self.offset)
                .format(DISPLAY_FORMAT)
                .to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self::utc()
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    // Timestamps without an offset are read as UTC.
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
