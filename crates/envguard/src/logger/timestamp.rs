//! Locale-aware timestamp rendering.
//!
//! The date format option is a locale identifier selecting a numeric
//! date-time layout, or a raw strftime pattern when it contains `%`.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::constants::DEFAULT_DATE_FORMAT;
use crate::error::LogError;

/// Numeric date-time layouts per locale identifier.
const LOCALE_LAYOUTS: &[(&str, &str)] = &[
    ("en-US", "%-m/%-d/%Y, %-I:%M:%S %p"),
    ("en-GB", "%d/%m/%Y, %H:%M:%S"),
    ("de-DE", "%-d.%-m.%Y, %H:%M:%S"),
    ("fr-FR", "%d/%m/%Y %H:%M:%S"),
    ("sv-SE", "%Y-%m-%d %H:%M:%S"),
    ("ISO", "%Y-%m-%dT%H:%M:%S%:z"),
];

/// Validated zone and layout, fixed at logger construction.
#[derive(Debug, Clone)]
pub(crate) struct TimestampFormat {
    zone: Tz,
    layout: String,
}

impl TimestampFormat {
    pub(crate) fn new(time_zone: &str, date_format: &str) -> Result<Self, LogError> {
        let zone: Tz = time_zone
            .parse()
            .map_err(|_| LogError::InvalidTimeZone(time_zone.to_string()))?;

        Ok(Self {
            zone,
            layout: layout_for(date_format),
        })
    }

    pub(crate) fn format(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.zone)
            .format(&self.layout)
            .to_string()
    }
}

fn locale_layout(identifier: &str) -> Option<&'static str> {
    LOCALE_LAYOUTS
        .iter()
        .find(|(locale, _)| locale.eq_ignore_ascii_case(identifier))
        .map(|(_, layout)| *layout)
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn layout_for(date_format: &str) -> String {
    if let Some(layout) = locale_layout(date_format) {
        return layout.to_string();
    }
    if date_format.contains('%') && is_valid_pattern(date_format) {
        return date_format.to_string();
    }

    tracing::warn!(
        date_format,
        fallback = DEFAULT_DATE_FORMAT,
        "Unsupported date format; using fallback"
    );
    locale_layout(DEFAULT_DATE_FORMAT)
        .unwrap_or(LOCALE_LAYOUTS[0].1)
        .to_string()
}
