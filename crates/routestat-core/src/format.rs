//! Human-readable formatting for report values.

use std::time::Duration;

const SI_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count with SI (base 1000) units, e.g. `82 MB` or `1.5 kB`.
///
/// Values under 10 of their unit keep one decimal place.
pub fn bytes(n: u64) -> String {
    if n < 10 {
        return format!("{n} B");
    }

    let mut value = n as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < SI_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let rounded = (value * 10.0 + 0.5).floor() / 10.0;
    if rounded < 10.0 {
        format!("{:.1} {}", rounded, SI_UNITS[unit])
    } else {
        format!("{:.0} {}", rounded, SI_UNITS[unit])
    }
}

/// Format an elapsed duration using its largest whole unit, e.g. `3 minutes`.
pub fn duration(d: Duration) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const WEEK: u64 = 7 * DAY;

    let secs = d.as_secs();
    let (amount, unit) = match secs {
        0 => return "now".to_string(),
        s if s < MINUTE => (s, "second"),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < WEEK => (s / DAY, "day"),
        s => (s / WEEK, "week"),
    };

    if amount == 1 {
        format!("1 {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}

/// Format a host uptime as `3 days, 2:03` (hours and minutes always shown).
pub fn uptime(d: Duration) -> String {
    let secs = d.as_secs();
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;

    match days {
        0 => format!("{hours}:{minutes:02}"),
        1 => format!("1 day, {hours}:{minutes:02}"),
        n => format!("{n} days, {hours}:{minutes:02}"),
    }
}
