//! Relative time formatting ("3 minutes ago", "in 2 hours").
//!
//! [`format_relative`] is a pure function of `(target, now, options)`. It
//! never reads the wall clock itself; callers feed it the current [`Tick`]
//! and re-evaluate when that tick changes. [`RelativeLabel`] caches one
//! result and recomputes only when one of those inputs changes.

use chrono::{DateTime, Utc};

use crate::Tick;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 1_440;
const MINUTES_PER_MONTH: u64 = 43_200;

/// Formatting switches for [`format_relative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelativeTimeOptions {
    /// Append "ago" for past targets, prefix "in" for future ones.
    pub add_suffix: bool,
    /// Render sub-minute differences in seconds instead of "less than a minute".
    pub include_seconds: bool,
    /// Round to a friendly approximation ("about 1 hour") instead of exact counts.
    pub humanize: bool,
}

impl RelativeTimeOptions {
    pub fn with_suffix(mut self) -> Self {
        self.add_suffix = true;
        self
    }

    pub fn with_seconds(mut self) -> Self {
        self.include_seconds = true;
        self
    }

    pub fn humanized(mut self) -> Self {
        self.humanize = true;
        self
    }
}

/// Describe the distance from `now` to `target` in words.
///
/// Targets at or before `now` read as past ("5 seconds ago"), targets after
/// it as future ("in 5 seconds"). A zero difference renders the smallest
/// unit the options allow.
pub fn format_relative(
    target: DateTime<Utc>,
    now: DateTime<Utc>,
    options: RelativeTimeOptions,
) -> String {
    let is_future = target > now;
    let secs = now
        .signed_duration_since(target)
        .num_seconds()
        .unsigned_abs();

    let phrase = if options.humanize {
        approximate_distance(secs, options.include_seconds)
    } else {
        exact_distance(secs, options.include_seconds)
    };

    match (options.add_suffix, is_future) {
        (false, _) => phrase,
        (true, true) => format!("in {phrase}"),
        (true, false) => format!("{phrase} ago"),
    }
}

/// Largest whole unit that fits, truncated.
fn exact_distance(secs: u64, include_seconds: bool) -> String {
    if secs < 60 {
        return if include_seconds {
            counted(secs, "second")
        } else {
            "less than a minute".to_string()
        };
    }

    let minutes = secs / 60;
    if minutes < MINUTES_PER_HOUR {
        return counted(minutes, "minute");
    }
    if minutes < MINUTES_PER_DAY {
        return counted(minutes / MINUTES_PER_HOUR, "hour");
    }

    let days = minutes / MINUTES_PER_DAY;
    if days < 30 {
        counted(days, "day")
    } else if days < 365 {
        counted(days / 30, "month")
    } else {
        counted(days / 365, "year")
    }
}

/// Fuzzy wording rounded to the nearest friendly unit.
fn approximate_distance(secs: u64, include_seconds: bool) -> String {
    let minutes = div_round(secs, 60);

    if minutes < 2 {
        if include_seconds {
            return match secs {
                0..5 => "less than 5 seconds".to_string(),
                5..10 => "less than 10 seconds".to_string(),
                10..20 => "less than 20 seconds".to_string(),
                20..40 => "half a minute".to_string(),
                40..60 => "less than a minute".to_string(),
                _ => counted(1, "minute"),
            };
        }
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            counted(1, "minute")
        };
    }

    if minutes < 45 {
        return counted(minutes, "minute");
    }
    if minutes < 90 {
        return format!("about {}", counted(1, "hour"));
    }
    if minutes < MINUTES_PER_DAY {
        return format!("about {}", counted(div_round(minutes, MINUTES_PER_HOUR), "hour"));
    }
    if minutes < 2_520 {
        return counted(1, "day");
    }
    if minutes < MINUTES_PER_MONTH {
        return counted(div_round(minutes, MINUTES_PER_DAY), "day");
    }
    if minutes < 2 * MINUTES_PER_MONTH {
        return format!("about {}", counted(div_round(minutes, MINUTES_PER_MONTH), "month"));
    }

    let months = minutes / MINUTES_PER_MONTH;
    if months < 12 {
        return counted(months, "month");
    }

    let years = months / 12;
    match months % 12 {
        0..3 => format!("about {}", counted(years, "year")),
        3..9 => format!("over {}", counted(years, "year")),
        _ => format!("almost {}", counted(years + 1, "year")),
    }
}

fn counted(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn div_round(n: u64, d: u64) -> u64 {
    (n + d / 2) / d
}

/// Memo cell for one rendered relative-time label.
///
/// The cached text is keyed on `(target, now, options)` and recomputed
/// exactly when one of them changes, so a tick costs one comparison per
/// visible label when nothing moved.
#[derive(Debug, Clone, Default)]
pub struct RelativeLabel {
    key: Option<(DateTime<Utc>, Tick, RelativeTimeOptions)>,
    text: String,
    recomputations: u64,
}

impl RelativeLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the given inputs, recomputed only if they differ from the
    /// previous call.
    pub fn resolve(
        &mut self,
        target: DateTime<Utc>,
        now: Tick,
        options: RelativeTimeOptions,
    ) -> &str {
        let key = (target, now, options);
        if self.key != Some(key) {
            self.text = format_relative(target, now.to_datetime(), options);
            self.key = Some(key);
            self.recomputations += 1;
        }
        &self.text
    }

    /// How many times the text has been computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
