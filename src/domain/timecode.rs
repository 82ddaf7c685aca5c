// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/timecode.rs
//
// Conversion between textual timecodes and seconds, and clip durations.
//
// Single home for the seconds <-> `HH:MM:SS` helpers used by the cut table,
// the record table, the player and the crop editor.

use crate::constant::{DURATION_STEP_MINUTES, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, ZERO_TIMECODE};

/// Parse a timecode into seconds.
///
/// Accepts `SS`, `MM:SS` and `HH:MM:SS`, each with optional fractional
/// seconds. Hours and minutes are read as integers, seconds as decimals.
/// Components that do not start with a number count as 0, and so does empty,
/// negative or otherwise unusable input. This never fails.
///
/// ```
/// use clipcrop::domain::timecode::parse;
/// assert_eq!(parse("1:2:3"), 3723.0);
/// assert_eq!(parse("2:30"), 150.0);
/// assert_eq!(parse("00:00:01.250"), 1.25);
/// assert_eq!(parse("bad"), 0.0);
/// ```
pub fn parse(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let parts: Vec<&str> = text.split(':').collect();
    let seconds = match parts.as_slice() {
        [s] => leading_decimal(s),
        [m, s] => leading_integer(m) * SECONDS_PER_MINUTE + leading_decimal(s),
        [h, m, s] => {
            leading_integer(h) * SECONDS_PER_HOUR
                + leading_integer(m) * SECONDS_PER_MINUTE
                + leading_decimal(s)
        }
        _ => 0.0,
    };

    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Format seconds as `HH:MM:SS`.
///
/// Fractional seconds are truncated; use [`format_precise`] to keep them.
///
/// ```
/// use clipcrop::domain::timecode::format;
/// assert_eq!(format(0.0), "00:00:00");
/// assert_eq!(format(3661.0), "01:01:01");
/// assert_eq!(format(59.999), "00:00:59");
/// ```
pub fn format(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return ZERO_TIMECODE.to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Format seconds as `HH:MM:SS.mmm`, rounded to the nearest millisecond.
///
/// This is the form cut points are handed to the media backend in.
///
/// ```
/// use clipcrop::domain::timecode::format_precise;
/// assert_eq!(format_precise(3723.5), "01:02:03.500");
/// assert_eq!(format_precise(0.0), "00:00:00.000");
/// ```
pub fn format_precise(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_ms = (seconds * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total = total_ms / 1000;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Clip duration in minutes between two timecodes, in steps of half a minute.
///
/// Returns 0 when the end is not after the start, including equal markers.
///
/// ```
/// use clipcrop::domain::timecode::duration;
/// assert_eq!(duration("00:01:00", "00:02:00"), 1.0);
/// assert_eq!(duration("00:01:00", "00:01:15"), 0.5);
/// assert_eq!(duration("00:02:00", "00:01:00"), 0.0);
/// ```
pub fn duration(start: &str, end: &str) -> f64 {
    duration_between(parse(start), parse(end))
}

/// Numeric form of [`duration`] for values already in seconds.
pub fn duration_between(start: f64, end: f64) -> f64 {
    // Also rejects NaN on either side.
    if !(end > start) {
        return 0.0;
    }
    let minutes = (end - start) / SECONDS_PER_MINUTE;
    (minutes / DURATION_STEP_MINUTES).round() * DURATION_STEP_MINUTES
}

/// Bring free-form table input into canonical display form.
///
/// Text already in `HH:MM:SS` or `HH:MM:SS.mmm` form is returned unchanged.
/// A bare number of seconds becomes `HH:MM:SS`. Colon-separated input keeps
/// its sub-second part as `HH:MM:SS.mmm`. Anything else is parsed tolerantly,
/// which usually means `00:00:00`.
///
/// ```
/// use clipcrop::domain::timecode::normalize;
/// assert_eq!(normalize("01:02:03"), "01:02:03");
/// assert_eq!(normalize("120.5"), "00:02:00");
/// assert_eq!(normalize("2:05.5"), "00:02:05.500");
/// assert_eq!(normalize(""), "00:00:00");
/// ```
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return ZERO_TIMECODE.to_string();
    }
    if is_canonical(text) {
        return text.to_string();
    }
    if text.contains(':') && text.split(':').count() <= 3 {
        return format_precise(parse(text));
    }
    format(parse(text))
}

/// `HH:MM:SS` or `HH:MM:SS.mmm`, two digits per field and exactly three
/// millisecond digits.
fn is_canonical(text: &str) -> bool {
    let (clock, millis) = match text.split_once('.') {
        Some((clock, millis)) => (clock, Some(millis)),
        None => (text, None),
    };
    let fields_ok = {
        let fields: Vec<&str> = clock.split(':').collect();
        fields.len() == 3
            && fields
                .iter()
                .all(|f| f.len() == 2 && f.bytes().all(|b| b.is_ascii_digit()))
    };
    let millis_ok =
        millis.is_none_or(|ms| ms.len() == 3 && ms.bytes().all(|b| b.is_ascii_digit()));
    fields_ok && millis_ok
}

/// Value of the leading integer in `text` (optional sign, then digits), or 0.
fn leading_integer(text: &str) -> f64 {
    let text = text.trim();
    let end = numeric_prefix_len(text, false);
    text[..end].parse::<i64>().map_or(0.0, |v| v as f64)
}

/// Value of the leading decimal number in `text`, or 0.
fn leading_decimal(text: &str) -> f64 {
    let text = text.trim();
    let end = numeric_prefix_len(text, true);
    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn numeric_prefix_len(text: &str, allow_fraction: bool) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if allow_fraction && !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if allow_fraction && seen_digit && matches!(bytes.get(end), Some(b'e' | b'E')) {
        end += exponent_len(&bytes[end..]);
    }
    end
}

/// Length of an `e[+-]digits` exponent at the start of `bytes`, or 0 if
/// there are no exponent digits.
fn exponent_len(bytes: &[u8]) -> usize {
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 { 0 } else { 1 + sign + digits }
}
