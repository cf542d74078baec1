//
//  cloudfoundry-client
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the library and the CLI.

use std::time::Duration;

/// Formats a duration into a human-readable string.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cloudfoundry_client::util::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
/// assert_eq!(format_duration(Duration::from_secs(3665)), "1h 1m");
/// ```
///
/// # Notes
///
/// - Sub-second durations are shown in milliseconds, since poll intervals
///   are often configured that small in tests.
/// - For durations under 60 seconds, shows only seconds (e.g., "45s").
/// - For durations under 1 hour, shows minutes and seconds (e.g., "2m 5s").
/// - For longer durations, shows hours and minutes (e.g., "1h 1m").
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs == 0 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Parses a number of seconds from a CLI or config value into a [`Duration`].
///
/// Fractional values are accepted so sub-second intervals can be configured.
/// Zero is rejected: a zero interval would query back to back and a zero
/// deadline could never be met.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cloudfoundry_client::util::parse_seconds;
///
/// assert_eq!(parse_seconds("2").unwrap(), Duration::from_secs(2));
/// assert_eq!(parse_seconds("0.5").unwrap(), Duration::from_millis(500));
/// assert!(parse_seconds("-1").is_err());
/// assert!(parse_seconds("0").is_err());
/// ```
pub fn parse_seconds(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("'{}' is not a positive number of seconds", value));
    }

    let duration =
        Duration::try_from_secs_f64(secs).map_err(|e| format!("'{}' is out of range: {}", value, e))?;
    if duration.is_zero() {
        return Err(format!("'{}' is not a positive number of seconds", value));
    }
    Ok(duration)
}
