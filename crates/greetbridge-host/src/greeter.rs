// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reference native function surface.
//
// This is the host-supplied side of the bridge contract: a greeting function
// pair where the duration-taking variant simulates a heavier native task by
// sleeping before it replies.  Duration strings use the compound
// value-plus-unit form (`300ms`, `1.5s`, `1m30s`).

use std::thread;
use std::time::Duration;

use tracing::debug;

use greetbridge_channel::surface::{NativeError, NativeResult, NativeSurface};

/// Nanoseconds per unit, longest-lived last.
const UNIT_NANOS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1_000.0),
    ("µs", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
    ("m", 60_000_000_000.0),
    ("h", 3_600_000_000_000.0),
];

/// Parse a compound duration string such as `250ms` or `1m30s`.
///
/// Each segment is a decimal value followed by a unit from [`UNIT_NANOS`];
/// segments accumulate.  The bare string `0` is allowed without a unit.
fn parse_duration(input: &str) -> std::result::Result<Duration, String> {
    if input.is_empty() {
        return Err(format!("invalid duration \"{input}\""));
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos = 0.0_f64;
    let mut rest = input;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        let value: f64 = number
            .parse()
            .map_err(|_| format!("invalid duration \"{input}\""))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);
        if unit.is_empty() {
            return Err(format!("missing unit in duration \"{input}\""));
        }
        let scale = UNIT_NANOS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, nanos)| *nanos)
            .ok_or_else(|| format!("unknown unit \"{unit}\" in duration \"{input}\""))?;

        total_nanos += value * scale;
        rest = next;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(format!("duration \"{input}\" out of range"));
    }
    Ok(Duration::from_nanos(total_nanos as u64))
}

/// In-process greeting surface mirroring the precompiled native library.
pub struct Greeter;

impl NativeSurface for Greeter {
    fn say_hi(&self, name: &str) -> NativeResult {
        Ok(format!("Hi {name}!"))
    }

    fn say_hi_with_duration(&self, name: &str, duration: &str) -> NativeResult {
        let pause = parse_duration(duration).map_err(NativeError::new)?;
        debug!(?pause, "simulating native work");
        thread::sleep(pause);
        Ok(format!("Hi {name}!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_hi_greets() {
        assert_eq!(Greeter.say_hi("Alice"), Ok("Hi Alice!".to_string()));
    }

    #[test]
    fn parses_simple_durations() {
        assert_eq!(parse_duration("300ms"), Ok(Duration::from_millis(300)));
        assert_eq!(parse_duration("2s"), Ok(Duration::from_secs(2)));
        assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1500)));
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn parses_compound_durations() {
        assert_eq!(parse_duration("1m30s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5400)));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("-1s").is_err());
        assert_eq!(
            parse_duration("1x"),
            Err("unknown unit \"x\" in duration \"1x\"".to_string())
        );
    }

    #[test]
    fn bad_duration_surfaces_as_native_error() {
        let result = Greeter.say_hi_with_duration("Bob", "soon");
        match result {
            Err(NativeError(message)) => assert!(message.contains("invalid duration")),
            other => panic!("expected native error, got {other:?}"),
        }
    }

    #[test]
    fn short_duration_still_greets() {
        assert_eq!(
            Greeter.say_hi_with_duration("Bob", "1ms"),
            Ok("Hi Bob!".to_string())
        );
    }
}
