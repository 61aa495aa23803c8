// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Longest fractional part shown before a result is rounded.
const MAX_FRACTION_DIGITS: usize = 8;

/// Enough places to hold the exact decimal expansion of any `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats a calculation result for display.
///
/// Values are shown in their shortest decimal form, integers without a
/// trailing `.0`. Results with more than eight fractional digits are rounded
/// to exactly eight places, halfway cases away from zero. Infinities display
/// as `Infinity` and `-Infinity`, which parse back as operands.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_result(17.0), "17");
/// assert_eq!(format_result(10.0 / 3.0), "3.33333333");
/// assert_eq!(format_result(1.0 / 512.0), "0.00195313");
/// ```
pub(crate) fn format_result(value: f64) -> String {
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    // -0 displays as 0
    let value = if value == 0.0 { 0.0 } else { value };
    let natural = value.to_string();

    match natural.split_once('.') {
        Some((_, fraction)) if fraction.len() > MAX_FRACTION_DIGITS => round_fraction(value),
        _ => natural,
    }
}

// `{:.8}` rounds exact ties to even, step off the tie so it rounds away from
// zero instead.
fn round_fraction(value: f64) -> String {
    let value = match (is_tie(value), value > 0.0) {
        (true, true) => value.next_up(),
        (true, false) => value.next_down(),
        (false, _) => value,
    };

    format!("{:.*}", MAX_FRACTION_DIGITS, value)
}

// True if the exact value lies halfway between two eight place decimals.
fn is_tie(value: f64) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);

    exact
        .split_once('.')
        .map(|(_, fraction)| fraction.trim_end_matches('0'))
        .is_some_and(|fraction| {
            fraction.len() == MAX_FRACTION_DIGITS + 1 && fraction.ends_with('5')
        })
}
