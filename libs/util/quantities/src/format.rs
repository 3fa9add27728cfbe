// This file is part of Dimensional.
//
// Dimensional is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Dimensional is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Dimensional.  If not, see <http://www.gnu.org/licenses/>.
use crate::{abbreviation::get_default_abbreviation, default_culture, AnyUnit, Culture};
use std::fmt;

pub const DEFAULT_DIGITS: usize = 2;

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Format a bare number with `digits` digits after the radix. Magnitudes in
/// `[1e-3, 1e3)` and zero print in fixed notation, everything else in
/// scientific notation. Trailing zeros are dropped.
pub fn format_value(value: f64, digits: usize, culture: &Culture) -> String {
    let magnitude = value.abs();
    let formatted = if value == 0.0 || (1e-3..1e3).contains(&magnitude) {
        trim_fraction(&format!("{value:.digits$}")).to_owned()
    } else if value.is_finite() {
        let sci = format!("{value:.digits$e}");
        match sci.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
            None => sci,
        }
    } else {
        value.to_string()
    };
    let separator = culture.decimal_separator();
    if separator == '.' {
        formatted
    } else {
        formatted.replace('.', &separator.to_string())
    }
}

/// `"<value> <abbreviation>"` in the given culture.
pub fn format_quantity(value: f64, unit: AnyUnit, culture: &Culture, digits: usize) -> String {
    format!(
        "{} {}",
        format_value(value, digits, culture),
        get_default_abbreviation(unit, culture)
    )
}

/// `Display` for quantities: default culture, precision taken from the
/// formatter.
pub(crate) fn write_quantity(f: &mut fmt::Formatter, value: f64, unit: AnyUnit) -> fmt::Result {
    let digits = f.precision().unwrap_or(DEFAULT_DIGITS);
    f.write_str(&format_quantity(value, unit, &default_culture(), digits))
}
