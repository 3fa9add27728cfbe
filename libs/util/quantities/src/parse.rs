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
use crate::{
    abbreviation::find_unit, AnyQuantity, AnyUnit, Culture, Quantity, QuantityError,
    QuantityKind, QuantityResult, Unit,
};
use once_cell::sync::Lazy;
use regex::Regex;

static QUANTITY_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<number>[+-]?(?:\d+(?:[.,]\d*)?|[.,]\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>.*?)\s*$",
    )
});

/// Split `text` into its number and its unit abbreviation.
fn split_quantity<'a>(text: &'a str, culture: &Culture) -> QuantityResult<(f64, &'a str)> {
    let re = QUANTITY_RE
        .as_ref()
        .map_err(|e| QuantityError::parse(text, e))?;
    let caps = re
        .captures(text)
        .ok_or_else(|| QuantityError::parse(text, "expected a number followed by a unit"))?;
    let (number, unit) = match (caps.name("number"), caps.name("unit")) {
        (Some(number), Some(unit)) => (number.as_str(), unit.as_str()),
        _ => return Err(QuantityError::parse(text, "expected a number followed by a unit")),
    };
    if unit.is_empty() {
        return Err(QuantityError::parse(text, "missing unit"));
    }

    let separator = culture.decimal_separator();
    if number.contains(|c| (c == '.' || c == ',') && c != separator) {
        return Err(QuantityError::parse(
            text,
            format!("culture {culture} uses {separator:?} as decimal separator"),
        ));
    }
    let value = number
        .replace(separator, ".")
        .parse::<f64>()
        .map_err(|e| QuantityError::parse(text, e))?;
    Ok((value, unit))
}

fn parse_in_kind(
    kind: Option<QuantityKind>,
    text: &str,
    culture: &Culture,
) -> QuantityResult<(f64, AnyUnit)> {
    let (value, abbreviation) = split_quantity(text, culture)?;
    let unit = find_unit(abbreviation, culture, kind)?;
    Ok((value, unit))
}

pub fn parse_quantity<Q: Quantity>(text: &str, culture: &Culture) -> QuantityResult<Q> {
    let (value, unit) = parse_in_kind(Some(Q::KIND), text, culture)?;
    Ok(Q::new(value, Q::Unit::try_from(unit)?))
}

/// Parse a unit abbreviation of one quantity, e.g. `"kg/s"`.
pub fn parse_unit<U: Unit>(abbreviation: &str, culture: &Culture) -> QuantityResult<U> {
    U::try_from(find_unit(abbreviation, culture, Some(U::KIND))?)
}

pub(crate) fn parse_any_of_kind(
    kind: QuantityKind,
    text: &str,
    culture: &Culture,
) -> QuantityResult<AnyQuantity> {
    let (value, unit) = parse_in_kind(Some(kind), text, culture)?;
    Ok(AnyQuantity::new(value, unit))
}

pub(crate) fn parse_any_quantity(text: &str, culture: &Culture) -> QuantityResult<AnyQuantity> {
    let (value, unit) = parse_in_kind(None, text, culture)?;
    Ok(AnyQuantity::new(value, unit))
}
