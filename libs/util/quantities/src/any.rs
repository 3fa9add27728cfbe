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
    comparison::{self, ComparisonType},
    convert_any, default_culture, format, parse, AnyUnit, Culture, Dimensions, Operator,
    OperatorTable, QuantityKind, QuantityResult,
};
use std::{cmp::Ordering, fmt};

/// A value of any quantity with a unit chosen at runtime.
///
/// This is the dynamic counterpart of the typed quantities; cross-quantity
/// arithmetic goes through the `OperatorTable` rather than `std::ops`.
/// Values of different kinds are never equal and never ordered.
#[derive(Clone, Copy, Debug)]
pub struct AnyQuantity {
    value: f64,
    unit: AnyUnit,
}

impl AnyQuantity {
    pub fn new(value: f64, unit: AnyUnit) -> Self {
        Self { value, unit }
    }

    pub fn from_base(kind: QuantityKind, base: f64) -> Self {
        Self::new(base, kind.base_unit())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AnyUnit {
        self.unit
    }

    pub fn kind(&self) -> QuantityKind {
        self.unit.kind()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.kind().dimensions()
    }

    pub fn base_value(&self) -> f64 {
        self.unit.conversion().to_base(self.value)
    }

    pub fn as_unit(&self, unit: AnyUnit) -> QuantityResult<f64> {
        convert_any(self.value, self.unit, unit)
    }

    pub fn to_unit(&self, unit: AnyUnit) -> QuantityResult<Self> {
        Ok(Self::new(self.as_unit(unit)?, unit))
    }

    /// Apply `operator` through the built-in operator table.
    pub fn combine(&self, operator: Operator, rhs: &AnyQuantity) -> QuantityResult<AnyQuantity> {
        OperatorTable::global().apply(self, operator, rhs)
    }

    pub fn equals_with_tolerance(
        &self,
        other: &AnyQuantity,
        tolerance: f64,
        comparison_type: ComparisonType,
    ) -> QuantityResult<bool> {
        comparison::equals(
            self.value,
            other.as_unit(self.unit)?,
            tolerance,
            comparison_type,
        )
    }

    /// Parse `text` as a quantity of the given kind.
    pub fn parse(kind: QuantityKind, text: &str, culture: &Culture) -> QuantityResult<Self> {
        parse::parse_any_of_kind(kind, text, culture)
    }

    /// Parse `text`, inferring the quantity from its unit abbreviation.
    pub fn parse_any(text: &str, culture: &Culture) -> QuantityResult<Self> {
        parse::parse_any_quantity(text, culture)
    }

    pub fn to_string_in(
        &self,
        unit: AnyUnit,
        culture: &Culture,
        digits: usize,
    ) -> QuantityResult<String> {
        let value = self.as_unit(unit)?;
        Ok(format::format_quantity(value, unit, culture, digits))
    }
}

impl PartialEq for AnyQuantity {
    fn eq(&self, other: &Self) -> bool {
        match convert_any(other.value, other.unit, self.unit) {
            Ok(other) => self.value == other,
            Err(_) => false,
        }
    }
}

impl PartialOrd for AnyQuantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let other = convert_any(other.value, other.unit, self.unit).ok()?;
        self.value.partial_cmp(&other)
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format::write_quantity(f, self.value, self.unit)
    }
}

impl std::str::FromStr for AnyQuantity {
    type Err = crate::QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_any(s, &default_culture())
    }
}
