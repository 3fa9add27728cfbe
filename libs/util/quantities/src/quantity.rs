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
    convert, default_culture, format, parse, to_base, AnyQuantity, AnyUnit, Culture, Dimensions,
    QuantityKind, QuantityResult, Unit,
};
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

/// A numeric value paired with a unit of one specific quantity.
///
/// Values are immutable: every conversion produces a new value. Equality and
/// ordering convert the right hand side into the unit of the left hand side
/// before comparing the raw numbers. Exact floating point equality is fragile;
/// prefer `equals_with_tolerance`.
///
/// `PartialOrd` follows IEEE 754, so NaN is unordered. Use `compare_to` when
/// a total order is needed for sorting; it places NaN after every number.
pub trait Quantity:
    Copy + Debug + Display + PartialEq + PartialOrd + Into<AnyQuantity> + Send + Sync + 'static
{
    type Unit: Unit;

    const KIND: QuantityKind;
    const DIMENSIONS: Dimensions;

    fn new(value: f64, unit: Self::Unit) -> Self;
    fn value(&self) -> f64;
    fn unit(&self) -> Self::Unit;

    fn from_base(base: f64) -> Self {
        Self::new(base, Self::Unit::BASE)
    }

    fn zero() -> Self {
        Self::from_base(0.0)
    }

    fn max_value() -> Self {
        Self::from_base(f64::MAX)
    }

    fn min_value() -> Self {
        Self::from_base(f64::MIN)
    }

    fn kind(&self) -> QuantityKind {
        Self::KIND
    }

    fn dimensions(&self) -> Dimensions {
        Self::DIMENSIONS
    }

    fn base_value(&self) -> f64 {
        to_base(self.value(), self.unit())
    }

    fn as_unit(&self, unit: Self::Unit) -> f64 {
        convert(self.value(), self.unit(), unit)
    }

    fn to_unit(&self, unit: Self::Unit) -> Self {
        Self::new(self.as_unit(unit), unit)
    }

    fn as_any_unit(&self, unit: AnyUnit) -> QuantityResult<f64> {
        Ok(self.as_unit(Self::Unit::try_from(unit)?))
    }

    fn to_any_unit(&self, unit: AnyUnit) -> QuantityResult<Self> {
        Ok(self.to_unit(Self::Unit::try_from(unit)?))
    }

    fn equals_with_tolerance(
        &self,
        other: &Self,
        tolerance: f64,
        comparison_type: ComparisonType,
    ) -> QuantityResult<bool> {
        comparison::equals(
            self.value(),
            other.as_unit(self.unit()),
            tolerance,
            comparison_type,
        )
    }

    fn compare_to(&self, other: &Self) -> Ordering {
        OrderedFloat(self.value()).cmp(&OrderedFloat(other.as_unit(self.unit())))
    }

    fn parse(text: &str) -> QuantityResult<Self> {
        Self::parse_in(text, &default_culture())
    }

    fn parse_in(text: &str, culture: &Culture) -> QuantityResult<Self> {
        parse::parse_quantity(text, culture)
    }

    fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    fn to_string_in(&self, unit: Self::Unit, culture: &Culture, digits: usize) -> String {
        format::format_quantity(self.as_unit(unit), unit.into(), culture, digits)
    }
}

/// Sort quantities of the same type by magnitude, NaN last.
pub fn sort_quantities<Q: Quantity>(quantities: &mut [Q]) {
    quantities.sort_by(|a, b| a.compare_to(b));
}
