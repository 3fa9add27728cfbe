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

/// Declare a quantity: its unit enum, its value type and the plumbing that ties
/// both into the registry. Each unit lists its plural accessor name, its
/// conversion to the base unit and its invariant abbreviations.
macro_rules! quantity {
    (
        $(#[$doc:meta])*
        $Quantity:ident($UnitEnum:ident) {
            dimensions: [$l:expr, $m:expr, $t:expr, $i:expr, $th:expr, $n:expr, $j:expr],
            base: $Base:ident,
            units: {
                $(
                    $Unit:ident($plural:ident) = $conv:ident($($arg:expr),+) [$($abbrev:literal),+ $(,)?],
                )+
            }
        }
    ) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $UnitEnum {
            $($Unit,)+
        }

        impl $crate::Unit for $UnitEnum {
            const KIND: $crate::QuantityKind = $crate::QuantityKind::$Quantity;
            const BASE: Self = $UnitEnum::$Base;
            const ALL: &'static [Self] = &[$($UnitEnum::$Unit,)+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$Unit => stringify!($Unit),)+
                }
            }

            fn conversion(self) -> $crate::Conversion {
                match self {
                    $(Self::$Unit => $crate::Conversion::$conv($($arg),+),)+
                }
            }

            fn abbreviations(self) -> &'static [&'static str] {
                match self {
                    $(Self::$Unit => &[$($abbrev),+],)+
                }
            }
        }

        impl std::fmt::Display for $UnitEnum {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str($crate::Unit::name(*self))
            }
        }

        impl std::str::FromStr for $UnitEnum {
            type Err = $crate::QuantityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::parse::parse_unit(s, &$crate::default_culture())
            }
        }

        impl From<$UnitEnum> for $crate::AnyUnit {
            fn from(unit: $UnitEnum) -> Self {
                $crate::AnyUnit::$Quantity(unit)
            }
        }

        impl TryFrom<$crate::AnyUnit> for $UnitEnum {
            type Error = $crate::QuantityError;

            fn try_from(unit: $crate::AnyUnit) -> Result<Self, Self::Error> {
                match unit {
                    $crate::AnyUnit::$Quantity(u) => Ok(u),
                    other => Err($crate::QuantityError::UnsupportedUnit {
                        quantity: $crate::QuantityKind::$Quantity,
                        unit: other,
                    }),
                }
            }
        }

        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $Quantity {
            value: f64,
            unit: $UnitEnum,
        }

        impl $Quantity {
            pub const fn new(value: f64, unit: $UnitEnum) -> Self {
                Self { value, unit }
            }

            pub fn value(&self) -> f64 {
                self.value
            }

            pub fn unit(&self) -> $UnitEnum {
                self.unit
            }

            paste::paste! {
                $(
                    pub const fn [<from_ $plural>](value: f64) -> Self {
                        Self::new(value, $UnitEnum::$Unit)
                    }

                    pub fn $plural(&self) -> f64 {
                        $crate::convert(self.value, self.unit, $UnitEnum::$Unit)
                    }
                )+
            }
        }

        impl $crate::Quantity for $Quantity {
            type Unit = $UnitEnum;

            const KIND: $crate::QuantityKind = $crate::QuantityKind::$Quantity;
            const DIMENSIONS: $crate::Dimensions =
                $crate::Dimensions::new($l, $m, $t, $i, $th, $n, $j);

            fn new(value: f64, unit: $UnitEnum) -> Self {
                Self { value, unit }
            }

            fn value(&self) -> f64 {
                self.value
            }

            fn unit(&self) -> $UnitEnum {
                self.unit
            }
        }

        impl Default for $Quantity {
            fn default() -> Self {
                <Self as $crate::Quantity>::zero()
            }
        }

        impl PartialEq for $Quantity {
            fn eq(&self, other: &Self) -> bool {
                self.value == $crate::convert(other.value, other.unit, self.unit)
            }
        }

        impl PartialOrd for $Quantity {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.value
                    .partial_cmp(&$crate::convert(other.value, other.unit, self.unit))
            }
        }

        impl std::fmt::Display for $Quantity {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                $crate::format::write_quantity(f, self.value, self.unit.into())
            }
        }

        impl std::str::FromStr for $Quantity {
            type Err = $crate::QuantityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::Quantity>::parse(s)
            }
        }

        impl From<$Quantity> for $crate::AnyQuantity {
            fn from(q: $Quantity) -> Self {
                $crate::AnyQuantity::new(q.value, $crate::AnyUnit::$Quantity(q.unit))
            }
        }

        impl TryFrom<$crate::AnyQuantity> for $Quantity {
            type Error = $crate::QuantityError;

            fn try_from(q: $crate::AnyQuantity) -> Result<Self, Self::Error> {
                Ok(Self::new(q.value(), $UnitEnum::try_from(q.unit())?))
            }
        }
    };
}

/// Addition and subtraction between two values of the same quantity. The right
/// hand side is converted into the unit of the left hand side, which the result
/// keeps.
macro_rules! supports_shift_ops {
    ($TypeName:ident) => {
        impl std::ops::Add<$TypeName> for $TypeName {
            type Output = $TypeName;

            fn add(self, other: $TypeName) -> Self {
                Self::new(
                    self.value + $crate::convert(other.value, other.unit, self.unit),
                    self.unit,
                )
            }
        }

        impl std::ops::AddAssign<$TypeName> for $TypeName {
            fn add_assign(&mut self, other: $TypeName) {
                self.value += $crate::convert(other.value, other.unit, self.unit);
            }
        }

        impl std::ops::Sub<$TypeName> for $TypeName {
            type Output = $TypeName;

            fn sub(self, other: $TypeName) -> Self {
                Self::new(
                    self.value - $crate::convert(other.value, other.unit, self.unit),
                    self.unit,
                )
            }
        }

        impl std::ops::SubAssign<$TypeName> for $TypeName {
            fn sub_assign(&mut self, other: $TypeName) {
                self.value -= $crate::convert(other.value, other.unit, self.unit);
            }
        }
    };
}

macro_rules! supports_scalar_ops {
    ($TypeName:ident) => {
        impl std::ops::Mul<f64> for $TypeName {
            type Output = $TypeName;

            fn mul(self, s: f64) -> Self {
                Self::new(self.value * s, self.unit)
            }
        }

        impl std::ops::Mul<$TypeName> for f64 {
            type Output = $TypeName;

            fn mul(self, q: $TypeName) -> $TypeName {
                $TypeName::new(self * q.value, q.unit)
            }
        }

        impl std::ops::MulAssign<f64> for $TypeName {
            fn mul_assign(&mut self, s: f64) {
                self.value *= s;
            }
        }

        impl std::ops::Div<f64> for $TypeName {
            type Output = $TypeName;

            fn div(self, s: f64) -> Self {
                Self::new(self.value / s, self.unit)
            }
        }

        impl std::ops::DivAssign<f64> for $TypeName {
            fn div_assign(&mut self, s: f64) {
                self.value /= s;
            }
        }

        impl std::ops::Neg for $TypeName {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self::new(-self.value, self.unit)
            }
        }
    };
}

/// Dividing a quantity by another of the same type cancels the units.
macro_rules! supports_cancellation {
    ($TypeName:ident) => {
        impl std::ops::Div<$TypeName> for $TypeName {
            type Output = f64;

            fn div(self, other: $TypeName) -> f64 {
                self.value / $crate::convert(other.value, other.unit, self.unit)
            }
        }
    };
}

macro_rules! supports_absdiffeq {
    ($TypeName:ident) => {
        impl $crate::approx::AbsDiffEq for $TypeName {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                f64::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                <f64 as $crate::approx::AbsDiffEq>::abs_diff_eq(
                    &self.value,
                    &$crate::convert(other.value, other.unit, self.unit),
                    epsilon,
                )
            }
        }

        impl $crate::approx::RelativeEq for $TypeName {
            fn default_max_relative() -> Self::Epsilon {
                f64::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                <f64 as $crate::approx::RelativeEq>::relative_eq(
                    &self.value,
                    &$crate::convert(other.value, other.unit, self.unit),
                    epsilon,
                    max_relative,
                )
            }
        }
    };
}
