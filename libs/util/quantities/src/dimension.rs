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
use std::fmt;

/// Exponents of the seven SI base dimensions that make up a physical quantity.
///
/// Two quantities can be converted into one another only when their dimensions
/// are identical. Multiplying or dividing quantities adds or subtracts the
/// exponents; both operations are `const` so that operator rules can be checked
/// at compile time.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Dimensions {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub current: i8,
    pub temperature: i8,
    pub amount: i8,
    pub luminous_intensity: i8,
}

const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "N", "J"];

impl Dimensions {
    pub const DIMENSIONLESS: Dimensions = Dimensions::new(0, 0, 0, 0, 0, 0, 0);

    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminous_intensity,
        }
    }

    pub const fn exponents(&self) -> [i8; 7] {
        [
            self.length,
            self.mass,
            self.time,
            self.current,
            self.temperature,
            self.amount,
            self.luminous_intensity,
        ]
    }

    const fn from_exponents(e: [i8; 7]) -> Self {
        Self::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6])
    }

    pub const fn multiply(self, other: Dimensions) -> Dimensions {
        let a = self.exponents();
        let b = other.exponents();
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = a[i] + b[i];
            i += 1;
        }
        Self::from_exponents(out)
    }

    pub const fn divide(self, other: Dimensions) -> Dimensions {
        let a = self.exponents();
        let b = other.exponents();
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = a[i] - b[i];
            i += 1;
        }
        Self::from_exponents(out)
    }

    // `==` is not usable in const context.
    pub const fn same_as(self, other: Dimensions) -> bool {
        let a = self.exponents();
        let b = other.exponents();
        let mut i = 0;
        while i < 7 {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.same_as(Self::DIMENSIONLESS)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exp) in SYMBOLS.iter().zip(self.exponents()) {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exp)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LENGTH: Dimensions = Dimensions::new(1, 0, 0, 0, 0, 0, 0);
    const TIME: Dimensions = Dimensions::new(0, 0, 1, 0, 0, 0, 0);

    #[test]
    fn test_velocity_from_length_and_time() {
        let v = LENGTH.divide(TIME);
        assert_eq!(v, Dimensions::new(1, 0, -1, 0, 0, 0, 0));
        assert_eq!(v.multiply(TIME), LENGTH);
    }

    #[test]
    fn test_same_as_matches_eq() {
        assert!(LENGTH.same_as(LENGTH));
        assert!(!LENGTH.same_as(TIME));
        assert!(LENGTH.divide(LENGTH).is_dimensionless());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimensions::DIMENSIONLESS.to_string(), "1");
        assert_eq!(LENGTH.to_string(), "L");
        assert_eq!(LENGTH.divide(TIME).to_string(), "L T^-1");
        assert_eq!(
            Dimensions::new(0, 1, -1, 0, 0, 0, 0).to_string(),
            "M T^-1"
        );
    }
}
