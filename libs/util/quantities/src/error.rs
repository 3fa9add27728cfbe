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
use crate::{AnyUnit, Culture, Operator, QuantityKind};
use thiserror::Error;

pub type QuantityResult<T> = Result<T, QuantityError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuantityError {
    #[error("unit {unit} is not registered for {quantity}")]
    UnsupportedUnit { quantity: QuantityKind, unit: AnyUnit },

    #[error("no operator rule for {left} {operator} {right}")]
    UnsupportedOperation {
        left: QuantityKind,
        operator: Operator,
        right: QuantityKind,
    },

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("unable to parse {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("no unit has the abbreviation {abbreviation:?} in culture {culture}")]
    UnknownAbbreviation {
        abbreviation: String,
        culture: Culture,
    },

    #[error("abbreviation {abbreviation:?} is ambiguous between {}", display_units(.candidates))]
    AmbiguousAbbreviation {
        abbreviation: String,
        candidates: Vec<AnyUnit>,
    },
}

impl QuantityError {
    pub(crate) fn invalid_argument<S: ToString>(name: &'static str, reason: S) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse<S: ToString>(input: &str, reason: S) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }
}

fn display_units(units: &[AnyUnit]) -> String {
    units
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{LengthUnit, MassUnit};

    #[test]
    fn test_messages() {
        let err = QuantityError::UnsupportedUnit {
            quantity: QuantityKind::Length,
            unit: AnyUnit::Mass(MassUnit::Kilogram),
        };
        assert_eq!(
            err.to_string(),
            "unit Mass::Kilogram is not registered for Length"
        );

        let err = QuantityError::UnsupportedOperation {
            left: QuantityKind::Length,
            operator: Operator::Mul,
            right: QuantityKind::Mass,
        };
        assert_eq!(err.to_string(), "no operator rule for Length * Mass");

        let err = QuantityError::AmbiguousAbbreviation {
            abbreviation: "m".to_owned(),
            candidates: vec![
                AnyUnit::Length(LengthUnit::Meter),
                AnyUnit::Length(LengthUnit::Mile),
            ],
        };
        assert_eq!(
            err.to_string(),
            "abbreviation \"m\" is ambiguous between Length::Meter, Length::Mile"
        );
    }
}
