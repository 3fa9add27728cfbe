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
use crate::{convert_any, rules, AnyQuantity, QuantityError, QuantityKind, QuantityResult};
use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use std::{fmt, str::FromStr};

/// Declare typed cross-quantity operators. Every line produces the `std::ops`
/// impl, a compile time check that the result has the dimensions implied by the
/// operands, and an entry in `RULES` for runtime dispatch.
///
/// ```ignore
/// operator_rules! {
///     Length * Length => Area;
///     MassFlow * Duration => Mass, scale = 1e-3;
/// }
/// ```
macro_rules! operator_rules {
    ($($L:ident $op:tt $R:ident => $Res:ident $(, scale = $s:expr)?;)+) => {
        $(
            operator_rules!(@impl $L $op $R => $Res, 1.0 $(* $s)?);
        )+

        pub(crate) const RULES: &[$crate::OperatorRule] = &[
            $(
                $crate::OperatorRule::new(
                    $crate::QuantityKind::$L,
                    operator_rules!(@op $op),
                    $crate::QuantityKind::$R,
                    $crate::QuantityKind::$Res,
                    $crate::Combinator::Base(1.0 $(* $s)?),
                ),
            )+
        ];
    };

    (@op *) => { $crate::Operator::Mul };
    (@op /) => { $crate::Operator::Div };
    (@op +) => { $crate::Operator::Add };
    (@op -) => { $crate::Operator::Sub };

    (@impl $L:ident * $R:ident => $Res:ident, $scale:expr) => {
        static_assertions::const_assert!(<$Res as $crate::Quantity>::DIMENSIONS
            .same_as(<$L as $crate::Quantity>::DIMENSIONS.multiply(<$R as $crate::Quantity>::DIMENSIONS)));

        impl std::ops::Mul<$R> for $L {
            type Output = $Res;

            fn mul(self, rhs: $R) -> $Res {
                <$Res as $crate::Quantity>::from_base(
                    $crate::Quantity::base_value(&self) * $crate::Quantity::base_value(&rhs) * $scale,
                )
            }
        }
    };
    (@impl $L:ident / $R:ident => $Res:ident, $scale:expr) => {
        static_assertions::const_assert!(<$Res as $crate::Quantity>::DIMENSIONS
            .same_as(<$L as $crate::Quantity>::DIMENSIONS.divide(<$R as $crate::Quantity>::DIMENSIONS)));

        impl std::ops::Div<$R> for $L {
            type Output = $Res;

            fn div(self, rhs: $R) -> $Res {
                <$Res as $crate::Quantity>::from_base(
                    $crate::Quantity::base_value(&self) / $crate::Quantity::base_value(&rhs) * $scale,
                )
            }
        }
    };
    (@impl $L:ident + $R:ident => $Res:ident, $scale:expr) => {
        static_assertions::const_assert!(<$Res as $crate::Quantity>::DIMENSIONS
            .same_as(<$L as $crate::Quantity>::DIMENSIONS)
            && <$L as $crate::Quantity>::DIMENSIONS.same_as(<$R as $crate::Quantity>::DIMENSIONS));

        impl std::ops::Add<$R> for $L {
            type Output = $Res;

            fn add(self, rhs: $R) -> $Res {
                <$Res as $crate::Quantity>::from_base(
                    ($crate::Quantity::base_value(&self) + $crate::Quantity::base_value(&rhs)) * $scale,
                )
            }
        }
    };
    (@impl $L:ident - $R:ident => $Res:ident, $scale:expr) => {
        static_assertions::const_assert!(<$Res as $crate::Quantity>::DIMENSIONS
            .same_as(<$L as $crate::Quantity>::DIMENSIONS)
            && <$L as $crate::Quantity>::DIMENSIONS.same_as(<$R as $crate::Quantity>::DIMENSIONS));

        impl std::ops::Sub<$R> for $L {
            type Output = $Res;

            fn sub(self, rhs: $R) -> $Res {
                <$Res as $crate::Quantity>::from_base(
                    ($crate::Quantity::base_value(&self) - $crate::Quantity::base_value(&rhs)) * $scale,
                )
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" | "x" | "×" => Self::Mul,
            "/" | "÷" => Self::Div,
            _ => return Err(QuantityError::parse(s, "expected one of + - * /")),
        })
    }
}

/// How the operands of a rule are combined into its result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Combinator {
    /// Convert the right operand into the left operand's unit and keep that
    /// unit. Only valid for same-kind addition and subtraction.
    InLeftUnit,
    /// Combine base values, multiply by the constant and build the result in
    /// its base unit.
    Base(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatorRule {
    left: QuantityKind,
    operator: Operator,
    right: QuantityKind,
    result: QuantityKind,
    combinator: Combinator,
}

impl OperatorRule {
    pub const fn new(
        left: QuantityKind,
        operator: Operator,
        right: QuantityKind,
        result: QuantityKind,
        combinator: Combinator,
    ) -> Self {
        Self {
            left,
            operator,
            right,
            result,
            combinator,
        }
    }

    pub fn left(&self) -> QuantityKind {
        self.left
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn right(&self) -> QuantityKind {
        self.right
    }

    pub fn result(&self) -> QuantityKind {
        self.result
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn apply(&self, lhs: &AnyQuantity, rhs: &AnyQuantity) -> QuantityResult<AnyQuantity> {
        if lhs.kind() != self.left || rhs.kind() != self.right {
            return Err(QuantityError::UnsupportedOperation {
                left: lhs.kind(),
                operator: self.operator,
                right: rhs.kind(),
            });
        }
        Ok(match self.combinator {
            Combinator::InLeftUnit => {
                let rhs = convert_any(rhs.value(), rhs.unit(), lhs.unit())?;
                AnyQuantity::new(self.operator.apply(lhs.value(), rhs), lhs.unit())
            }
            Combinator::Base(scale) => AnyQuantity::from_base(
                self.result,
                self.operator.apply(lhs.base_value(), rhs.base_value()) * scale,
            ),
        })
    }
}

impl fmt::Display for OperatorRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} => {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

type RuleKey = (QuantityKind, Operator, QuantityKind);

/// Runtime registry of operator rules keyed by operand kinds and operator.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    rules: FxHashMap<RuleKey, OperatorRule>,
}

static GLOBAL_TABLE: Lazy<OperatorTable> = Lazy::new(OperatorTable::builtin);

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every declared cross-quantity rule plus same-kind addition and
    /// subtraction for each quantity whose units are all linear.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for rule in rules::RULES {
            table.insert(*rule);
        }
        for &kind in QuantityKind::ALL {
            if kind.is_additive() {
                for op in [Operator::Add, Operator::Sub] {
                    table.insert(OperatorRule::new(
                        kind,
                        op,
                        kind,
                        kind,
                        Combinator::InLeftUnit,
                    ));
                }
            }
        }
        table
    }

    /// The shared built-in table.
    pub fn global() -> &'static OperatorTable {
        &GLOBAL_TABLE
    }

    /// Add a rule, returning the one it replaced, if any.
    pub fn insert(&mut self, rule: OperatorRule) -> Option<OperatorRule> {
        self.rules.insert((rule.left, rule.operator, rule.right), rule)
    }

    pub fn lookup(
        &self,
        left: QuantityKind,
        operator: Operator,
        right: QuantityKind,
    ) -> QuantityResult<&OperatorRule> {
        self.rules
            .get(&(left, operator, right))
            .ok_or(QuantityError::UnsupportedOperation {
                left,
                operator,
                right,
            })
    }

    pub fn apply(
        &self,
        lhs: &AnyQuantity,
        operator: Operator,
        rhs: &AnyQuantity,
    ) -> QuantityResult<AnyQuantity> {
        self.lookup(lhs.kind(), operator, rhs.kind())?.apply(lhs, rhs)
    }

    pub fn rules(&self) -> impl Iterator<Item = &OperatorRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AnyUnit, DurationUnit, LengthUnit, MassFlowUnit, MassUnit};
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_parse() {
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!(" ÷ ".parse::<Operator>().unwrap(), Operator::Div);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_lookup_missing_rule() {
        let table = OperatorTable::global();
        assert_eq!(
            table
                .lookup(QuantityKind::Length, Operator::Mul, QuantityKind::Mass)
                .unwrap_err(),
            QuantityError::UnsupportedOperation {
                left: QuantityKind::Length,
                operator: Operator::Mul,
                right: QuantityKind::Mass,
            }
        );
        assert!(table
            .lookup(QuantityKind::Temperature, Operator::Add, QuantityKind::Temperature)
            .is_err());
    }

    #[test]
    fn test_same_kind_addition_keeps_left_unit() {
        let lhs = AnyQuantity::new(1.0, LengthUnit::Foot.into());
        let rhs = AnyQuantity::new(12.0, LengthUnit::Inch.into());
        let sum = OperatorTable::global()
            .apply(&lhs, Operator::Add, &rhs)
            .unwrap();
        assert_eq!(sum.unit(), AnyUnit::from(LengthUnit::Foot));
        assert_relative_eq!(sum.value(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mass_flow_times_duration() {
        let lhs = AnyQuantity::new(20.0, MassFlowUnit::KilogramPerSecond.into());
        let rhs = AnyQuantity::new(4.0, DurationUnit::Second.into());
        let mass = OperatorTable::global()
            .apply(&lhs, Operator::Mul, &rhs)
            .unwrap();
        assert_eq!(mass.unit(), AnyUnit::from(MassUnit::Kilogram));
        assert_relative_eq!(mass.value(), 80.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rule_rejects_foreign_operands() {
        let rule = OperatorTable::global()
            .lookup(QuantityKind::Length, Operator::Mul, QuantityKind::Length)
            .unwrap();
        let mass = AnyQuantity::new(1.0, MassUnit::Kilogram.into());
        assert!(rule.apply(&mass, &mass).is_err());
        assert_eq!(rule.to_string(), "Length * Length => Area");
    }

    #[test]
    fn test_custom_table() {
        let mut table = OperatorTable::new();
        assert!(table.is_empty());
        table.insert(OperatorRule::new(
            QuantityKind::Mass,
            Operator::Mul,
            QuantityKind::Length,
            QuantityKind::Mass,
            Combinator::Base(1.0),
        ));
        assert_eq!(table.len(), 1);
        assert!(table
            .lookup(QuantityKind::Mass, Operator::Mul, QuantityKind::Length)
            .is_ok());
    }
}
