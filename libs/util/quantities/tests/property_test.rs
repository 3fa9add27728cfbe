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
use approx::assert_relative_eq;
use proptest::prelude::*;
use quantities::{
    all_units, convert_any, equals, AnyQuantity, AnyUnit, ComparisonType, Length, Operator,
    OperatorTable, Quantity, QuantityKind,
};

fn unit_at(index: usize) -> AnyUnit {
    let units = all_units().collect::<Vec<_>>();
    units[index % units.len()]
}

#[test]
fn test_every_rule_closes_over_dimensions() {
    let table = OperatorTable::global();
    assert!(!table.is_empty());
    for rule in table.rules() {
        let left = rule.left().dimensions();
        let right = rule.right().dimensions();
        let expected = match rule.operator() {
            Operator::Mul => left.multiply(right),
            Operator::Div => left.divide(right),
            Operator::Add | Operator::Sub => {
                assert_eq!(left, right, "{rule}");
                left
            }
        };
        assert_eq!(rule.result().dimensions(), expected, "{rule}");
    }
}

#[test]
fn test_every_additive_kind_has_addition() {
    let table = OperatorTable::global();
    for &kind in QuantityKind::ALL {
        let found = table.lookup(kind, Operator::Add, kind).is_ok();
        assert_eq!(found, kind.is_additive(), "{kind}");
    }
}

#[test]
fn test_length_tolerance() {
    let two_m = Length::from_meters(2.0);
    assert!(!two_m
        .equals_with_tolerance(&Length::from_inches(50.0), 0.01, ComparisonType::Relative)
        .unwrap());
    assert!(two_m
        .equals_with_tolerance(&two_m, 0.0, ComparisonType::Absolute)
        .unwrap());
}

proptest! {
    #[test]
    fn round_trip_through_every_unit(value in -1e12f64..1e12, index in 0usize..1_000) {
        let unit = unit_at(index);
        let base = unit.kind().base_unit();
        let there = convert_any(value, base, unit).unwrap();
        let back = convert_any(there, unit, base).unwrap();
        prop_assert!(
            (back - value).abs() <= 1e-9 * value.abs().max(1.0),
            "{} -> {} -> {} via {}", value, there, back, unit
        );
    }

    #[test]
    fn identity_conversion_is_exact(value in proptest::num::f64::ANY, index in 0usize..1_000) {
        let unit = unit_at(index);
        let same = convert_any(value, unit, unit).unwrap();
        prop_assert_eq!(same.to_bits(), value.to_bits());
    }

    #[test]
    fn declared_products_commute(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let table = OperatorTable::global();
        for rule in table.rules().filter(|r| r.operator() == Operator::Mul) {
            if let Ok(reverse) = table.lookup(rule.right(), Operator::Mul, rule.left()) {
                let lhs = AnyQuantity::from_base(rule.left(), a);
                let rhs = AnyQuantity::from_base(rule.right(), b);
                let forward = rule.apply(&lhs, &rhs).unwrap();
                let backward = reverse.apply(&rhs, &lhs).unwrap();
                prop_assert_eq!(forward.kind(), backward.kind());
                assert_relative_eq!(
                    forward.base_value(),
                    backward.base_value(),
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn absolute_tolerance_is_monotonic(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        tolerance in 0f64..1e6,
        extra in 0f64..1e6,
    ) {
        if equals(a, b, tolerance, ComparisonType::Absolute).unwrap() {
            prop_assert!(equals(a, b, tolerance + extra, ComparisonType::Absolute).unwrap());
        }
    }

    #[test]
    fn negative_tolerance_is_rejected(a in -1e6f64..1e6, tolerance in -1e6f64..-1e-300) {
        prop_assert!(equals(a, a, tolerance, ComparisonType::Relative).is_err());
    }
}
