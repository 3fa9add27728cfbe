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
use quantities::{
    AnyQuantity, Combinator, Culture, Duration, Force, LengthUnit, Mass, MassFlow, Operator,
    OperatorTable, Power, Quantity, QuantityError, QuantityKind, RotationalAcceleration,
    RotationalSpeed, Speed, Temperature, TemperatureDelta,
};

// The typed operator and the runtime table must agree.
fn assert_same<Q: Quantity>(typed: Q, dynamic: AnyQuantity) {
    assert_eq!(dynamic.kind(), Q::KIND);
    assert_relative_eq!(typed.base_value(), dynamic.base_value(), max_relative = 1e-12);
}

#[test]
fn test_typed_and_dynamic_agree() {
    let flow = MassFlow::from_pounds_per_hour(3.0);
    let time = Duration::from_minutes(7.0);
    let flow_any = AnyQuantity::from(flow);
    assert_same(flow * time, flow_any.combine(Operator::Mul, &time.into()).unwrap());

    let f = Force::from_kilonewtons(2.0);
    let m = Mass::from_tonnes(4.0);
    let a: AnyQuantity = f.into();
    assert_same(f / m, a.combine(Operator::Div, &m.into()).unwrap());

    let w = RotationalSpeed::from_revolutions_per_minute(120.0);
    let t = Duration::from_seconds(2.0);
    let alpha: RotationalAcceleration = w / t;
    let w_any: AnyQuantity = w.into();
    assert_same(alpha, w_any.combine(Operator::Div, &t.into()).unwrap());

    let p = Power::from_kilowatts(1.0);
    let p_any: AnyQuantity = p.into();
    assert_same(p * t, p_any.combine(Operator::Mul, &t.into()).unwrap());
}

#[test]
fn test_temperature_rules_in_table() {
    let hot: AnyQuantity = Temperature::from_degrees_celsius(30.0).into();
    let cold: AnyQuantity = Temperature::from_degrees_fahrenheit(50.0).into();
    let delta = hot.combine(Operator::Sub, &cold).unwrap();
    assert_eq!(delta.kind(), QuantityKind::TemperatureDelta);
    assert_relative_eq!(delta.base_value(), 20.0, epsilon = 1e-9);

    let warmer = cold
        .combine(Operator::Add, &TemperatureDelta::from_kelvins(20.0).into())
        .unwrap();
    let warmer = Temperature::try_from(warmer).unwrap();
    assert_relative_eq!(warmer.degrees_celsius(), 30.0, epsilon = 1e-9);

    assert_eq!(
        hot.combine(Operator::Add, &cold).unwrap_err(),
        QuantityError::UnsupportedOperation {
            left: QuantityKind::Temperature,
            operator: Operator::Add,
            right: QuantityKind::Temperature,
        }
    );
}

#[test]
fn test_same_kind_rules_keep_left_unit() {
    let table = OperatorTable::global();
    let rule = table
        .lookup(QuantityKind::Speed, Operator::Sub, QuantityKind::Speed)
        .unwrap();
    assert_eq!(rule.combinator(), Combinator::InLeftUnit);
    let a: AnyQuantity = Speed::from_knots(10.0).into();
    let b: AnyQuantity = Speed::from_kilometers_per_hour(1.852).into();
    let c = rule.apply(&a, &b).unwrap();
    assert_eq!(c.unit(), a.unit());
    assert_relative_eq!(c.value(), 9.0, epsilon = 1e-9);
}

#[test]
fn test_parse_any_and_format() {
    let culture = Culture::EN_US;
    let q = AnyQuantity::parse_any("12.5 kg/s", &culture).unwrap();
    assert_eq!(q.kind(), QuantityKind::MassFlow);
    assert_eq!(q.to_string(), "12.5 kg/s");

    let l = AnyQuantity::parse(QuantityKind::Length, "3 ft", &culture).unwrap();
    let m = l.to_unit(LengthUnit::Meter.into()).unwrap();
    assert_relative_eq!(m.value(), 0.9144, epsilon = 1e-12);
    assert_eq!(
        l.to_string_in(m.unit(), &Culture::RU_RU, 3).unwrap(),
        "0,914 м"
    );

    assert!(matches!(
        AnyQuantity::parse_any("1 g", &culture),
        Err(QuantityError::AmbiguousAbbreviation { .. })
    ));
    assert!(matches!(
        "7 parsecs".parse::<AnyQuantity>(),
        Err(QuantityError::UnknownAbbreviation { .. })
    ));
}
