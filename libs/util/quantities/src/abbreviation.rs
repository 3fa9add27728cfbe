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

//! Culture aware unit abbreviations.
//!
//! Invariant abbreviations live in the unit tables. A handful of localized
//! abbreviations are built in and callers may register more at runtime. A
//! culture without its own abbreviations for a unit falls back to the
//! invariant ones.
use crate::{
    all_units, AnyUnit, AreaUnit, Culture, DurationUnit, EnergyUnit, ForceUnit, LengthUnit,
    MassFlowUnit, MassUnit, PowerUnit, PressureUnit, QuantityError, QuantityKind,
    QuantityResult, SpeedUnit, VolumeUnit,
};
use fxhash::FxHashMap;
use log::{debug, trace};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

type LocalizedTable = FxHashMap<(AnyUnit, &'static str), &'static [&'static str]>;

static LOCALIZED: Lazy<LocalizedTable> = Lazy::new(|| {
    let ru: &[(AnyUnit, &'static [&'static str])] = &[
        (LengthUnit::Meter.into(), &["м"]),
        (LengthUnit::Kilometer.into(), &["км"]),
        (LengthUnit::Centimeter.into(), &["см"]),
        (LengthUnit::Millimeter.into(), &["мм"]),
        (AreaUnit::SquareMeter.into(), &["м²"]),
        (VolumeUnit::CubicMeter.into(), &["м³"]),
        (VolumeUnit::Liter.into(), &["л"]),
        (MassUnit::Kilogram.into(), &["кг"]),
        (MassUnit::Gram.into(), &["г"]),
        (MassUnit::Milligram.into(), &["мг"]),
        (MassUnit::Tonne.into(), &["т"]),
        (DurationUnit::Second.into(), &["с"]),
        (DurationUnit::Minute.into(), &["мин"]),
        (DurationUnit::Hour.into(), &["ч"]),
        (DurationUnit::Day.into(), &["сут", "д"]),
        (SpeedUnit::MeterPerSecond.into(), &["м/с"]),
        (SpeedUnit::KilometerPerHour.into(), &["км/ч"]),
        (ForceUnit::Newton.into(), &["Н"]),
        (PressureUnit::Pascal.into(), &["Па"]),
        (EnergyUnit::Joule.into(), &["Дж"]),
        (PowerUnit::Watt.into(), &["Вт"]),
        (PowerUnit::Kilowatt.into(), &["кВт"]),
        (MassFlowUnit::GramPerSecond.into(), &["г/с"]),
        (MassFlowUnit::KilogramPerSecond.into(), &["кг/с"]),
        (MassFlowUnit::KilogramPerHour.into(), &["кг/ч"]),
        (MassFlowUnit::TonnePerDay.into(), &["т/сут"]),
    ];
    ru.iter().map(|&(unit, abbrs)| ((unit, "ru"), abbrs)).collect()
});

static REGISTERED: Lazy<RwLock<FxHashMap<(AnyUnit, Culture), Vec<String>>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// Register extra abbreviations for `unit` in `culture`. They are appended
/// after the built-in ones, so the default abbreviation only changes for a
/// culture that had none.
pub fn map_unit_to_abbreviation<U: Into<AnyUnit>>(
    unit: U,
    culture: &Culture,
    abbreviations: &[&str],
) {
    let unit = unit.into();
    debug!("registering {abbreviations:?} for {unit} in culture {culture}");
    let mut registered = REGISTERED.write();
    let entry = registered.entry((unit, culture.clone())).or_default();
    for abbr in abbreviations {
        if !entry.iter().any(|a| a == abbr) {
            entry.push((*abbr).to_owned());
        }
    }
}

/// Abbreviations for `unit` defined for exactly this culture.
fn culture_abbreviations(unit: AnyUnit, culture: &Culture) -> Vec<String> {
    let mut out = Vec::new();
    if culture.is_invariant() {
        out.extend(unit.abbreviations().iter().map(|a| (*a).to_owned()));
    } else if let Some(local) = LOCALIZED.get(&(unit, culture.language().as_str())) {
        out.extend(local.iter().map(|a| (*a).to_owned()));
    }
    if let Some(extra) = REGISTERED.read().get(&(unit, culture.clone())) {
        out.extend(extra.iter().cloned());
    }
    out
}

/// All abbreviations for `unit` in `culture`, falling back to the invariant
/// culture when the culture has none.
pub fn get_abbreviations<U: Into<AnyUnit>>(unit: U, culture: &Culture) -> Vec<String> {
    let unit = unit.into();
    let abbrs = culture_abbreviations(unit, culture);
    if abbrs.is_empty() && !culture.is_invariant() {
        trace!("no {culture} abbreviation for {unit}, using invariant");
        return culture_abbreviations(unit, &Culture::INVARIANT);
    }
    abbrs
}

/// The abbreviation used when formatting `unit` in `culture`.
pub fn get_default_abbreviation<U: Into<AnyUnit>>(unit: U, culture: &Culture) -> String {
    let unit = unit.into();
    get_abbreviations(unit, culture)
        .into_iter()
        .next()
        .unwrap_or_else(|| unit.name().to_owned())
}

/// Find the unit written as `abbreviation`, optionally restricted to one
/// quantity. Exact matches win over case-insensitive ones and the culture's
/// own abbreviations win over the invariant ones.
pub fn find_unit(
    abbreviation: &str,
    culture: &Culture,
    kind: Option<QuantityKind>,
) -> QuantityResult<AnyUnit> {
    let abbreviation = abbreviation.trim();
    let units = match kind {
        Some(kind) => kind.units(),
        None => all_units().collect(),
    };
    let mut cultures = vec![culture.clone()];
    if !culture.is_invariant() {
        cultures.push(Culture::INVARIANT);
    }

    let matchers: [fn(&str, &str) -> bool; 2] = [|a, b| a == b, |a, b| unicase::eq(a, b)];
    for is_match in matchers {
        for c in &cultures {
            let found = units
                .iter()
                .copied()
                .filter(|&u| {
                    culture_abbreviations(u, c)
                        .iter()
                        .any(|a| is_match(a, abbreviation))
                })
                .collect::<Vec<_>>();
            match found.len() {
                0 => continue,
                1 => return Ok(found[0]),
                _ => {
                    debug!("abbreviation {abbreviation:?} in {c} matches {found:?}");
                    return Err(QuantityError::AmbiguousAbbreviation {
                        abbreviation: abbreviation.to_owned(),
                        candidates: found,
                    });
                }
            }
        }
    }
    Err(QuantityError::UnknownAbbreviation {
        abbreviation: abbreviation.to_owned(),
        culture: culture.clone(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AccelerationUnit, MassFluxUnit, RotationalAccelerationUnit};

    #[test]
    fn test_invariant_defaults() {
        assert_eq!(
            get_default_abbreviation(MassFlowUnit::KilogramPerSecond, &Culture::INVARIANT),
            "kg/s"
        );
        assert_eq!(
            get_default_abbreviation(
                RotationalAccelerationUnit::DegreePerSecondSquared,
                &Culture::EN_US
            ),
            "°/s²"
        );
    }

    #[test]
    fn test_localized_with_fallback() {
        assert_eq!(
            get_default_abbreviation(MassUnit::Kilogram, &Culture::RU_RU),
            "кг"
        );
        // No Russian abbreviation for the pound.
        assert_eq!(
            get_default_abbreviation(MassUnit::Pound, &Culture::RU_RU),
            "lb"
        );
    }

    #[test]
    fn test_find_unit() {
        assert_eq!(
            find_unit("kg/s", &Culture::EN_US, None).unwrap(),
            MassFlowUnit::KilogramPerSecond.into()
        );
        assert_eq!(
            find_unit("кг/с", &Culture::RU_RU, None).unwrap(),
            MassFlowUnit::KilogramPerSecond.into()
        );
        assert_eq!(
            find_unit("KG/S", &Culture::EN_US, None).unwrap(),
            MassFlowUnit::KilogramPerSecond.into()
        );
        assert_eq!(
            find_unit("kg/(s·m²)", &Culture::EN_US, Some(QuantityKind::MassFlux)).unwrap(),
            MassFluxUnit::KilogramPerSecondPerSquareMeter.into()
        );
    }

    #[test]
    fn test_find_unit_ambiguous_without_kind() {
        let err = find_unit("g", &Culture::EN_US, None).unwrap_err();
        assert!(matches!(err, QuantityError::AmbiguousAbbreviation { .. }));
        assert_eq!(
            find_unit("g", &Culture::EN_US, Some(QuantityKind::Mass)).unwrap(),
            MassUnit::Gram.into()
        );
        assert_eq!(
            find_unit("g", &Culture::EN_US, Some(QuantityKind::Acceleration)).unwrap(),
            AccelerationUnit::StandardGravity.into()
        );
    }

    #[test]
    fn test_find_unit_unknown() {
        assert_eq!(
            find_unit("furlong", &Culture::EN_US, None).unwrap_err(),
            QuantityError::UnknownAbbreviation {
                abbreviation: "furlong".to_owned(),
                culture: Culture::EN_US,
            }
        );
    }

    #[test]
    fn test_register_abbreviation() {
        let culture = Culture::new("x-test");
        map_unit_to_abbreviation(LengthUnit::NauticalMile, &culture, &["sjømil"]);
        assert_eq!(
            get_default_abbreviation(LengthUnit::NauticalMile, &culture),
            "sjømil"
        );
        assert_eq!(
            find_unit("sjømil", &culture, Some(QuantityKind::Length)).unwrap(),
            LengthUnit::NauticalMile.into()
        );
        // Other cultures are unaffected.
        assert!(find_unit("sjømil", &Culture::EN_US, None).is_err());
    }

    #[test]
    fn test_register_ignores_culture_case() {
        let _ = env_logger::builder().is_test(true).try_init();
        map_unit_to_abbreviation(LengthUnit::Foot, &Culture::from("x-lab_ab"), &["fod"]);
        let culture = Culture::new("X-LAB-ab");
        assert_eq!(get_abbreviations(LengthUnit::Foot, &culture), vec!["fod".to_owned()]);
        assert_eq!(
            find_unit("fod", &Culture::from("x_lab_AB"), None).unwrap(),
            AnyUnit::from(LengthUnit::Foot)
        );
    }
}
