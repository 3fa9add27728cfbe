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
use crate::*;

// Mass flow is stored in grams per second while every other mass-bearing
// quantity uses kilograms, hence the scale on each mass flow rule.
operator_rules! {
    Length * Length => Area;
    Area * Length => Volume;
    Length * Area => Volume;
    Area / Length => Length;
    Volume / Area => Length;
    Volume / Length => Area;

    Length / Duration => Speed;
    Speed * Duration => Length;
    Duration * Speed => Length;
    Length / Speed => Duration;
    Speed / Duration => Acceleration;
    Acceleration * Duration => Speed;
    Duration * Acceleration => Speed;

    Mass * Acceleration => Force;
    Acceleration * Mass => Force;
    Force / Mass => Acceleration;
    Force / Acceleration => Mass;
    Force / Area => Pressure;
    Pressure * Area => Force;
    Area * Pressure => Force;

    Force * Length => Energy;
    Power * Duration => Energy;
    Duration * Power => Energy;
    Energy / Duration => Power;
    Energy / Power => Duration;
    Energy / Mass => SpecificEnergy;
    SpecificEnergy * Mass => Energy;
    Mass * SpecificEnergy => Energy;

    MassFlow * Duration => Mass, scale = 1e-3;
    Duration * MassFlow => Mass, scale = 1e-3;
    Mass / Duration => MassFlow, scale = 1e3;
    MassFlow * SpecificEnergy => Power, scale = 1e-3;
    Power / MassFlow => SpecificEnergy, scale = 1e3;
    MassFlow / BrakeSpecificFuelConsumption => Power, scale = 1e-3;
    MassFlow / Power => BrakeSpecificFuelConsumption, scale = 1e-3;
    MassFlow / Area => MassFlux, scale = 1e-3;
    MassFlow / MassFlux => Area, scale = 1e-3;
    MassFlow / VolumeFlow => Density, scale = 1e-3;
    MassFlow / Density => VolumeFlow, scale = 1e-3;
    Density * VolumeFlow => MassFlow, scale = 1e3;
    VolumeFlow * Density => MassFlow, scale = 1e3;

    Density * Volume => Mass;
    Volume * Density => Mass;
    Density * Speed => MassFlux;
    Density * KinematicViscosity => DynamicViscosity;
    DynamicViscosity / Density => KinematicViscosity;
    Density * Acceleration => SpecificWeight;
    Density / MolarMass => Molarity;
    Molarity * MolarMass => Density;
    MolarMass * Molarity => Density;

    Volume / Duration => VolumeFlow;
    VolumeFlow / Area => Speed;
    Speed * Area => VolumeFlow;
    VolumeFlow * Duration => Volume;
    Duration * VolumeFlow => Volume;

    Angle / Duration => RotationalSpeed;
    RotationalSpeed * Duration => Angle;
    Duration * RotationalSpeed => Angle;
    RotationalSpeed / Duration => RotationalAcceleration;
    RotationalAcceleration * Duration => RotationalSpeed;
    Duration * RotationalAcceleration => RotationalSpeed;

    Temperature - Temperature => TemperatureDelta;
    Temperature + TemperatureDelta => Temperature;
    Temperature - TemperatureDelta => Temperature;
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rules_are_unique() {
        let mut keys = RULES
            .iter()
            .map(|r| (r.left(), r.operator(), r.right()))
            .collect::<Vec<_>>();
        let n = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), n);
    }

    #[test]
    fn test_geometry() {
        let a = Length::from_meters(2.0) * Length::from_feet(10.0);
        assert_relative_eq!(a.square_meters(), 6.096, epsilon = 1e-12);
        let v = a * Length::from_meters(0.5);
        assert_relative_eq!(v.cubic_meters(), 3.048, epsilon = 1e-12);
        assert_relative_eq!((v / a).meters(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_force_and_pressure() {
        let f = Mass::from_kilograms(10.0) * Acceleration::from_standard_gravity(1.0);
        assert_relative_eq!(f.newtons(), 98.0665, epsilon = 1e-9);
        let p = f / Area::from_square_meters(2.0);
        assert_relative_eq!(p.pascals(), 49.03325, epsilon = 1e-9);
        assert_relative_eq!((p * Area::from_square_meters(2.0)).newtons(), 98.0665, epsilon = 1e-9);
    }

    #[test]
    fn test_energy_and_power() {
        let e = Power::from_kilowatts(2.0) * Duration::from_hours(1.0);
        assert_relative_eq!(e.kilowatt_hours(), 2.0, epsilon = 1e-12);
        let t = e / Power::from_watts(500.0);
        assert_relative_eq!(t.hours(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation() {
        let w = Angle::from_revolutions(1.0) / Duration::from_seconds(60.0);
        assert_relative_eq!(w.revolutions_per_minute(), 1.0, epsilon = 1e-12);
        let alpha = RotationalSpeed::from_revolutions_per_minute(60.0) / Duration::from_seconds(1.0);
        assert_relative_eq!(alpha.revolutions_per_minute_per_second(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_differences() {
        let boiling = Temperature::from_degrees_celsius(100.0);
        let freezing = Temperature::from_degrees_fahrenheit(32.0);
        let delta = boiling - freezing;
        assert_relative_eq!(delta.kelvins(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(delta.degrees_fahrenheit(), 180.0, epsilon = 1e-9);

        let warmer = freezing + TemperatureDelta::from_degrees_celsius(25.0);
        assert_relative_eq!(warmer.degrees_celsius(), 25.0, epsilon = 1e-9);
        let cooler = warmer - TemperatureDelta::from_degrees_fahrenheit(45.0);
        assert_relative_eq!(cooler.degrees_celsius(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_molarity() {
        let water = Density::from_kilograms_per_cubic_meter(1_000.0);
        let molar_mass = MolarMass::from_grams_per_mole(18.015);
        let c = water / molar_mass;
        assert_relative_eq!(c.moles_per_liter(), 55.509, epsilon = 1e-3);
        assert_relative_eq!(
            (c * molar_mass).kilograms_per_cubic_meter(),
            1_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        let v = Length::from_meters(1.0) / Duration::zero();
        assert!(v.meters_per_second().is_infinite());
        let v = Length::zero() / Duration::zero();
        assert!(v.meters_per_second().is_nan());
    }
}
