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
use std::{fmt, str::FromStr};

macro_rules! quantity_kinds {
    ($($Kind:ident($UnitEnum:ident)),+ $(,)?) => {
        /// Every quantity type known to the registry.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum QuantityKind {
            $($Kind,)+
        }

        impl QuantityKind {
            pub const ALL: &'static [QuantityKind] = &[$(QuantityKind::$Kind,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$Kind => stringify!($Kind),)+
                }
            }

            pub fn dimensions(self) -> Dimensions {
                match self {
                    $(Self::$Kind => <$Kind as Quantity>::DIMENSIONS,)+
                }
            }

            pub fn base_unit(self) -> AnyUnit {
                match self {
                    $(Self::$Kind => AnyUnit::$Kind(<$UnitEnum as Unit>::BASE),)+
                }
            }

            pub fn units(self) -> Vec<AnyUnit> {
                match self {
                    $(
                        Self::$Kind => <$UnitEnum as Unit>::ALL
                            .iter()
                            .map(|&u| AnyUnit::$Kind(u))
                            .collect(),
                    )+
                }
            }
        }

        /// A unit of any quantity, selected at runtime.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum AnyUnit {
            $($Kind($UnitEnum),)+
        }

        impl AnyUnit {
            pub fn kind(self) -> QuantityKind {
                match self {
                    $(Self::$Kind(_) => QuantityKind::$Kind,)+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$Kind(u) => u.name(),)+
                }
            }

            pub fn conversion(self) -> Conversion {
                match self {
                    $(Self::$Kind(u) => u.conversion(),)+
                }
            }

            pub fn abbreviations(self) -> &'static [&'static str] {
                match self {
                    $(Self::$Kind(u) => u.abbreviations(),)+
                }
            }

            pub fn is_base(self) -> bool {
                match self {
                    $(Self::$Kind(u) => u.is_base(),)+
                }
            }
        }
    };
}

quantity_kinds! {
    Length(LengthUnit),
    Area(AreaUnit),
    Volume(VolumeUnit),
    Mass(MassUnit),
    Duration(DurationUnit),
    Speed(SpeedUnit),
    Acceleration(AccelerationUnit),
    Angle(AngleUnit),
    RotationalSpeed(RotationalSpeedUnit),
    RotationalAcceleration(RotationalAccelerationUnit),
    Force(ForceUnit),
    Pressure(PressureUnit),
    Energy(EnergyUnit),
    Power(PowerUnit),
    MassFlow(MassFlowUnit),
    MassFlux(MassFluxUnit),
    Density(DensityUnit),
    VolumeFlow(VolumeFlowUnit),
    SpecificEnergy(SpecificEnergyUnit),
    BrakeSpecificFuelConsumption(BrakeSpecificFuelConsumptionUnit),
    KinematicViscosity(KinematicViscosityUnit),
    DynamicViscosity(DynamicViscosityUnit),
    SpecificWeight(SpecificWeightUnit),
    Temperature(TemperatureUnit),
    TemperatureDelta(TemperatureDeltaUnit),
    Molarity(MolarityUnit),
    MolarMass(MolarMassUnit),
}

impl QuantityKind {
    /// Find a unit of this kind by its CamelCase name, ignoring case.
    pub fn unit_named(self, name: &str) -> Option<AnyUnit> {
        self.units()
            .into_iter()
            .find(|u| unicase::eq_ascii(u.name(), name))
    }

    /// Quantities whose units are all linear support same-type addition.
    pub fn is_additive(self) -> bool {
        self.units().iter().all(|u| u.conversion().is_linear())
    }
}

/// Every unit of every quantity, in registry order.
pub fn all_units() -> impl Iterator<Item = AnyUnit> {
    QuantityKind::ALL.iter().flat_map(|k| k.units())
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = QuantityError;

    // Accepts `MassFlow`, `mass_flow` and `mass-flow`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>();
        Self::ALL
            .iter()
            .copied()
            .find(|k| unicase::eq_ascii(k.name(), &squashed))
            .ok_or_else(|| QuantityError::parse(s, "unknown quantity"))
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}::{}", self.kind(), self.name())
    }
}
