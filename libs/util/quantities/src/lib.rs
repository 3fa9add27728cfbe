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

//! Physical quantities: a value paired with a unit, conversion between the
//! units of one quantity, and arithmetic across quantities.
//!
//! ```
//! use quantities::{Duration, Mass, MassFlow};
//!
//! let flow = MassFlow::from_kilograms_per_second(20.0);
//! let mass: Mass = flow * Duration::from_seconds(4.0);
//! assert!((mass.kilograms() - 80.0).abs() < 1e-12);
//! ```
#[macro_use]
mod generic;
#[macro_use]
mod operator;

pub(crate) mod abbreviation;
pub(crate) mod any;
pub(crate) mod comparison;
pub(crate) mod conversion;
pub(crate) mod culture;
pub(crate) mod dimension;
pub(crate) mod elapsed;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod kind;
pub(crate) mod parse;
pub(crate) mod quantity;
pub(crate) mod rules;
pub(crate) mod unit;

pub(crate) mod acceleration;
pub(crate) mod angle;
pub(crate) mod area;
pub(crate) mod brake_specific_fuel_consumption;
pub(crate) mod density;
pub(crate) mod duration;
pub(crate) mod dynamic_viscosity;
pub(crate) mod energy;
pub(crate) mod force;
pub(crate) mod kinematic_viscosity;
pub(crate) mod length;
pub(crate) mod mass;
pub(crate) mod mass_flow;
pub(crate) mod mass_flux;
pub(crate) mod molar_mass;
pub(crate) mod molarity;
pub(crate) mod power;
pub(crate) mod pressure;
pub(crate) mod rotational_acceleration;
pub(crate) mod rotational_speed;
pub(crate) mod specific_energy;
pub(crate) mod specific_weight;
pub(crate) mod speed;
pub(crate) mod temperature;
pub(crate) mod temperature_delta;
pub(crate) mod volume;
pub(crate) mod volume_flow;

pub use crate::{
    abbreviation::{
        find_unit, get_abbreviations, get_default_abbreviation, map_unit_to_abbreviation,
    },
    acceleration::{Acceleration, AccelerationUnit},
    angle::{Angle, AngleUnit},
    any::AnyQuantity,
    area::{Area, AreaUnit},
    brake_specific_fuel_consumption::{
        BrakeSpecificFuelConsumption, BrakeSpecificFuelConsumptionUnit,
    },
    comparison::{equals, ComparisonType},
    conversion::{convert, convert_any, from_base, to_base, Conversion},
    culture::{default_culture, set_default_culture, Culture},
    density::{Density, DensityUnit},
    dimension::Dimensions,
    duration::{Duration, DurationUnit},
    dynamic_viscosity::{DynamicViscosity, DynamicViscosityUnit},
    energy::{Energy, EnergyUnit},
    error::{QuantityError, QuantityResult},
    force::{Force, ForceUnit},
    format::{format_quantity, format_value, DEFAULT_DIGITS},
    kind::{all_units, AnyUnit, QuantityKind},
    kinematic_viscosity::{KinematicViscosity, KinematicViscosityUnit},
    length::{Length, LengthUnit},
    mass::{Mass, MassUnit},
    mass_flow::{MassFlow, MassFlowUnit},
    mass_flux::{MassFlux, MassFluxUnit},
    molar_mass::{MolarMass, MolarMassUnit},
    molarity::{Molarity, MolarityUnit},
    operator::{Combinator, Operator, OperatorRule, OperatorTable},
    parse::{parse_quantity, parse_unit},
    power::{Power, PowerUnit},
    pressure::{Pressure, PressureUnit},
    quantity::{sort_quantities, Quantity},
    rotational_acceleration::{RotationalAcceleration, RotationalAccelerationUnit},
    rotational_speed::{RotationalSpeed, RotationalSpeedUnit},
    specific_energy::{SpecificEnergy, SpecificEnergyUnit},
    specific_weight::{SpecificWeight, SpecificWeightUnit},
    speed::{Speed, SpeedUnit},
    temperature::{Temperature, TemperatureUnit},
    temperature_delta::{TemperatureDelta, TemperatureDeltaUnit},
    unit::Unit,
    volume::{Volume, VolumeUnit},
    volume_flow::{VolumeFlow, VolumeFlowUnit},
};

pub use approx;
pub use ordered_float;
