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
quantity! {
    /// Fuel mass burned per unit of work produced.
    BrakeSpecificFuelConsumption(BrakeSpecificFuelConsumptionUnit) {
        dimensions: [-2, 0, 2, 0, 0, 0, 0],
        base: KilogramPerJoule,
        units: {
            KilogramPerJoule(kilograms_per_joule) = linear(1.0) ["kg/J"],
            GramPerKiloWattHour(grams_per_kilo_watt_hour) = linear(1.0 / 3.6e9) ["g/kWh"],
            PoundPerMechanicalHorsepowerHour(pounds_per_mechanical_horsepower_hour) = linear(1.689_659_410_672e-7) ["lb/hph"],
        }
    }
}
supports_shift_ops!(BrakeSpecificFuelConsumption);
supports_scalar_ops!(BrakeSpecificFuelConsumption);
supports_cancellation!(BrakeSpecificFuelConsumption);
supports_absdiffeq!(BrakeSpecificFuelConsumption);
