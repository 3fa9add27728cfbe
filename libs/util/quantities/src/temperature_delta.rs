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
    /// Difference between two temperatures.
    TemperatureDelta(TemperatureDeltaUnit) {
        dimensions: [0, 0, 0, 0, 1, 0, 0],
        base: Kelvin,
        units: {
            Kelvin(kelvins) = linear(1.0) ["∆K", "ΔK"],
            DegreeCelsius(degrees_celsius) = linear(1.0) ["∆°C", "Δ°C"],
            DegreeFahrenheit(degrees_fahrenheit) = linear(5.0 / 9.0) ["∆°F", "Δ°F"],
            DegreeRankine(degrees_rankine) = linear(5.0 / 9.0) ["∆°R", "Δ°R"],
        }
    }
}
supports_shift_ops!(TemperatureDelta);
supports_scalar_ops!(TemperatureDelta);
supports_cancellation!(TemperatureDelta);
supports_absdiffeq!(TemperatureDelta);
