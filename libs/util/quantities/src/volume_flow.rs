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
    VolumeFlow(VolumeFlowUnit) {
        dimensions: [3, 0, -1, 0, 0, 0, 0],
        base: CubicMeterPerSecond,
        units: {
            CubicMeterPerSecond(cubic_meters_per_second) = linear(1.0) ["m³/s", "m^3/s"],
            CubicMeterPerHour(cubic_meters_per_hour) = linear(1.0 / 3_600.0) ["m³/h", "m^3/h"],
            LiterPerSecond(liters_per_second) = linear(1e-3) ["L/s", "l/s"],
            LiterPerMinute(liters_per_minute) = linear(1e-3 / 60.0) ["L/min", "l/min"],
            CubicFootPerSecond(cubic_feet_per_second) = linear(0.028_316_846_592) ["ft³/s", "ft^3/s"],
            UsGallonPerMinute(us_gallons_per_minute) = linear(0.003_785_411_784 / 60.0) ["gal (U.S.)/min", "gpm"],
        }
    }
}
supports_shift_ops!(VolumeFlow);
supports_scalar_ops!(VolumeFlow);
supports_cancellation!(VolumeFlow);
supports_absdiffeq!(VolumeFlow);
