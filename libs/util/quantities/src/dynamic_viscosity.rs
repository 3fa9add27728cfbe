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
    DynamicViscosity(DynamicViscosityUnit) {
        dimensions: [-1, 1, -1, 0, 0, 0, 0],
        base: NewtonSecondPerMeterSquared,
        units: {
            NewtonSecondPerMeterSquared(newton_seconds_per_meter_squared) = linear(1.0) ["N·s/m²", "N*s/m²"],
            PascalSecond(pascal_seconds) = linear(1.0) ["Pa·s", "Pa*s"],
            Poise(poise) = linear(0.1) ["P"],
            Centipoise(centipoise) = linear(1e-3) ["cP"],
        }
    }
}
supports_shift_ops!(DynamicViscosity);
supports_scalar_ops!(DynamicViscosity);
supports_cancellation!(DynamicViscosity);
supports_absdiffeq!(DynamicViscosity);
