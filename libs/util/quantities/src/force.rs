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
    Force(ForceUnit) {
        dimensions: [1, 1, -2, 0, 0, 0, 0],
        base: Newton,
        units: {
            Newton(newtons) = linear(1.0) ["N"],
            Kilonewton(kilonewtons) = linear(1e3) ["kN"],
            PoundForce(pounds_force) = linear(4.448_221_615_260_5) ["lbf"],
            KilogramForce(kilograms_force) = linear(9.806_65) ["kgf"],
            Dyne(dynes) = linear(1e-5) ["dyn"],
        }
    }
}
supports_shift_ops!(Force);
supports_scalar_ops!(Force);
supports_cancellation!(Force);
supports_absdiffeq!(Force);
