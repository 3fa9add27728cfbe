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
    Mass(MassUnit) {
        dimensions: [0, 1, 0, 0, 0, 0, 0],
        base: Kilogram,
        units: {
            Kilogram(kilograms) = linear(1.0) ["kg"],
            Gram(grams) = linear(1e-3) ["g"],
            Milligram(milligrams) = linear(1e-6) ["mg"],
            Microgram(micrograms) = linear(1e-9) ["µg", "ug"],
            Tonne(tonnes) = linear(1e3) ["t"],
            Pound(pounds) = linear(0.453_592_37) ["lb", "lbs", "lbm"],
            Ounce(ounces) = linear(0.028_349_523_125) ["oz"],
            ShortTon(short_tons) = linear(907.184_74) ["short tn", "ton"],
            Slug(slugs) = linear(14.593_902_937_206) ["slug"],
        }
    }
}
supports_shift_ops!(Mass);
supports_scalar_ops!(Mass);
supports_cancellation!(Mass);
supports_absdiffeq!(Mass);
