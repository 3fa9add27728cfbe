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
use std::f64::consts::PI;

quantity! {
    /// Plane angle. Radians are dimensionless, so angles share their
    /// dimensions with plain ratios.
    Angle(AngleUnit) {
        dimensions: [0, 0, 0, 0, 0, 0, 0],
        base: Radian,
        units: {
            Radian(radians) = linear(1.0) ["rad"],
            Degree(degrees) = linear(PI / 180.0) ["°", "deg"],
            ArcMinute(arcminutes) = linear(PI / 10_800.0) ["′", "arcmin"],
            ArcSecond(arcseconds) = linear(PI / 648_000.0) ["″", "arcsec"],
            Gradian(gradians) = linear(PI / 200.0) ["grad", "gon"],
            Revolution(revolutions) = linear(2.0 * PI) ["r", "rev"],
        }
    }
}
supports_shift_ops!(Angle);
supports_scalar_ops!(Angle);
supports_cancellation!(Angle);
supports_absdiffeq!(Angle);

impl Angle {
    pub fn sin(&self) -> f64 {
        self.radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians().cos()
    }

    pub fn tan(&self) -> f64 {
        self.radians().tan()
    }
}
