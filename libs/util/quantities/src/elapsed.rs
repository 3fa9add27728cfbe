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

//! Rates multiplied by raw elapsed time (`std::time::Duration` or
//! `chrono::Duration`) in either order. The raw value becomes a typed
//! `Duration` first, so the result is identical to the typed product.
use crate::*;

macro_rules! supports_elapsed_time {
    ($($Rate:ident => $Res:ident),+ $(,)?) => {
        $(
            supports_elapsed_time!(@one $Rate => $Res, std::time::Duration);
            supports_elapsed_time!(@one $Rate => $Res, chrono::Duration);
        )+
    };

    (@one $Rate:ident => $Res:ident, $Elapsed:ty) => {
        impl std::ops::Mul<$Elapsed> for $Rate {
            type Output = $Res;

            fn mul(self, elapsed: $Elapsed) -> $Res {
                self * Duration::from(elapsed)
            }
        }

        impl std::ops::Mul<$Rate> for $Elapsed {
            type Output = $Res;

            fn mul(self, rate: $Rate) -> $Res {
                Duration::from(self) * rate
            }
        }
    };
}

supports_elapsed_time! {
    MassFlow => Mass,
    VolumeFlow => Volume,
    Speed => Length,
    Acceleration => Speed,
    RotationalSpeed => Angle,
    RotationalAcceleration => RotationalSpeed,
    Power => Energy,
}
