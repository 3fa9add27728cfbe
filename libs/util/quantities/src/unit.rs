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
use crate::{AnyUnit, Conversion, QuantityError, QuantityKind};
use std::{fmt::Debug, hash::Hash};

/// The set of interchangeable units for a single quantity.
///
/// Every quantity has one enum implementing this trait. Each enumerant carries a
/// fixed conversion rule relative to `BASE`, which all conversions pivot through.
pub trait Unit:
    Copy
    + Debug
    + Eq
    + Hash
    + Send
    + Sync
    + Into<AnyUnit>
    + TryFrom<AnyUnit, Error = QuantityError>
    + 'static
{
    const KIND: QuantityKind;
    const BASE: Self;
    const ALL: &'static [Self];

    /// Singular, CamelCase name, e.g. `KilogramPerSecond`.
    fn name(self) -> &'static str;

    fn conversion(self) -> Conversion;

    /// Invariant-culture abbreviations; the first one is used for formatting.
    fn abbreviations(self) -> &'static [&'static str];

    fn is_base(self) -> bool {
        self == Self::BASE
    }
}
