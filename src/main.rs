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
use anyhow::{Context, Result};
use log::debug;
use quantities::{
    find_unit, get_abbreviations, AnyQuantity, AnyUnit, ComparisonType, Culture, Operator,
    QuantityKind,
};
use structopt::StructOpt;

/// Convert, combine and compare physical quantities.
///
/// Quantities are written as a number and a unit abbreviation, e.g. "20 kg/s".
/// Prefix the kind, as in "acceleration:1 g", when an abbreviation is shared
/// between quantities. Put negative quantities after `--`, as in
/// `dimensional convert -- "-40 °C" °F`.
#[derive(Debug, StructOpt)]
#[structopt(name = "dimensional")]
struct Opt {
    /// Culture used to read and write numbers and abbreviations.
    #[structopt(short, long, default_value = "en-US")]
    culture: String,

    /// Digits to show after the decimal separator.
    #[structopt(short, long, default_value = "2")]
    digits: usize,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Express a quantity in another unit of the same kind.
    Convert {
        quantity: String,
        /// Abbreviation or name of the target unit.
        unit: String,
    },

    /// Apply + - * or / to two quantities.
    Combine {
        left: String,
        operator: Operator,
        right: String,
    },

    /// Check whether two quantities are equal within a tolerance.
    Compare {
        left: String,
        right: String,

        /// Allowed difference, in the unit of the left quantity or as a
        /// fraction of it with --relative.
        #[structopt(short, long, default_value = "0")]
        tolerance: f64,

        #[structopt(short, long)]
        relative: bool,
    },

    /// List quantity kinds, or the units of one kind.
    Units { kind: Option<QuantityKind> },
}

fn read_quantity(text: &str, culture: &Culture) -> Result<AnyQuantity> {
    let quantity = match text.split_once(':') {
        Some((kind, rest)) => {
            let kind = kind
                .parse::<QuantityKind>()
                .with_context(|| format!("in quantity {text:?}"))?;
            AnyQuantity::parse(kind, rest, culture)
        }
        None => AnyQuantity::parse_any(text, culture),
    }
    .with_context(|| format!("reading quantity {text:?}"))?;
    debug!("read {text:?} as {quantity:?}");
    Ok(quantity)
}

fn read_unit(text: &str, kind: QuantityKind, culture: &Culture) -> Result<AnyUnit> {
    if let Some(unit) = kind.unit_named(text) {
        return Ok(unit);
    }
    find_unit(text, culture, Some(kind)).with_context(|| format!("reading {kind} unit {text:?}"))
}

fn list_units(kind: Option<QuantityKind>, culture: &Culture) {
    match kind {
        None => {
            for kind in QuantityKind::ALL {
                println!("{:<32} {}", kind.name(), kind.dimensions());
            }
        }
        Some(kind) => {
            for unit in kind.units() {
                println!(
                    "{}{:<40} {}",
                    if unit.is_base() { "*" } else { " " },
                    unit.name(),
                    get_abbreviations(unit, culture).join(", ")
                );
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let culture = Culture::from(opt.culture.as_str());
    debug!("using culture {culture}");

    match opt.command {
        Command::Convert { quantity, unit } => {
            let quantity = read_quantity(&quantity, &culture)?;
            let unit = read_unit(&unit, quantity.kind(), &culture)?;
            println!("{}", quantity.to_string_in(unit, &culture, opt.digits)?);
        }
        Command::Combine {
            left,
            operator,
            right,
        } => {
            let left = read_quantity(&left, &culture)?;
            let right = read_quantity(&right, &culture)?;
            let result = left.combine(operator, &right)?;
            println!(
                "{} ({})",
                result.to_string_in(result.unit(), &culture, opt.digits)?,
                result.kind()
            );
        }
        Command::Compare {
            left,
            right,
            tolerance,
            relative,
        } => {
            let comparison = if relative {
                ComparisonType::Relative
            } else {
                ComparisonType::Absolute
            };
            let left = read_quantity(&left, &culture)?;
            let right = read_quantity(&right, &culture)?;
            let equal = left.equals_with_tolerance(&right, tolerance, comparison)?;
            println!("{}", if equal { "equal" } else { "not equal" });
        }
        Command::Units { kind } => list_units(kind, &culture),
    }

    Ok(())
}
