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
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::{borrow::Cow, fmt};

// Languages that write numbers with a decimal comma.
const COMMA_LANGUAGES: &[&str] = &[
    "bg", "cs", "da", "de", "es", "fi", "fr", "hr", "hu", "id", "it", "lt", "lv", "nb", "nl",
    "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk",
];

/// A locale name such as `en-US`; the empty name is the invariant culture.
/// Names are normalized on construction, so `en_us` and `en-US` are the same
/// culture.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Culture(Cow<'static, str>);

impl Culture {
    pub const INVARIANT: Culture = Culture(Cow::Borrowed(""));
    pub const EN_US: Culture = Culture(Cow::Borrowed("en-US"));
    pub const RU_RU: Culture = Culture(Cow::Borrowed("ru-RU"));
    pub const NB_NO: Culture = Culture(Cow::Borrowed("nb-NO"));

    pub fn new<S: Into<Cow<'static, str>>>(name: S) -> Self {
        let name = name.into();
        let normalized = normalize(&name);
        if normalized == name {
            Self(name)
        } else {
            Self(Cow::Owned(normalized))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// The language part of the name, lowercased: `ru` for `ru-RU`.
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    pub fn decimal_separator(&self) -> char {
        if COMMA_LANGUAGES.contains(&self.language().as_str()) {
            ','
        } else {
            '.'
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Culture {
    fn from(name: &str) -> Self {
        Self::new(name.to_owned())
    }
}

// Lowercase language, uppercase two letter region, title case script; parts
// joined with `-`.
fn normalize(name: &str) -> String {
    name.trim()
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_ascii_lowercase()
            } else if part.len() == 2 {
                part.to_ascii_uppercase()
            } else {
                let mut chars = part.chars();
                chars
                    .next()
                    .map(|first| {
                        first.to_ascii_uppercase().to_string()
                            + &chars.as_str().to_ascii_lowercase()
                    })
                    .unwrap_or_default()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

static DEFAULT_CULTURE: Lazy<RwLock<Culture>> = Lazy::new(|| RwLock::new(Culture::default()));

/// The culture used by `Display`, `FromStr` and `parse` when none is given.
pub fn default_culture() -> Culture {
    DEFAULT_CULTURE.read().clone()
}

pub fn set_default_culture(culture: Culture) {
    log::debug!("default culture set to {culture}");
    *DEFAULT_CULTURE.write() = culture;
}
