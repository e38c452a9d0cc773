//! Language standard selection.

use std::fmt;
use std::str::FromStr;

/// The C++ standard whose keyword set the lexer recognizes.
///
/// Only affects keyword resolution: under C++03, `char16_t`, `char32_t`,
/// `constexpr`, `decltype`, `noexcept` and `nullptr` are plain identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CxxStandard {
    Cxx03,
    #[default]
    Cxx11,
}

impl CxxStandard {
    /// Whether C++11 keywords are reserved.
    #[inline]
    pub const fn has_cxx11_keywords(self) -> bool {
        matches!(self, CxxStandard::Cxx11)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CxxStandard::Cxx03 => "c++03",
            CxxStandard::Cxx11 => "c++11",
        }
    }
}

impl fmt::Display for CxxStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CxxStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c++03" | "c++98" | "cxx03" | "03" | "98" => Ok(CxxStandard::Cxx03),
            "c++11" | "c++14" | "c++17" | "c++20" | "cxx11" | "11" | "14" | "17" | "20" => {
                Ok(CxxStandard::Cxx11)
            }
            other => Err(format!("unknown C++ standard `{other}`")),
        }
    }
}
