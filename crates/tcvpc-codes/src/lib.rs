// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error codes returned by the Tencent Cloud VPC API.
//!
//! The table is available in two shapes generated from the same source:
//!
//! * [`consts`]: flat `&str` constants named after the dotted code,
//!   upper-cased with `.` replaced by `_`.
//! * [`VpcErrorCode`]: one enum variant per code, with lookup,
//!   classification, and serde support keyed on the wire string.
//!
//! ```
//! use tcvpc_codes::{VpcErrorCode, consts};
//!
//! assert_eq!(consts::INVALIDPARAMETERVALUE_TOOLONG, "InvalidParameterValue.TooLong");
//! let code: VpcErrorCode = "InvalidParameterValue.TooLong".parse().unwrap();
//! assert_eq!(code, VpcErrorCode::InvalidParameterValueTooLong);
//! assert_eq!(code.sub_code(), Some("TooLong"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tcvpc_error::{ErrorCategory, SdkError};

/// Expands one table into the [`consts`] module and the [`VpcErrorCode`] enum.
macro_rules! vpc_error_codes {
    ($( $variant:ident => $name:ident = $code:literal, $desc:literal; )*) => {
        /// Error codes as flat string constants.
        pub mod consts {
            $(
                #[doc = $desc]
                pub const $name: &str = $code;
            )*
        }

        /// A known VPC API error code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum VpcErrorCode {
            $(
                #[doc = $desc]
                $variant,
            )*
        }

        impl VpcErrorCode {
            /// Every code, in table order.
            pub const ALL: &'static [VpcErrorCode] = &[$(Self::$variant,)*];

            /// Exact wire string returned by the API.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => consts::$name,)*
                }
            }

            /// Name of the matching constant in [`consts`].
            pub const fn const_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($name),)*
                }
            }

            /// Vendor description of the condition.
            pub const fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)*
                }
            }

            /// Exact, case-sensitive lookup by wire string.
            pub fn lookup(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

mod codes;

pub use codes::{VpcErrorCode, consts};

/// API version the table was published for.
pub const API_VERSION: &str = "2017-03-12";

/// Returned when a string is not a known VPC error code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown VPC error code: {0}")]
pub struct UnknownCode(pub String);

impl VpcErrorCode {
    /// Number of codes in the table.
    pub const COUNT: usize = Self::ALL.len();

    /// Part of the code before the `.`, or the whole code.
    pub fn base(&self) -> &'static str {
        let code = self.as_str();
        code.split_once('.').map_or(code, |(base, _)| base)
    }

    /// Part of the code after the `.`, if any.
    pub fn sub_code(&self) -> Option<&'static str> {
        self.as_str().split_once('.').map(|(_, sub)| sub)
    }

    /// Family of the base code.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::of_base(self.base())
    }

    /// The table entry for an error returned by the API, if it is one.
    pub fn of(err: &SdkError) -> Option<Self> {
        Self::lookup(&err.code)
    }

    /// Whether `err` carries exactly this code.
    pub fn matches(&self, err: &SdkError) -> bool {
        err.code == self.as_str()
    }

    /// Codes sharing the given base, in table order.
    pub fn by_base(base: &str) -> impl Iterator<Item = VpcErrorCode> + '_ {
        Self::ALL.iter().copied().filter(move |c| c.base() == base)
    }

    /// Codes whose base falls in `category`, in table order.
    pub fn by_category(category: ErrorCategory) -> impl Iterator<Item = VpcErrorCode> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |c| c.category() == category)
    }
}

impl fmt::Display for VpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VpcErrorCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl TryFrom<&str> for VpcErrorCode {
    type Error = UnknownCode;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<VpcErrorCode> for &'static str {
    fn from(code: VpcErrorCode) -> Self {
        code.as_str()
    }
}

impl PartialEq<str> for VpcErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for VpcErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for VpcErrorCode {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VpcErrorCode {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let s = String::deserialize(de)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
