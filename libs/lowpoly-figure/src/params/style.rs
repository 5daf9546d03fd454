//! Enumerated style choices.
//!
//! Each enumeration parses from its discriminant or its name. Anything
//! else is rejected with [`FigureError::UnsupportedStyle`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FigureError;

macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// Every variant in discriminant order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lowercase display name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = FigureError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(FigureError::unsupported($kind, value)),
                }
            }
        }

        impl FromStr for $name {
            type Err = FigureError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|style| style.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| FigureError::unsupported($kind, s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

style_enum! {
    /// Hair style. `Bald` produces no hair part at all.
    HairStyle, "hair" {
        Bald = 0, "bald",
        Short = 1, "short",
        Medium = 2, "medium",
        Long = 3, "long",
        Spiky = 4, "spiky",
        Slicked = 5, "slicked",
    }
}

style_enum! {
    /// Upper body garment.
    UpperClothing, "upper clothing" {
        /// Short sleeves, the forearm shows skin
        TShirt = 0, "tshirt",
        LongSleeve = 1, "longsleeve",
        Jacket = 2, "jacket",
    }
}

style_enum! {
    /// Lower body garment.
    LowerClothing, "lower clothing" {
        Pants = 0, "pants",
        /// The calf shows skin
        Shorts = 1, "shorts",
    }
}

impl Default for HairStyle {
    fn default() -> Self {
        HairStyle::Short
    }
}

impl Default for UpperClothing {
    fn default() -> Self {
        UpperClothing::TShirt
    }
}

impl Default for LowerClothing {
    fn default() -> Self {
        LowerClothing::Pants
    }
}
