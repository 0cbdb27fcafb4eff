//! The closed categorical attribute sets a laptop is described with, and
//! their canonical textual labels. Labels are the wire vocabulary for CSV
//! and serde intake; anything outside a set is rejected at parse time.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A textual attribute value outside its closed catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {attribute} value {value:?}")]
pub struct UnknownValue {
    pub attribute: &'static str,
    pub value: String,
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($attribute:literal) {
            $($variant:ident => $label:literal,)+
        }
        $(fallback $fallback:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok(Self::$variant),)+
                    _ => labeled_enum!(@unmatched $name, $attribute, value $(, $fallback)?),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(de::Error::custom)
            }
        }
    };
    (@unmatched $name:ident, $attribute:literal, $value:ident) => {
        Err(UnknownValue {
            attribute: $attribute,
            value: $value.to_owned(),
        })
    };
    (@unmatched $name:ident, $attribute:literal, $value:ident, $fallback:ident) => {
        Ok($name::$fallback)
    };
}

labeled_enum! {
    /// Installed memory capacity.
    Ram ("ram") {
        Gb8 => "8GB",
        Gb16 => "16GB",
        Gb32 => "32GB",
    }
}

labeled_enum! {
    /// Processor tier, pooling the Intel and AMD lines.
    Processor ("processor") {
        I3 => "Intel i3 / Ryzen 3",
        I5 => "Intel i5 / Ryzen 5",
        I7 => "Intel i7 / Ryzen 7",
        I9 => "Intel i9 / Ryzen 9",
    }
}

labeled_enum! {
    Storage ("storage") {
        Hdd => "HDD",
        Ssd256 => "SSD 256GB",
        Ssd512 => "SSD 512GB",
        Ssd1Tb => "SSD 1TB",
    }
}

labeled_enum! {
    Gpu ("gpu") {
        Integrated => "Integrated",
        Gtx => "GTX",
        Rtx => "RTX",
        HighEnd => "Dedicated High-End",
    }
}

labeled_enum! {
    /// Chassis weight class, heaviest to lightest.
    Portability ("portability") {
        Heavy => ">2.5kg",
        Midweight => "2-2.5kg",
        Light => "1.5-2kg",
        Ultralight => "<1.5kg",
    }
}

labeled_enum! {
    /// Battery endurance class.
    Battery ("battery") {
        Short => "<4h",
        Medium => "4-6h",
        Long => "6-8h",
        AllDay => ">8h",
    }
}

labeled_enum! {
    /// Manufacturer bucket. Unlisted brands parse to `Other`; the brand
    /// catalog defines a catch-all tier rather than rejecting input.
    Brand ("brand") {
        Apple => "Apple",
        Asus => "Asus",
        Lenovo => "Lenovo",
        Msi => "MSI",
        Hp => "HP",
        Dell => "Dell",
        Acer => "Acer",
        Other => "Other",
    }
    fallback Other
}

labeled_enum! {
    /// Intended primary workload.
    Usage ("usage") {
        Gaming => "Gaming",
        Design => "Design",
        Coding => "Coding",
        Office => "Office",
    }
}

impl Portability {
    /// Bucket a raw chassis weight into its class.
    pub fn from_kg(kg: f64) -> Self {
        if kg > 2.5 {
            Self::Heavy
        } else if kg >= 2.0 {
            Self::Midweight
        } else if kg >= 1.5 {
            Self::Light
        } else {
            Self::Ultralight
        }
    }
}

impl Battery {
    /// Bucket a raw endurance measurement into its class.
    pub fn from_hours(hours: f64) -> Self {
        if hours < 4.0 {
            Self::Short
        } else if hours <= 6.0 {
            Self::Medium
        } else if hours <= 8.0 {
            Self::Long
        } else {
            Self::AllDay
        }
    }
}
