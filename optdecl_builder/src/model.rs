use bitflags::bitflags;

use crate::error::OptionError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

bitflags! {
    /// The raw arity flags of an option, combined with bitwise or.
    ///
    /// Flags are only the declaration surface: [`ValueArity::try_from`] normalizes them into a single arity.
    pub struct OptionFlags: u32 {
        /// The option does not accept a value (ex: `--verbose`).
        const NONE = 0b0001;
        /// The option requires a value (ex: `--iterations=5`).
        const REQUIRED = 0b0010;
        /// The option may or may not take a value (ex: `--yell` or `--yell=loud`).
        const OPTIONAL = 0b0100;
        /// The option accepts multiple values (ex: `--dir=/foo --dir=/bar`).
        const MULTI = 0b1000;
    }
}

impl TryFrom<u32> for OptionFlags {
    type Error = OptionError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        OptionFlags::from_bits(raw).ok_or_else(|| OptionError::InvalidValue {
            subject: "flags",
            value: raw.to_string(),
            reason: format!("unknown flag bits {:#b}", raw & !OptionFlags::all().bits()),
        })
    }
}

/// The number of values an option accepts.
///
/// Each variant corresponds to exactly one legal combination of [`OptionFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueArity {
    /// No value.
    None,
    /// Exactly one value.
    Required,
    /// Zero or one value.
    Optional,
    /// Any number of occurrences, each with a value.
    Multi,
}

impl ValueArity {
    /// The effective flags of this arity.
    /// `Multi` always carries `REQUIRED` alongside it.
    pub fn flags(&self) -> OptionFlags {
        match self {
            ValueArity::None => OptionFlags::NONE,
            ValueArity::Required => OptionFlags::REQUIRED,
            ValueArity::Optional => OptionFlags::OPTIONAL,
            ValueArity::Multi => OptionFlags::MULTI | OptionFlags::REQUIRED,
        }
    }

    /// Whether a value may be given to the option at all.
    pub fn accepts_value(&self) -> bool {
        !self.flags().contains(OptionFlags::NONE)
    }

    /// Whether a value must be given whenever the option is used.
    pub fn is_value_required(&self) -> bool {
        self.flags().contains(OptionFlags::REQUIRED)
    }

    /// Whether the value may be left out when the option is used.
    pub fn is_value_optional(&self) -> bool {
        self.flags().contains(OptionFlags::OPTIONAL)
    }

    /// Whether the option collects a sequence of values.
    pub fn is_multi_valued(&self) -> bool {
        self.flags().contains(OptionFlags::MULTI)
    }
}

impl TryFrom<OptionFlags> for ValueArity {
    type Error = OptionError;

    fn try_from(flags: OptionFlags) -> Result<Self, Self::Error> {
        let valued = OptionFlags::REQUIRED | OptionFlags::OPTIONAL | OptionFlags::MULTI;

        if flags.contains(OptionFlags::NONE) && flags.intersects(valued) {
            return Err(OptionError::ConflictingFlags {
                flags,
                reason: "NONE cannot be combined with REQUIRED, OPTIONAL, or MULTI",
            });
        }

        if flags.contains(OptionFlags::OPTIONAL | OptionFlags::MULTI) {
            return Err(OptionError::ConflictingFlags {
                flags,
                reason: "OPTIONAL cannot be combined with MULTI",
            });
        }

        if flags.contains(OptionFlags::OPTIONAL | OptionFlags::REQUIRED) {
            return Err(OptionError::ConflictingFlags {
                flags,
                reason: "OPTIONAL cannot be combined with REQUIRED",
            });
        }

        let arity = if flags.contains(OptionFlags::MULTI) {
            ValueArity::Multi
        } else if flags.contains(OptionFlags::REQUIRED) {
            ValueArity::Required
        } else if flags.contains(OptionFlags::OPTIONAL) {
            ValueArity::Optional
        } else {
            ValueArity::None
        };

        #[cfg(feature = "tracing_debug")]
        {
            if flags != arity.flags() {
                debug!(
                    "Flags {flags:?} normalized to {effective:?} ({arity}).",
                    effective = arity.flags()
                );
            }
        }

        Ok(arity)
    }
}

impl std::fmt::Display for ValueArity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The number of values a single occurrence of an option consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Between `min` and `max` values (inclusive).
    Range(u8, u8),
    /// At least `min` values.
    Lower(u8),
}

impl From<ValueArity> for Bound {
    fn from(value: ValueArity) -> Self {
        match value {
            ValueArity::None => Bound::Range(0, 0),
            ValueArity::Required => Bound::Range(1, 1),
            ValueArity::Optional => Bound::Range(0, 1),
            ValueArity::Multi => Bound::Lower(1),
        }
    }
}
