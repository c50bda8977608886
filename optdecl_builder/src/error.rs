use thiserror::Error;

use crate::api::OptionValue;
use crate::model::OptionFlags;

/// Error for an invalid option declaration.
///
/// These are programmer errors: the declaration must be fixed, there is nothing to retry.
#[derive(Debug, Error, PartialEq)]
pub enum OptionError {
    /// A malformed declaration input (ex: an empty value name, or unknown flag bits).
    #[error("Invalid {subject} '{value}': {reason}.")]
    InvalidValue {
        /// What was being declared.
        subject: &'static str,
        /// The offending input, as given.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Mutually incompatible arity flags.
    #[error("Conflicting flags {flags:?}: {reason}.")]
    ConflictingFlags {
        /// The flags as requested.
        flags: OptionFlags,
        /// Which combination is forbidden.
        reason: &'static str,
    },

    /// A default value which does not fit the arity of the option.
    #[error("Invalid default value {value} for option '--{option}': {reason}.")]
    InvalidDefaultValue {
        /// The long name of the option.
        option: String,
        /// The rejected default.
        value: OptionValue,
        /// Why the default does not fit.
        reason: &'static str,
    },

    /// Two options of one definition share a long name.
    #[error("Cannot duplicate the option '--{0}'.")]
    DuplicateOption(String),

    /// Two options of one definition share a short name.
    #[error("Cannot duplicate the short option '-{0}'.")]
    DuplicateShortOption(char),

    /// No option by this long name exists in the definition.
    #[error("The option '--{0}' does not exist.")]
    UnknownOption(String),
}
