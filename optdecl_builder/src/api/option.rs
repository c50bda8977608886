use crate::api::OptionValue;
use crate::constant::*;
use crate::error::OptionError;
use crate::model::{Bound, OptionFlags, ValueArity};

/// The declaration of a named option (ex: `--verbose`, `-v`).
///
/// An `InputOption` is immutable once declared, apart from its default value.
/// Any combination of inputs that would make it internally inconsistent is rejected before it becomes observable.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOption {
    name: String,
    short: Option<char>,
    arity: ValueArity,
    description: Option<String>,
    default: OptionValue,
    value_name: String,
}

impl InputOption {
    /// Declare an option from raw arity flags.
    /// Unset flags mean [`OptionFlags::NONE`]; [`OptionFlags::MULTI`] implies [`OptionFlags::REQUIRED`].
    ///
    /// ### Example
    /// ```
    /// # use optdecl_builder as optdecl;
    /// use optdecl::{InputOption, OptionFlags};
    ///
    /// let option = InputOption::new("dir", Some('d'), OptionFlags::MULTI).unwrap();
    /// assert!(option.is_multi_valued());
    /// assert!(option.is_value_required());
    ///
    /// let conflict = InputOption::new("dir", None, OptionFlags::NONE | OptionFlags::MULTI);
    /// assert!(conflict.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        short: Option<char>,
        flags: OptionFlags,
    ) -> Result<Self, OptionError> {
        let arity = ValueArity::try_from(flags)?;
        Self::with_arity(name, short, arity)
    }

    /// Declare an option from an already normalized arity.
    ///
    /// ### Example
    /// ```
    /// # use optdecl_builder as optdecl;
    /// use optdecl::{InputOption, OptionValue, ValueArity};
    ///
    /// let option = InputOption::with_arity("--iterations", Some('i'), ValueArity::Required).unwrap();
    /// assert_eq!(option.name(), "iterations");
    /// assert_eq!(option.default_value(), &OptionValue::Null);
    /// ```
    pub fn with_arity(
        name: impl Into<String>,
        short: Option<char>,
        arity: ValueArity,
    ) -> Result<Self, OptionError> {
        let name = long_name(name.into())?;

        if let Some(short) = short {
            check_short(short)?;
        }

        let mut option = Self {
            name,
            short,
            arity,
            description: None,
            default: OptionValue::Null,
            value_name: DEFAULT_VALUE_NAME.to_string(),
        };

        if option.accepts_value() {
            option.set_default_value(OptionValue::Null)?;
        }

        Ok(option)
    }

    /// Document the description for this option.
    /// If repeated, only the final description will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Set the placeholder naming the value in usage examples (ex: `--dir=PATH`).
    /// Defaults to `"..."`.
    pub fn with_value_name(mut self, value_name: impl Into<String>) -> Result<Self, OptionError> {
        let value_name = value_name.into();

        if value_name.is_empty() {
            return Err(OptionError::InvalidValue {
                subject: "value name",
                value: value_name,
                reason: "must not be empty".to_string(),
            });
        }

        self.value_name = value_name;
        Ok(self)
    }

    /// Set the default value as part of the declaration.
    ///
    /// A `Null` default is accepted (and ignored) on an option which takes no value.
    /// Otherwise, this applies the same rules as [`InputOption::set_default_value`].
    ///
    /// ### Example
    /// ```
    /// # use optdecl_builder as optdecl;
    /// use optdecl::{InputOption, OptionFlags, OptionValue};
    ///
    /// let option = InputOption::new("dir", None, OptionFlags::MULTI)
    ///     .unwrap()
    ///     .with_default(vec!["/tmp"])
    ///     .unwrap();
    /// assert_eq!(option.default_value(), &OptionValue::from(vec!["/tmp"]));
    /// ```
    pub fn with_default(mut self, value: impl Into<OptionValue>) -> Result<Self, OptionError> {
        let value = value.into();

        if self.accepts_value() || !value.is_null() {
            self.set_default_value(value)?;
        }

        Ok(self)
    }

    /// Replace the default value.
    ///
    /// Fails if the option takes no value, or if a multi-valued option is given anything other than a `List`.
    /// A `Null` default on a multi-valued option becomes the empty list.
    pub fn set_default_value(&mut self, value: impl Into<OptionValue>) -> Result<(), OptionError> {
        let value = value.into();

        match self.arity {
            ValueArity::None => Err(OptionError::InvalidDefaultValue {
                option: self.name.clone(),
                value,
                reason: "the option does not accept a value",
            }),
            ValueArity::Multi => match value {
                OptionValue::Null => {
                    self.default = OptionValue::List(Vec::default());
                    Ok(())
                }
                OptionValue::List(_) => {
                    self.default = value;
                    Ok(())
                }
                _ => Err(OptionError::InvalidDefaultValue {
                    option: self.name.clone(),
                    value,
                    reason: "a multi-valued option requires a list default",
                }),
            },
            ValueArity::Required | ValueArity::Optional => {
                self.default = value;
                Ok(())
            }
        }
    }

    /// The default value (`Null` when none was set).
    pub fn default_value(&self) -> &OptionValue {
        &self.default
    }

    /// The placeholder naming the value in usage examples.
    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    /// The long name, without the `--` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short name, without the `-` prefix.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The description for help text.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The arity of this option.
    pub fn arity(&self) -> ValueArity {
        self.arity
    }

    /// The effective flags of this option (ex: `MULTI | REQUIRED` for a multi-valued option).
    pub fn flags(&self) -> OptionFlags {
        self.arity.flags()
    }

    /// The number of values a single occurrence of this option consumes.
    pub fn bound(&self) -> Bound {
        Bound::from(self.arity)
    }

    /// Whether this option takes a value at all.
    pub fn accepts_value(&self) -> bool {
        self.arity.accepts_value()
    }

    /// Whether this option must be given a value.
    pub fn is_value_required(&self) -> bool {
        self.arity.is_value_required()
    }

    /// Whether this option may be given a value.
    pub fn is_value_optional(&self) -> bool {
        self.arity.is_value_optional()
    }

    /// Whether this option collects multiple values.
    pub fn is_multi_valued(&self) -> bool {
        self.arity.is_multi_valued()
    }
}

fn long_name(name: String) -> Result<String, OptionError> {
    let stripped = name.strip_prefix(LONG_PREFIX).unwrap_or(&name);

    let reason = if stripped.chars().count() < MINIMUM_NAME_LENGTH {
        Some(format!("must be at least {MINIMUM_NAME_LENGTH} characters"))
    } else if stripped.starts_with('-') {
        Some("must not start with '-' after the '--' prefix".to_string())
    } else if stripped.chars().any(|c| c.is_whitespace() || c == '=') {
        Some("must not contain whitespace or '='".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(OptionError::InvalidValue {
            subject: "option name",
            value: name,
            reason,
        }),
        None => Ok(stripped.to_string()),
    }
}

fn check_short(short: char) -> Result<(), OptionError> {
    if short == '-' || short == '=' || short.is_whitespace() {
        return Err(OptionError::InvalidValue {
            subject: "short name",
            value: short.to_string(),
            reason: "must not be '-', '=', or whitespace".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn option() {
        let option = InputOption::new("flag", None, OptionFlags::empty()).unwrap();

        assert_eq!(option.name(), "flag");
        assert_eq!(option.short(), None);
        assert_eq!(option.description(), None);
        assert_eq!(option.arity(), ValueArity::None);
        assert_eq!(option.flags(), OptionFlags::NONE);
        assert_eq!(option.bound(), Bound::Range(0, 0));
        assert_eq!(option.default_value(), &OptionValue::Null);
        assert_eq!(option.value_name(), "...");
        assert!(!option.accepts_value());
    }

    #[test]
    fn option_short_help() {
        let option = InputOption::new("--flag", Some('f'), OptionFlags::REQUIRED)
            .unwrap()
            .help("--this will get discarded--")
            .help("help message");

        assert_eq!(option.name(), "flag");
        assert_eq!(option.short(), Some('f'));
        assert_eq!(option.description(), Some("help message"));
        assert_eq!(option.arity(), ValueArity::Required);
    }

    #[rstest]
    #[case(OptionFlags::empty(), false, false, false, false)]
    #[case(OptionFlags::NONE, false, false, false, false)]
    #[case(OptionFlags::REQUIRED, true, true, false, false)]
    #[case(OptionFlags::OPTIONAL, true, false, true, false)]
    #[case(OptionFlags::MULTI, true, true, false, true)]
    #[case(OptionFlags::MULTI | OptionFlags::REQUIRED, true, true, false, true)]
    fn option_arity(
        #[case] flags: OptionFlags,
        #[case] accepts: bool,
        #[case] required: bool,
        #[case] optional: bool,
        #[case] multi: bool,
    ) {
        let option = InputOption::new("name", None, flags).unwrap();

        assert_eq!(option.accepts_value(), accepts);
        assert_eq!(option.is_value_required(), required);
        assert_eq!(option.is_value_optional(), optional);
        assert_eq!(option.is_multi_valued(), multi);
    }

    #[test]
    fn option_multi_implies_required() {
        let option = InputOption::new("name", None, OptionFlags::MULTI).unwrap();

        assert_eq!(option.flags(), OptionFlags::MULTI | OptionFlags::REQUIRED);
        assert_eq!(option.bound(), Bound::Lower(1));
        assert_eq!(option.default_value(), &OptionValue::List(vec![]));
    }

    #[rstest]
    #[case(OptionFlags::NONE | OptionFlags::REQUIRED)]
    #[case(OptionFlags::NONE | OptionFlags::OPTIONAL)]
    #[case(OptionFlags::NONE | OptionFlags::MULTI)]
    #[case(OptionFlags::OPTIONAL | OptionFlags::MULTI)]
    fn option_conflicting_flags(#[case] flags: OptionFlags) {
        assert_matches!(
            InputOption::new("name", None, flags),
            Err(OptionError::ConflictingFlags { .. })
        );
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("--")]
    #[case("--a")]
    #[case("---ab")]
    #[case("a b")]
    #[case("a=b")]
    #[case("ab\t")]
    fn option_invalid_name(#[case] name: &str) {
        let error = InputOption::new(name, None, OptionFlags::NONE).unwrap_err();
        assert_matches!(error, OptionError::InvalidValue { subject: "option name", ref value, .. } if value == name);
    }

    #[rstest]
    #[case("ab", "ab")]
    #[case("--ab", "ab")]
    #[case("dry-run", "dry-run")]
    #[case("--dry-run", "dry-run")]
    fn option_valid_name(#[case] name: &str, #[case] expected: &str) {
        let option = InputOption::new(name, None, OptionFlags::NONE).unwrap();
        assert_eq!(option.name(), expected);
    }

    #[rstest]
    #[case('-')]
    #[case('=')]
    #[case(' ')]
    fn option_invalid_short(#[case] short: char) {
        assert_matches!(
            InputOption::new("name", Some(short), OptionFlags::NONE),
            Err(OptionError::InvalidValue {
                subject: "short name",
                ..
            })
        );
    }

    #[test]
    fn option_value_name() {
        let option = InputOption::new("name", None, OptionFlags::REQUIRED)
            .unwrap()
            .with_value_name("PATH")
            .unwrap();
        assert_eq!(option.value_name(), "PATH");
    }

    #[test]
    fn option_value_name_empty() {
        let error = InputOption::new("name", None, OptionFlags::REQUIRED)
            .unwrap()
            .with_value_name("")
            .unwrap_err();
        assert_matches!(
            error,
            OptionError::InvalidValue {
                subject: "value name",
                ..
            }
        );
        assert_contains!(error.to_string(), "must not be empty");
    }

    #[test]
    fn set_default_value_none() {
        let mut option = InputOption::new("name", None, OptionFlags::NONE).unwrap();

        assert_matches!(
            option.set_default_value(OptionValue::Null),
            Err(OptionError::InvalidDefaultValue { .. })
        );
        assert_matches!(
            option.set_default_value("x"),
            Err(OptionError::InvalidDefaultValue { .. })
        );
        assert_eq!(option.default_value(), &OptionValue::Null);
    }

    #[test]
    fn set_default_value_multi() {
        let mut option = InputOption::new("name", None, OptionFlags::MULTI).unwrap();

        option.set_default_value(vec!["a", "b"]).unwrap();
        assert_eq!(option.default_value(), &OptionValue::from(vec!["a", "b"]));

        option.set_default_value(OptionValue::Null).unwrap();
        assert_eq!(option.default_value(), &OptionValue::List(vec![]));

        let error = option.set_default_value(42).unwrap_err();
        assert_eq!(
            error,
            OptionError::InvalidDefaultValue {
                option: "name".to_string(),
                value: OptionValue::Int(42),
                reason: "a multi-valued option requires a list default",
            }
        );
        // The failed call leaves the previous default in place.
        assert_eq!(option.default_value(), &OptionValue::List(vec![]));
    }

    #[rstest]
    #[case(OptionFlags::REQUIRED)]
    #[case(OptionFlags::OPTIONAL)]
    fn set_default_value_single(#[case] flags: OptionFlags) {
        let mut option = InputOption::new("name", None, flags).unwrap();

        option.set_default_value(42).unwrap();
        assert_eq!(option.default_value(), &OptionValue::Int(42));

        option.set_default_value(vec![1, 2]).unwrap();
        assert_eq!(option.default_value(), &OptionValue::from(vec![1, 2]));

        option.set_default_value(OptionValue::Null).unwrap();
        assert_eq!(option.default_value(), &OptionValue::Null);
    }

    #[test]
    fn with_default_none() {
        let option = InputOption::new("name", None, OptionFlags::NONE)
            .unwrap()
            .with_default(OptionValue::Null)
            .unwrap();
        assert_eq!(option.default_value(), &OptionValue::Null);

        let error = InputOption::new("name", None, OptionFlags::NONE)
            .unwrap()
            .with_default(true)
            .unwrap_err();
        assert_contains!(error.to_string(), "does not accept a value");
    }

    #[test]
    fn with_default_multi() {
        let option = InputOption::new("name", None, OptionFlags::MULTI)
            .unwrap()
            .with_default(None::<String>)
            .unwrap();
        assert_eq!(option.default_value(), &OptionValue::List(vec![]));

        assert_matches!(
            InputOption::new("name", None, OptionFlags::MULTI)
                .unwrap()
                .with_default("a"),
            Err(OptionError::InvalidDefaultValue { .. })
        );
    }

    #[test]
    fn with_arity() {
        let option = InputOption::with_arity("name", Some('n'), ValueArity::Optional)
            .unwrap()
            .with_default("fallback")
            .unwrap();

        assert_eq!(option.arity(), ValueArity::Optional);
        assert_eq!(option.flags(), OptionFlags::OPTIONAL);
        assert_eq!(option.default_value(), &OptionValue::from("fallback"));
        assert_eq!(
            option,
            InputOption::new("--name", Some('n'), OptionFlags::OPTIONAL)
                .unwrap()
                .with_default("fallback")
                .unwrap()
        );
    }
}
