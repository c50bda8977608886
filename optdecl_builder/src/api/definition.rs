use std::collections::HashMap;

use crate::api::{InputOption, OptionValue};
use crate::constant::LONG_PREFIX;
use crate::error::OptionError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The options of a command, as they are being declared.
///
/// ### Example
/// ```
/// # use optdecl_builder as optdecl;
/// use optdecl::{InputOption, OptionFlags, OptionSet};
///
/// let definition = OptionSet::new()
///     .add(InputOption::new("verbose", Some('v'), OptionFlags::NONE).unwrap())
///     .add(InputOption::new("dir", Some('d'), OptionFlags::MULTI).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.short_to_name('d'), Some("dir"));
/// ```
#[derive(Debug, Default)]
pub struct OptionSet {
    options: Vec<InputOption>,
}

impl OptionSet {
    /// Start an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the set.
    ///
    /// The order of options is kept, but does not otherwise matter.
    /// Name uniqueness is checked in [`OptionSet::build`].
    pub fn add(mut self, option: InputOption) -> Self {
        self.options.push(option);
        self
    }

    /// Finalize the set into a definition.
    /// Fails if a long name, or a short name, is repeated.
    pub fn build(self) -> Result<OptionDefinition, OptionError> {
        let mut names: HashMap<String, usize> = HashMap::default();
        let mut shorts: HashMap<char, usize> = HashMap::default();

        for (index, option) in self.options.iter().enumerate() {
            if names.insert(option.name().to_string(), index).is_some() {
                return Err(OptionError::DuplicateOption(option.name().to_string()));
            }

            if let Some(short) = option.short() {
                if shorts.insert(short, index).is_some() {
                    return Err(OptionError::DuplicateShortOption(short));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built option definition with {n} options ({s} short).",
                n = self.options.len(),
                s = shorts.len()
            );
        }

        Ok(OptionDefinition {
            options: self.options,
            names,
            shorts,
        })
    }
}

/// The validated options of a command: long and short names are unique.
#[derive(Debug, Clone)]
pub struct OptionDefinition {
    options: Vec<InputOption>,
    names: HashMap<String, usize>,
    shorts: HashMap<char, usize>,
}

impl OptionDefinition {
    /// The option by long name (a leading `--` is ignored).
    pub fn option(&self, name: &str) -> Option<&InputOption> {
        self.index(name).map(|i| &self.options[i])
    }

    /// Whether an option by this long name exists (a leading `--` is ignored).
    pub fn has_option(&self, name: &str) -> bool {
        self.index(name).is_some()
    }

    /// The option by short name.
    pub fn option_for_short(&self, short: char) -> Option<&InputOption> {
        self.shorts.get(&short).map(|i| &self.options[*i])
    }

    /// Whether an option by this short name exists.
    pub fn has_short(&self, short: char) -> bool {
        self.shorts.contains_key(&short)
    }

    /// The long name of the option by this short name.
    pub fn short_to_name(&self, short: char) -> Option<&str> {
        self.option_for_short(short).map(|o| o.name())
    }

    /// The options, in the order they were added.
    pub fn options(&self) -> impl Iterator<Item = &InputOption> {
        self.options.iter()
    }

    /// The number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The default value of every option which accepts a value, keyed by long name.
    pub fn defaults(&self) -> HashMap<String, OptionValue> {
        self.options
            .iter()
            .filter(|o| o.accepts_value())
            .map(|o| (o.name().to_string(), o.default_value().clone()))
            .collect()
    }

    /// Replace the default value of the named option (see [`InputOption::set_default_value`]).
    pub fn set_default(
        &mut self,
        name: &str,
        value: impl Into<OptionValue>,
    ) -> Result<(), OptionError> {
        match self.index(name) {
            Some(i) => self.options[i].set_default_value(value),
            None => Err(OptionError::UnknownOption(long(name).to_string())),
        }
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.names.get(long(name)).copied()
    }
}

fn long(name: &str) -> &str {
    name.strip_prefix(LONG_PREFIX).unwrap_or(name)
}
