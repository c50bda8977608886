pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const MINIMUM_NAME_LENGTH: usize = 2;
pub(crate) const DEFAULT_VALUE_NAME: &str = "...";
