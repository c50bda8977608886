/// The default value of an option.
///
/// The shape of a valid default depends on the option's arity:
/// `Null` for options without a value, a `List` for multi-valued options, anything otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionValue {
    /// No value.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A string value.
    Str(String),
    /// A sequence of values (possibly empty).
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// Whether this is a `List`.
    pub fn is_list(&self) -> bool {
        matches!(self, OptionValue::List(_))
    }

    /// The items, if this is a `List`.
    pub fn as_list(&self) -> Option<&[OptionValue]> {
        match self {
            OptionValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The string, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Null => write!(f, "null"),
            OptionValue::Bool(value) => write!(f, "{value}"),
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Float(value) => write!(f, "{value}"),
            OptionValue::Str(value) => write!(f, "{value:?}"),
            OptionValue::List(items) => {
                write!(f, "[")?;

                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{item}")?;
                }

                write!(f, "]")
            }
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OptionValue {
                fn from(value: $t) -> Self {
                    OptionValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Float(f64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => OptionValue::Null,
        }
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(value: Vec<T>) -> Self {
        OptionValue::List(value.into_iter().map(|item| item.into()).collect())
    }
}

impl<T: Into<OptionValue>, const N: usize> From<[T; N]> for OptionValue {
    fn from(value: [T; N]) -> Self {
        OptionValue::List(value.into_iter().map(|item| item.into()).collect())
    }
}
