mod definition;
mod option;
mod value;

pub use definition::*;
pub use option::*;
pub use value::*;
