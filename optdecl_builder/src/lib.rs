//! Builder module for `optdecl`.
//! See the documentation root of the `optdecl` crate for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod model;

pub use api::*;
pub use error::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
