//! `optdecl` declares the named options of a command line program.
//!
//! An option is a parameter given via `--name` (or `-n`) syntax.
//! Before any token is parsed, each option is declared as an [`InputOption`]:
//! * Its long name (ex: `verbose`) and, optionally, its short name (ex: `v`).
//! * Its [`ValueArity`]: no value, a required value, an optional value, or multiple values.
//! * Its default value, whose shape must fit the arity.
//! * A description and a value placeholder for help text.
//!
//! Declarations are validated eagerly, so an inconsistent option never becomes observable.
//! For example, an option which takes no value cannot have a default, and a multi-valued option defaults to a list.
//!
//! # Declaring options
//! Options may be declared from raw [`OptionFlags`], which are combined with bitwise or:
//! ```
//! use optdecl::{InputOption, OptionFlags, OptionValue};
//!
//! let dir = InputOption::new("dir", Some('d'), OptionFlags::MULTI)
//!     .unwrap()
//!     .help("Directories to search.")
//!     .with_value_name("PATH")
//!     .unwrap();
//!
//! // MULTI implies REQUIRED, and defaults to the empty list.
//! assert!(dir.is_value_required());
//! assert_eq!(dir.default_value(), &OptionValue::List(vec![]));
//!
//! // NONE cannot be combined with any other arity.
//! assert!(InputOption::new("dir", None, OptionFlags::NONE | OptionFlags::REQUIRED).is_err());
//! ```
//!
//! Or directly from a [`ValueArity`], where conflicting flags cannot be expressed at all:
//! ```
//! use optdecl::{InputOption, ValueArity};
//!
//! let level = InputOption::with_arity("level", None, ValueArity::Optional)
//!     .unwrap()
//!     .with_default(3)
//!     .unwrap();
//! assert!(level.is_value_optional());
//! ```
//!
//! # Collecting options
//! The options of one command are collected into an [`OptionDefinition`], which guarantees unique long and short names:
//! ```
//! use optdecl::{InputOption, OptionFlags, OptionSet, OptionError};
//!
//! let result = OptionSet::new()
//!     .add(InputOption::new("verbose", Some('v'), OptionFlags::NONE).unwrap())
//!     .add(InputOption::new("version", Some('v'), OptionFlags::NONE).unwrap())
//!     .build();
//!
//! assert_eq!(result.unwrap_err(), OptionError::DuplicateShortOption('v'));
//! ```
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events when flags are normalized and when a definition is built.
pub use optdecl_builder::*;
