//! # props-map
//!
//! A string-keyed property store for hierarchical configuration, with placeholder
//! expansion and shell-like argument splitting.
//!
//! ## Overview
//!
//! This crate models the `key=value` property files used by embedded build
//! tooling to describe boards and platforms. A [`PropertyMap`] is a flat map
//! from dotted keys to string values; hierarchy is derived on demand by
//! peeling dotted prefix segments, values may reference each other through
//! `{key}` placeholders, and keys may carry OS suffixes that select
//! platform-conditional values at load time.
//!
//! ## Key Features
//!
//! - **Property files**: one `key=value` pair per line, `#` comments, CRLF
//!   tolerant, with precise malformed-line errors
//! - **OS-conditional keys**: `.linux` / `.freebsd` / `.windows` / `.macosx`
//!   suffixes resolved against an explicit [`HostOs`], so any platform's view
//!   can be parsed on any host
//! - **Placeholder expansion**: iterative `{key}` substitution with a bounded
//!   pass budget, plus a cleaner that scrubs unresolved placeholders
//! - **Sub-tree extraction**: derive nested maps from dotted keys, one
//!   segment at a time
//! - **Quoted-string splitting**: a small tokenizer for shell-like argument
//!   lists with caller-chosen quote characters
//! - **Serde integration**: property maps serialize as plain string maps
//!
//! ## Quick Start
//!
//! ```rust
//! use props_map::{HostOs, load_from_slice};
//!
//! let lines = [
//!     "# board definitions",
//!     "menu.cpu=Processor",
//!     "uno.name=Arduino Uno",
//!     "uno.build.mcu=atmega328p",
//! ];
//!
//! let props = load_from_slice(&lines, HostOs::Linux)?;
//! assert_eq!(props.get("menu.cpu"), Some("Processor"));
//!
//! let uno = props.sub_tree("uno");
//! assert_eq!(uno.get("name"), Some("Arduino Uno"));
//! assert_eq!(uno.sub_tree("build").get("mcu"), Some("atmega328p"));
//! # Ok::<(), props_map::PropsError>(())
//! ```
//!
//! Files on disk are read with [`load`] (or [`safe_load`], which treats a
//! missing file as an empty map).
//!
//! ## Placeholder Expansion
//!
//! ```rust
//! use props_map::{PropertyMap, delete_unexpanded_props};
//!
//! let mut props = PropertyMap::new();
//! props.set("build.mcu", "atmega328p");
//! props.set("compiler.flags", "-mmcu={build.mcu}");
//!
//! let cmd = props.expand("avr-gcc {compiler.flags} {extra.flags} main.c");
//! assert_eq!(cmd, "avr-gcc -mmcu=atmega328p {extra.flags} main.c");
//!
//! // Scrub placeholders that did not resolve.
//! assert_eq!(
//!     delete_unexpanded_props(&cmd),
//!     "avr-gcc -mmcu=atmega328p  main.c"
//! );
//! ```
//!
//! ## OS-Conditional Keys
//!
//! ```rust
//! use props_map::{HostOs, load_from_slice};
//!
//! let lines = [
//!     "tools.path.linux=/usr/bin",
//!     "tools.path.windows=C:\\bin",
//! ];
//!
//! let props = load_from_slice(&lines, HostOs::Linux)?;
//! assert_eq!(props.get("tools.path"), Some("/usr/bin"));
//! // Other platforms' keys keep their suffix and stay out of the way.
//! assert_eq!(props.get("tools.path.windows"), Some("C:\\bin"));
//! # Ok::<(), props_map::PropsError>(())
//! ```
//!
//! Use [`HostOs::current`] to pick the running platform's view.
//!
//! ## Splitting Command Strings
//!
//! Expanded command strings can be split into argv-like tokens:
//!
//! ```rust
//! use props_map::split_quoted_string;
//!
//! let tokens = split_quoted_string(
//!     r#"avr-gcc "-DUSB_PRODUCT=Arduino Uno" -Os main.c"#,
//!     "\"",
//!     false,
//! )?;
//! assert_eq!(tokens.as_slice(), ["avr-gcc", "-DUSB_PRODUCT=Arduino Uno", "-Os", "main.c"]);
//! # Ok::<(), props_map::PropsError>(())
//! ```
//!
//! ## Error Handling
//!
//! Errors carry the failing location:
//!
//! ```rust
//! use props_map::{TokenizeError, split_quoted_string};
//!
//! let result = split_quoted_string("'this is' a 'test of quoting", "\"'", true);
//! match result {
//!     Err(TokenizeError::UnterminatedQuote { position }) => {
//!         println!(
//!             "unterminated quote at line {}, column {}",
//!             position.line, position.column
//!         );
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Expansion and cleaning never fail: unresolved placeholders are left in
//! place (or scrubbed by the cleaner), never raised as errors.

pub mod error;
pub mod expand;
pub mod loader;
pub mod map;
pub mod tokenizer;

// Re-export main types and functions
pub use error::{LoadError, PropsError, TokenizeError};
pub use expand::delete_unexpanded_props;
pub use loader::{HostOs, load, load_from_slice, safe_load};
pub use map::{FirstLevelMap, PropertyMap, merge_first_level_maps};
pub use tokenizer::{TokenList, split_quoted_string};

// Re-export position type used by tokenizer errors
pub use error::Position;
