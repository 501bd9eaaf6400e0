//! Responsive class flattening for utility-first CSS.
//!
//! Shared classes plus per-breakpoint overrides become one space joined
//! class string with every override prefixed by its breakpoint:
//!
//! ```
//! use indexmap::IndexMap;
//! use twclsx::{twclsx, BreakPoint};
//!
//! let params = IndexMap::from([
//!     (BreakPoint::Sm, "px-2 py-1"),
//!     (BreakPoint::Md, "px-4"),
//! ]);
//! assert_eq!(twclsx("flex", &params), "flex sm:px-2 sm:py-1 md:px-4");
//! ```

pub mod args;
pub mod breakpoint;
pub mod config;
pub mod errors;
pub mod flattener;
pub mod format;

pub use args::ResolvedArgs;
pub use breakpoint::BreakPoint;
pub use config::{Config, Settings, DEFAULT_SETTINGS};
pub use errors::{Result, TwclsxError};
pub use flattener::{configure, flatten_value, prefix, twclsx, ResponsiveMap, Twclsx};
pub use format::format;
