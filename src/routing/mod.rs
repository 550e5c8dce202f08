//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (location string or request path)
//!     → history.rs (strip base, pick path or hash fragment)
//!     → router.rs (route lookup)
//!     → matcher.rs (evaluate exact path match)
//!     → Return: matched Route or NoMatch
//!
//! Route Compilation (at startup):
//!     Route[] (declaration order)
//!     → table.rs (unique names, unique paths)
//!     → Compile one matcher per route
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact path matching only, no parameters or regex
//! - Deterministic: same location always resolves to the same route
//! - First match wins (declaration order)

pub mod history;
pub mod matcher;
pub mod route;
pub mod router;
pub mod table;

pub use history::{History, HistoryMode};
pub use matcher::{ExactPathMatcher, MatchOptions, Matcher};
pub use route::{Route, STANDARD_ROUTES};
pub use router::{Resolution, Router};
pub use table::{RouteTable, RouteTableError};
