//! Memoized Chebyshev-distance shells on the integer 3D lattice.
//!
//! For a radius `d`, the *shell* is the set of offsets `(x, y, z)` with
//! `max(|x|, |y|, |z|) = d` — the surface of the axis-aligned cube of
//! half-width `d`. Outward spatial searches walk these shells in order of
//! increasing radius, many times per tick and usually with the same handful
//! of radii, so shells are generated once per radius and cached for the
//! process lifetime.
//!
//! # Example
//!
//! ```
//! use shell_cache::{shell_len, ShellCache};
//!
//! let cache = ShellCache::new();
//! let shell = cache.positions(2).unwrap();
//!
//! assert_eq!(shell.len(), shell_len(2));
//! assert!(shell.iter().all(|p| {
//!     p.x.abs().max(p.y.abs()).max(p.z.abs()) == 2
//! }));
//!
//! // Repeat lookups are O(1) and share the same allocation.
//! let again = cache.positions(2).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&shell, &again));
//! ```
//!
//! Callers that have no natural owner for a [`ShellCache`] can use the
//! process-wide instance behind [`shared`].

mod cache;
mod error;
mod shell;

pub use cache::{shared, ShellCache};
pub use error::ShellError;
pub use shell::{shell_len, MAX_RADIUS};

/// A lattice offset relative to the origin, one point of a shell.
pub type Offset = glam::I16Vec3;
