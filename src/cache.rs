//! Process-lifetime cache of generated shells.
//!
//! One mutex serializes every lookup and insertion. That makes a miss for
//! one radius block a concurrent hit for another, but generation is bounded
//! (O(d^2)) and the working set of radii is tiny, so the simple lock wins
//! over per-key schemes. Shells are stored as `Arc<[Offset]>`: the outer map
//! may reallocate as it grows, but the slices it hands out never move, so a
//! handle returned before a later insertion stays valid.

use std::sync::{Arc, Mutex, OnceLock};

use rustc_hash::FxHashMap;

use crate::shell::{self, MAX_RADIUS};
use crate::{Offset, ShellError};

/// Memoized shell lookup, shareable across threads.
///
/// Entries are permanent: the key space is the small set of radii callers
/// actually use, so there is no eviction.
#[derive(Default)]
pub struct ShellCache {
    shells: Mutex<FxHashMap<u16, Arc<[Offset]>>>,
}

impl ShellCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// All offsets at Chebyshev distance exactly `d`, in shell order.
    ///
    /// First call for a radius generates and publishes the shell; later
    /// calls clone the stored handle. The returned slice is immutable and
    /// stays valid for the process lifetime.
    pub fn positions(&self, d: u16) -> Result<Arc<[Offset]>, ShellError> {
        if d > MAX_RADIUS {
            return Err(ShellError::RadiusOutOfRange(d));
        }

        let mut shells = self.shells.lock().expect("shell cache mutex poisoned");
        if let Some(shell) = shells.get(&d) {
            return Ok(Arc::clone(shell));
        }

        let shell: Arc<[Offset]> = shell::generate(d).into();
        log::debug!("generated shell d={} ({} offsets)", d, shell.len());
        shells.insert(d, Arc::clone(&shell));
        Ok(shell)
    }

    /// Number of radii cached so far.
    pub fn len(&self) -> usize {
        self.shells.lock().expect("shell cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static SHARED: OnceLock<ShellCache> = OnceLock::new();

/// Process-wide cache instance, initialized on first use.
///
/// Prefer owning a [`ShellCache`] in whichever subsystem does shell lookups;
/// this exists for callers with no natural owner to hang one on.
pub fn shared() -> &'static ShellCache {
    SHARED.get_or_init(ShellCache::new)
}
