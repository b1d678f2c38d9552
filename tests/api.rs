//! Public API integration tests for shell-cache.

use std::sync::Arc;
use std::thread;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shell_cache::{shared, shell_len, Offset, ShellCache, ShellError, MAX_RADIUS};

fn chebyshev(p: Offset) -> i16 {
    p.x.abs().max(p.y.abs()).max(p.z.abs())
}

#[test]
fn test_positions_basic() {
    let cache = ShellCache::new();
    for d in 0u16..=5 {
        let shell = cache.positions(d).expect("in-range radius");
        assert_eq!(shell.len(), shell_len(d));
        assert!(shell.iter().all(|p| chebyshev(*p) == d as i16));
    }
    assert_eq!(cache.len(), 6);
}

#[test]
fn test_repeat_lookup_shares_allocation() {
    let cache = ShellCache::new();
    let first = cache.positions(3).unwrap();
    let second = cache.positions(3).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[test]
fn test_radius_two_scenario() {
    let cache = ShellCache::new();
    let shell = cache.positions(2).unwrap();

    assert_eq!(shell.len(), 98);
    assert!(shell.iter().all(|p| chebyshev(*p) == 2));
    assert!(shell.contains(&Offset::new(2, 0, 0)));
    assert!(shell.contains(&Offset::new(2, 2, 2)));
    assert!(shell.contains(&Offset::new(0, -2, 1)));
    assert!(!shell.contains(&Offset::new(1, 1, 1)));
    assert!(!shell.contains(&Offset::new(2, 2, 3)));
}

#[test]
fn test_radius_out_of_range() {
    let cache = ShellCache::new();
    assert_eq!(
        cache.positions(MAX_RADIUS + 1),
        Err(ShellError::RadiusOutOfRange(MAX_RADIUS + 1))
    );
    assert_eq!(
        cache.positions(u16::MAX),
        Err(ShellError::RadiusOutOfRange(u16::MAX))
    );
    // A rejected radius publishes nothing.
    assert!(cache.is_empty());
}

#[test]
fn test_shared_instance_is_stable() {
    let a = shared().positions(1).unwrap();
    let b = shared().positions(1).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.len(), 26);
}

#[test]
fn test_concurrent_mixed_radii() {
    const THREADS: u64 = 8;
    const REQUESTS: usize = 400;

    let cache = Arc::new(ShellCache::new());

    // A handle taken before other threads start inserting must keep its
    // content afterwards.
    let early = cache.positions(4).unwrap();
    let early_copy: Vec<Offset> = early.to_vec();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(9000 + t);
                for _ in 0..REQUESTS {
                    // Repeats and previously-unseen radii interleaved.
                    let d: u16 = rng.gen_range(0..32);
                    let shell = cache.positions(d).expect("in-range radius");
                    assert_eq!(shell.len(), shell_len(d));
                    assert!(shell.iter().all(|p| chebyshev(*p) == d as i16));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("worker thread panicked");
    }

    // No lost entries: every requested radius is now a hit on the same data.
    assert_eq!(cache.len(), 32);
    for d in 0u16..32 {
        let shell = cache.positions(d).unwrap();
        assert_eq!(shell.len(), shell_len(d));
    }

    // Reference stability across all those insertions.
    assert_eq!(early.to_vec(), early_copy);
    assert!(Arc::ptr_eq(&early, &cache.positions(4).unwrap()));
}
