//! Shell enumeration: all lattice offsets at Chebyshev distance exactly `d`.
//!
//! A shell is the surface of the cube `[-d, d]^3`. Enumeration covers it in
//! three disjoint sweeps so no point is emitted twice:
//!
//! 1. side faces `x = ±d` for `|y| < d`, with the `z = ±d` borders;
//! 2. front/back faces `z = ±d` for `|y| < d`, borders excluded (pass 1
//!    already emitted them);
//! 3. the full top and bottom caps `y = ±d`.
//!
//! Every point with `max(|x|,|y|,|z|) = d` lands in exactly one sweep:
//! `|y| = d` is the cap sweep; otherwise `|x| = d` is the side sweep;
//! otherwise `|z| = d` must hold and it is the front/back sweep.


use crate::Offset;

/// Largest supported radius. Offsets store `i16` components, so a shell
/// beyond this cannot be represented.
pub const MAX_RADIUS: u16 = i16::MAX as u16;

/// Number of points in the shell of radius `d`: `(2d+1)^3 - (2d-1)^3`,
/// i.e. `24d^2 + 2` for `d >= 1`, and 1 for `d = 0`.
#[inline]
pub const fn shell_len(d: u16) -> usize {
    if d == 0 {
        1
    } else {
        24 * (d as usize) * (d as usize) + 2
    }
}

/// The radius-1 shell in its hand-tuned consumption order: face centers
/// first (most axis-aligned), then edge midpoints, then corners. Consumers
/// walking neighbors outward see the closest offsets first.
///
/// Downstream heuristics may depend on this exact sequence; keep it stable.
const UNIT_SHELL: [Offset; 26] = [
    // 6 face centers
    Offset::new(0, 1, 0),  // top
    Offset::new(0, 0, 1),  // back
    Offset::new(-1, 0, 0), // left
    Offset::new(1, 0, 0),  // right
    Offset::new(0, 0, -1), // front
    Offset::new(0, -1, 0), // bottom
    // 12 edge midpoints
    Offset::new(-1, 0, 1),  // back left
    Offset::new(1, 0, 1),   // back right
    Offset::new(-1, 0, -1), // front left
    Offset::new(1, 0, -1),  // front right
    Offset::new(-1, -1, 0), // bottom left
    Offset::new(1, -1, 0),  // bottom right
    Offset::new(0, -1, 1),  // bottom back
    Offset::new(0, -1, -1), // bottom front
    Offset::new(-1, 1, 0),  // top left
    Offset::new(1, 1, 0),   // top right
    Offset::new(0, 1, 1),   // top back
    Offset::new(0, 1, -1),  // top front
    // 8 corners
    Offset::new(-1, 1, 1),   // top back-left
    Offset::new(1, 1, 1),    // top back-right
    Offset::new(-1, 1, -1),  // top front-left
    Offset::new(1, 1, -1),   // top front-right
    Offset::new(-1, -1, 1),  // bottom back-left
    Offset::new(1, -1, 1),   // bottom back-right
    Offset::new(-1, -1, -1), // bottom front-left
    Offset::new(1, -1, -1),  // bottom front-right
];

/// Enumerate the shell of radius `d`.
///
/// Caller guarantees `d <= MAX_RADIUS`. Radii 0 and 1 come from literal
/// tables; larger radii use the sweep described in the module docs, walking
/// y outward from 0 so near-plane offsets come first.
pub(crate) fn generate(d: u16) -> Vec<Offset> {
    debug_assert!(d <= MAX_RADIUS);
    let mut c = Vec::with_capacity(shell_len(d));

    if d == 0 {
        c.push(Offset::ZERO);
        return c;
    }
    if d == 1 {
        c.extend_from_slice(&UNIT_SHELL);
        return c;
    }

    let d = d as i16;
    for y in 0..d {
        // Side faces x = ±d, z borders included.
        for z in -d..=d {
            c.push(Offset::new(d, y, z));
            c.push(Offset::new(-d, y, z));
            if y != 0 {
                c.push(Offset::new(d, -y, z));
                c.push(Offset::new(-d, -y, z));
            }
        }
        // Front/back faces z = ±d; x = ±d was emitted by the side sweep.
        for x in -d + 1..=d - 1 {
            c.push(Offset::new(x, y, d));
            c.push(Offset::new(x, y, -d));
            if y != 0 {
                c.push(Offset::new(x, -y, d));
                c.push(Offset::new(x, -y, -d));
            }
        }
    }

    // Top and bottom caps y = ±d, borders included.
    for x in -d..=d {
        for z in -d..=d {
            c.push(Offset::new(x, -d, z));
            c.push(Offset::new(x, d, z));
        }
    }

    debug_assert_eq!(c.len(), shell_len(d as u16));
    c
}
