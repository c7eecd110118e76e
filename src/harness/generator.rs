//! Rotated ramp generation for randomized trials.
//!
//! The generator writes an ascending ramp into the buffer starting at a
//! chosen rotation offset and wrapping circularly, so the rotation boundary
//! sits exactly at that offset. With duplicates enabled the ramp steps by a
//! random amount in `0..INCREMENT_BOUND` (a zero step produces a duplicate);
//! otherwise it steps by exactly 1.
//!
//! The random source is injected by the caller. Tests pass a seeded
//! `Xoshiro256PlusPlus` and get identical sequences on every run.

use rand::Rng;

/// Exclusive upper bound on the per-element ramp increment when duplicates
/// are enabled. A draw of 0 repeats the previous value.
pub const INCREMENT_BOUND: u32 = 4;

/// Fill `buf` with a ramp of `len` values whose rotation boundary is at
/// `rotation % len`. The buffer is cleared and reused, so hot loops pay for
/// one allocation total.
///
/// # Panics
///
/// Panics if `len` is zero; the harness validates its config before getting
/// here.
pub fn generate_ramp_into<R: Rng + ?Sized>(
    buf: &mut Vec<u32>,
    len: usize,
    rotation: usize,
    duplicates: bool,
    rng: &mut R,
) {
    assert!(len > 0, "ramp length must be nonzero");

    buf.clear();
    buf.resize(len, 0);

    let start = rotation % len;
    let mut index = start;
    let mut value = 0u32;
    loop {
        buf[index] = value;
        value += if duplicates {
            rng.random_range(0..INCREMENT_BOUND)
        } else {
            1
        };
        index = (index + 1) % len;
        if index == start {
            break;
        }
    }
}

/// Allocate and fill a fresh ramp. Convenience wrapper around
/// [`generate_ramp_into`] for one-off use.
pub fn generate_ramp<R: Rng + ?Sized>(
    len: usize,
    rotation: usize,
    duplicates: bool,
    rng: &mut R,
) -> Vec<u32> {
    let mut buf = Vec::with_capacity(len);
    generate_ramp_into(&mut buf, len, rotation, duplicates, rng);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn unrotated_ramp_is_ascending() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let ramp = generate_ramp(16, 0, false, &mut rng);
        assert_eq!(ramp, (0..16).collect::<Vec<u32>>());
    }

    #[test]
    fn rotation_places_the_minimum() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let ramp = generate_ramp(10, 7, false, &mut rng);
        assert_eq!(ramp[7], 0);
        assert_eq!(ramp[6], 9);
        // Ascending on both sides of the seam.
        assert!(ramp[7..].windows(2).all(|w| w[0] < w[1]));
        assert!(ramp[..7].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rotation_wraps_modulo_len() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let a = generate_ramp(10, 3, false, &mut rng);
        let b = generate_ramp(10, 13, false, &mut rng);
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_ramps_never_descend_before_the_seam() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        for rotation in [0usize, 5, 31] {
            let ramp = generate_ramp(32, rotation, true, &mut rng);
            let seam = (rotation + 31) % 32;
            for i in 0..31 {
                let from = (rotation + i) % 32;
                let to = (from + 1) % 32;
                if from != seam {
                    assert!(ramp[from] <= ramp[to], "descent inside the ramp");
                }
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(7);
        assert_eq!(
            generate_ramp(64, 20, true, &mut a),
            generate_ramp(64, 20, true, &mut b)
        );
    }

    #[test]
    fn buffer_reuse_matches_fresh_allocation() {
        let mut a = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(3);
        let fresh = generate_ramp(24, 9, true, &mut a);
        let mut reused = vec![0xdead_beef_u32; 3];
        generate_ramp_into(&mut reused, 24, 9, true, &mut b);
        assert_eq!(fresh, reused);
    }
}
