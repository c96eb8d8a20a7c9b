//! Precomputed lookup tables for the Rabin rolling fingerprint.
//!
//! The fingerprint of a window is the residue of its byte string, read as a
//! polynomial over GF(2), modulo a fixed irreducible polynomial. Updating
//! that residue as the window slides needs two table lookups per byte: one
//! folds out the contribution of the byte leaving the window, the other
//! reduces the top byte after shifting the new byte in. Both tables depend
//! only on the window size and the fixed polynomial, so a built table is
//! immutable and can be shared across any number of concurrent chunkers.

/// The irreducible polynomial over GF(2) used for all fingerprints.
///
/// This is the degree-53 polynomial used by the go-ipfs Rabin chunker
/// lineage. Changing it (or [`FINGERPRINT_DEGREE`]) changes every
/// fingerprint and therefore the serialized record format; both are fixed.
pub const IRREDUCIBLE_POLY: u64 = 0x3DF305DFB2A805;

/// Degree of [`IRREDUCIBLE_POLY`]; fingerprints occupy this many bits.
pub const FINGERPRINT_DEGREE: u32 = 53;

/// Shift that exposes the 8 bits which overflow the degree after an
/// 8-bit shift-in, used to index the reduction table.
pub(crate) const TOP_SHIFT: u32 = FINGERPRINT_DEGREE - 8;

/// Degree of a polynomial over GF(2), or -1 for the zero polynomial.
const fn degree(pol: u64) -> i64 {
    64 - (pol.leading_zeros() as i64) - 1
}

/// Residue of `numerator` modulo `denominator` in GF(2) polynomial
/// arithmetic (carry-less long division).
fn modulus(mut numerator: u64, denominator: u64) -> u64 {
    debug_assert_ne!(denominator, 0, "division by zero");
    if numerator == 0 {
        return 0;
    }

    let denom_deg = degree(denominator);

    let mut deg_diff = degree(numerator) - denom_deg;
    while deg_diff >= 0 {
        numerator ^= denominator << deg_diff as u32;
        deg_diff = degree(numerator) - denom_deg;
    }

    numerator
}

/// Precomputed lookup tables for one window size.
///
/// Holds three derived constants:
///
/// - `out[b]`: the fingerprint contribution of byte `b` sitting
///   `window_size` positions back, i.e. `b·x^(8(w-1)) mod P`. XORing it
///   removes that byte from the rolling state in one operation.
/// - `modt[b]`: `(b·x^53 mod P) | b·x^53`. Indexed by the top byte before a
///   shift-in, the high half cancels the overflowing bits and the low half
///   adds their residue, so one XOR performs the modular reduction.
/// - `marker`: `x^(8w) mod P`, the contribution of a constant `0x01` byte
///   logically prefixed to every window. Folding it into the reported
///   fingerprint keeps an all-zero window from fingerprinting to zero,
///   which would otherwise satisfy any boundary mask at every position.
///
/// Building a table is a pure function of `window_size`; share one
/// read-only instance (e.g. behind an `Arc`) across concurrent chunkers.
#[derive(Debug, Clone)]
pub struct PolyTable {
    out: [u64; 256],
    modt: [u64; 256],
    marker: u64,
    window_size: usize,
}

impl PolyTable {
    /// Builds the lookup tables for the given window size.
    ///
    /// `window_size` must lie within the bounds enforced by
    /// [`crate::ChunkerConfig`].
    pub fn build(window_size: usize) -> Self {
        debug_assert!(
            (crate::config::MIN_WINDOW_SIZE..=crate::config::MAX_WINDOW_SIZE)
                .contains(&window_size),
            "window size out of range"
        );

        let mut out = [0u64; 256];
        for b in 0u64..256 {
            let mut h = modulus(b, IRREDUCIBLE_POLY);
            for _ in 0..window_size - 1 {
                h = modulus(h << 8, IRREDUCIBLE_POLY);
            }
            out[b as usize] = h;
        }

        let mut modt = [0u64; 256];
        for b in 0u64..256 {
            modt[b as usize] =
                modulus(b << FINGERPRINT_DEGREE, IRREDUCIBLE_POLY) | (b << FINGERPRINT_DEGREE);
        }

        let mut marker = 1u64;
        for _ in 0..window_size {
            marker = modulus(marker << 8, IRREDUCIBLE_POLY);
        }

        Self {
            out,
            modt,
            marker,
            window_size,
        }
    }

    /// Contribution of `byte` leaving the window.
    #[inline]
    pub(crate) fn leave(&self, byte: u8) -> u64 {
        self.out[byte as usize]
    }

    /// Reduction entry for the given top byte (must be < 256).
    #[inline]
    pub(crate) fn top_reduction(&self, top: u64) -> u64 {
        self.modt[top as usize]
    }

    /// The leading marker term folded into every reported fingerprint.
    #[inline]
    pub(crate) fn marker(&self) -> u64 {
        self.marker
    }

    /// The window size these tables were built for.
    pub fn window_size(&self) -> usize {
        self.window_size
    }
}
