//! Hamming distance over hex-encoded fingerprints.

use phash::Fingerprint;

use crate::types::DistanceError;

/// Bit distance between two equal-length fingerprints.
///
/// XORs each corresponding pair of hex digits and counts the set bits,
/// summed across all digit positions. Because this is the Hamming distance
/// over the underlying bit strings it is a true metric: `d(a, a) == 0`, it
/// is symmetric, and it satisfies the triangle inequality.
///
/// Same-version fingerprints always share a length; a mismatch means the
/// index holds data from another schema version and is reported as
/// [`DistanceError::LengthMismatch`] rather than guessed around.
pub fn hamming_distance(a: &Fingerprint, b: &Fingerprint) -> Result<u32, DistanceError> {
    if a.digit_count() != b.digit_count() {
        return Err(DistanceError::LengthMismatch {
            left: a.digit_count(),
            right: b.digit_count(),
        });
    }

    let bits = a
        .as_str()
        .bytes()
        .zip(b.as_str().bytes())
        .map(|(x, y)| (nibble(x) ^ nibble(y)).count_ones())
        .sum();
    Ok(bits)
}

// Fingerprint guarantees lowercase hex, so the two ranges are exhaustive.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'a' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(hex: &str) -> Fingerprint {
        Fingerprint::parse(hex).expect("valid fingerprint")
    }

    #[test]
    fn self_distance_is_zero() {
        let a = fp("8f373714acfcf4d0");
        assert_eq!(hamming_distance(&a, &a), Ok(0));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = fp("8f373714acfcf4d0");
        let b = fp("8f373f14acfcc4d2");
        assert_eq!(hamming_distance(&a, &b), hamming_distance(&b, &a));
    }

    #[test]
    fn counts_bits_per_digit() {
        // 0 ^ f = four bits per digit across 16 digits.
        let zeros = fp("0000000000000000");
        let ones = fp("ffffffffffffffff");
        assert_eq!(hamming_distance(&zeros, &ones), Ok(64));
    }

    #[test]
    fn single_digit_difference() {
        let a = fp("0000000000000000");
        let b = fp("0000000000000003"); // two low bits set
        assert_eq!(hamming_distance(&a, &b), Ok(2));
    }

    #[test]
    fn mixed_digit_differences_sum() {
        let a = fp("00f0");
        let b = fp("0f00");
        // Two digit positions differ by a full nibble each.
        assert_eq!(hamming_distance(&a, &b), Ok(8));
    }

    #[test]
    fn length_mismatch_is_surfaced() {
        let short = fp("abc");
        let long = fp("8f373714acfcf4d0");
        assert_eq!(
            hamming_distance(&short, &long),
            Err(DistanceError::LengthMismatch { left: 3, right: 16 })
        );
    }

    #[test]
    fn triangle_inequality_holds_on_samples() {
        let a = fp("8f373714acfcf4d0");
        let b = fp("8f373f14acfcc4d2");
        let c = fp("0f373f10acfcc4d2");
        let ab = hamming_distance(&a, &b).expect("ab");
        let bc = hamming_distance(&b, &c).expect("bc");
        let ac = hamming_distance(&a, &c).expect("ac");
        assert!(ac <= ab + bc);
    }
}
