//! Scriptnum codec
//!
//! Scriptnums are stored as little-endian, sign-and-magnitude, which means
//! that the highest bit of the last byte of the stack-item determines the
//! sign. The remaining bits are the magnitude.
//!
//! There is no size limit here; numbers of any length decode and encode.
//! Limits on operand size are applied by the interpreter.
//!
//! Zero encodes to the empty array. Other encodings of zero (`[0x00]`,
//! `[0x80]`, `[0x00,0x80]`, ...) decode to zero as well but are different
//! byte-arrays.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

const SIGN_BIT: u8 = 0x80;

/// Interprets `bytes` as a scriptnum
pub fn decode(bytes: &[u8]) -> BigInt {
    let (last, rest) = match bytes.split_last() {
        Some(split) => split,
        None => return BigInt::zero(),
    };

    let mut magnitude = Vec::with_capacity(bytes.len());
    magnitude.extend_from_slice(rest);
    magnitude.push(last & !SIGN_BIT);

    let magnitude = BigUint::from_bytes_le(&magnitude);
    let sign = if last & SIGN_BIT != 0 { Sign::Minus } else { Sign::Plus };

    // from_biguint turns a negative zero into NoSign
    BigInt::from_biguint(sign, magnitude)
}

/// Returns the minimal scriptnum encoding of `n`
pub fn encode(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }

    let negative = n.sign() == Sign::Minus;
    let mut result = n.magnitude().to_bytes_le();

    // to_bytes_le of a non-zero magnitude is never empty and has no
    // trailing zeroes, so the last byte is the most significant
    let top = result.len() - 1;
    if result[top] & SIGN_BIT != 0 {
        // magnitude needs the top bit; sign goes in an extra byte
        result.push(if negative { SIGN_BIT } else { 0 });
    } else if negative {
        result[top] |= SIGN_BIT;
    }
    result
}

/// Decodes `bytes` if the result fits in an i64
///
/// Values that don't fit return None; they are never truncated
pub fn decode_i64(bytes: &[u8]) -> Option<i64> {
    // 8 bytes hold 63 bits of magnitude; anything beyond that can still
    // be in range if it is padding, so defer to the full decoder
    if bytes.len() > 8 {
        return decode(bytes).to_i64();
    }

    let (last, _) = match bytes.split_last() {
        Some(split) => split,
        None => return Some(0),
    };

    let signed_magnitude = bytes.iter().enumerate().fold(0u64,
        |sum, (n, byte)| sum | ((*byte as u64) << (n * 8))
    );
    let sign_bit_mask = (SIGN_BIT as u64) << ((bytes.len() - 1) * 8);

    Some(
        if last & SIGN_BIT != 0 {
            -((signed_magnitude ^ sign_bit_mask) as i64)
        }
        else {
            signed_magnitude as i64
        }
    )
}

/// Returns true if `bytes` is exactly what `encode` produces for its value
///
/// This rejects negative zero and any superfluous padding bytes
pub fn is_minimal(bytes: &[u8]) -> bool {
    let last = match bytes.last() {
        Some(&last) => last,
        None => return true,
    };

    if last & !SIGN_BIT != 0 {
        return true;
    }

    // the last byte only carries the sign; that is only needed
    // if the byte before it uses its top bit
    bytes.len() > 1 && bytes[bytes.len() - 2] & SIGN_BIT != 0
}


#[cfg(test)]
mod test {

    use super::*;
    use num_bigint::BigInt;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_decode() {
        assert_eq!(BigInt::from(0), decode(&[]));
        assert_eq!(BigInt::from(0), decode(&[0x80]));
        assert_eq!(BigInt::from(0), decode(&[0x00, 0x80]));
        assert_eq!(BigInt::from(1), decode(&[0x01]));
        assert_eq!(BigInt::from(-1), decode(&[0x81]));
        assert_eq!(BigInt::from(-259), decode(&[0x03, 0x81]));
        assert_eq!(BigInt::from(128), decode(&[0x80, 0x00]));
        assert_eq!(BigInt::from(-128), decode(&[0x80, 0x80]));

        // padded
        assert_eq!(BigInt::from(1), decode(&[0x01, 0x00, 0x00]));
        assert_eq!(BigInt::from(-1), decode(&[0x01, 0x00, 0x80]));
    }

    #[test]
    fn test_encode() {
        assert_eq!(Vec::<u8>::new(), encode(&BigInt::from(0)));
        assert_eq!(vec![0x01], encode(&BigInt::from(1)));
        assert_eq!(vec![0x81], encode(&BigInt::from(-1)));
        assert_eq!(vec![0x7f], encode(&BigInt::from(127)));
        assert_eq!(vec![0x80, 0x00], encode(&BigInt::from(128)));
        assert_eq!(vec![0x80, 0x80], encode(&BigInt::from(-128)));
        assert_eq!(vec![0xff, 0x00], encode(&BigInt::from(255)));
        assert_eq!(vec![0x03, 0x81], encode(&BigInt::from(-259)));
        assert_eq!(vec![0xff, 0xff, 0xff, 0x7f], encode(&BigInt::from(0x7fffffff)));
        assert_eq!(vec![0x00, 0x00, 0x00, 0x80, 0x80], encode(&BigInt::from(-0x80000000i64)));
    }

    #[test]
    fn test_encode_beyond_64_bits() {
        // 2^64: eight zero bytes and a 0x01
        let n = big("18446744073709551616");
        let mut expected = vec![0u8; 8];
        expected.push(0x01);
        assert_eq!(expected, encode(&n));

        expected[8] = 0x81;
        assert_eq!(expected, encode(&-n));
    }

    #[test]
    fn test_encode_decode() {
        for n in -1000i64..1000 {
            let n = BigInt::from(n);
            assert_eq!(n, decode(&encode(&n)));
        }

        let edges = [
            "9223372036854775807",
            "-9223372036854775808",
            "170141183460469231731687303715884105727",
            "-340282366920938463463374607431768211456",
            "123456789012345678901234567890123456789012345678901234567890",
        ];
        for s in edges.iter() {
            let n = big(s);
            assert_eq!(n, decode(&encode(&n)));
        }
    }

    #[test]
    fn test_decode_i64() {
        assert_eq!(Some(0), decode_i64(&[]));
        assert_eq!(Some(0), decode_i64(&[0x80]));
        assert_eq!(Some(-259), decode_i64(&[0x03, 0x81]));
        assert_eq!(Some(i64::max_value()), decode_i64(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]));
        assert_eq!(Some(-i64::max_value()), decode_i64(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]));

        // i64::MIN needs nine bytes in sign-and-magnitude
        assert_eq!(Some(i64::min_value()), decode_i64(&encode(&BigInt::from(i64::min_value()))));

        // padded but small
        assert_eq!(Some(5), decode_i64(&[0x05, 0, 0, 0, 0, 0, 0, 0, 0, 0]));

        // 2^64
        assert_eq!(None, decode_i64(&[0, 0, 0, 0, 0, 0, 0, 0, 0x01]));

        for n in -1000i64..1000 {
            assert_eq!(Some(n), decode_i64(&encode(&BigInt::from(n))));
        }
    }

    #[test]
    fn test_is_minimal() {
        assert!(is_minimal(&[]));
        assert!(is_minimal(&[0x01]));
        assert!(is_minimal(&[0x81]));
        assert!(is_minimal(&[0x80, 0x00]));
        assert!(is_minimal(&[0x80, 0x80]));

        assert!(!is_minimal(&[0x00]));
        assert!(!is_minimal(&[0x80]));
        assert!(!is_minimal(&[0x01, 0x00]));
        assert!(!is_minimal(&[0x01, 0x80]));
        assert!(!is_minimal(&[0x7f, 0x00]));

        for n in -1000i64..1000 {
            assert!(is_minimal(&encode(&BigInt::from(n))));
        }
    }
}
