//! Galois Field GF(256) arithmetic for Shamir's Secret Sharing
//!
//! Uses the irreducible polynomial x^8 + x^4 + x^3 + x + 1 (0x11B),
//! the same field used by AES. Multiplication is computed bitwise rather
//! than through log/exp tables.

use crate::ShamirError;

/// Low byte of the reduction polynomial, applied when the high bit overflows
const REDUCTION: u8 = 0x1B;

/// Order of the multiplicative group minus one: a^254 = a^-1
const INVERSE_EXPONENT: u32 = 254;

/// Add two elements in GF(256) (XOR)
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two elements in GF(256) (same as add in characteristic 2)
#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two elements in GF(256)
///
/// Russian-peasant multiplication: eight shift steps, reducing by 0x1B
/// whenever the shifted multiplicand overflows bit 7.
#[inline]
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

/// Raise `base` to `exponent` by square-and-multiply (LSB first)
pub fn gf_pow(mut base: u8, mut exponent: u32) -> u8 {
    let mut result = 1u8;
    while exponent != 0 {
        if exponent & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exponent >>= 1;
    }
    result
}

/// Compute the inverse of an element in GF(256)
pub fn gf_inv(a: u8) -> Result<u8, ShamirError> {
    if a == 0 {
        return Err(ShamirError::ZeroInverse);
    }
    Ok(gf_pow(a, INVERSE_EXPONENT))
}

/// Divide two elements in GF(256)
pub fn gf_div(a: u8, b: u8) -> Result<u8, ShamirError> {
    Ok(gf_mul(a, gf_inv(b)?))
}

/// Evaluate a polynomial at a given x value
/// coefficients[0] is the constant term, coefficients[n-1] is the highest degree
pub fn poly_eval(coefficients: &[u8], x: u8) -> u8 {
    let Some((&constant, higher)) = coefficients.split_first() else {
        return 0;
    };

    let mut result = constant;
    let mut x_pow = 1u8;
    for &coef in higher {
        // x^d from x^(d-1), no repeated exponentiation
        x_pow = gf_mul(x_pow, x);
        result = gf_add(result, gf_mul(coef, x_pow));
    }
    result
}

/// Lagrange basis values at x = 0 for the given x-coordinates
///
/// weight[j] = prod_{m != j} x_m / prod_{m != j} (x_j - x_m)
///
/// The x-coordinates must be pairwise distinct; a repeated value makes a
/// denominator zero and fails with [`ShamirError::ZeroInverse`].
pub fn lagrange_weights(xs: &[u8]) -> Result<Vec<u8>, ShamirError> {
    xs.iter()
        .enumerate()
        .map(|(j, &xj)| {
            let mut numerator = 1u8;
            let mut denominator = 1u8;

            for (m, &xm) in xs.iter().enumerate() {
                if m != j {
                    // numerator *= (0 - xm) = xm (negation is identity)
                    numerator = gf_mul(numerator, xm);
                    denominator = gf_mul(denominator, gf_sub(xj, xm));
                }
            }

            gf_div(numerator, denominator)
        })
        .collect()
}

/// Recover p(0) from y values and their precomputed Lagrange weights
pub fn interpolate_at_zero(weights: &[u8], ys: impl IntoIterator<Item = u8>) -> u8 {
    weights
        .iter()
        .zip(ys)
        .fold(0u8, |acc, (&w, y)| gf_add(acc, gf_mul(y, w)))
}
