//! Evaluation of sharing polynomials.

use num_bigint::BigInt;
use num_traits::Zero;
use rayon::prelude::*;
use sss_util::reduce;

/// Evaluate `f(x) = constant + sum_j coefficients[j-1] * x^j` using Horner's rule.
pub(crate) fn evaluate(constant: &BigInt, coefficients: &[BigInt], x: usize) -> BigInt {
    let x = BigInt::from(x);
    let mut acc = BigInt::zero();
    for c in coefficients.iter().rev() {
        acc += c;
        acc *= &x;
    }
    acc + constant
}

/// Evaluate the sharing polynomial at the points `1..=n_shares`, reducing each
/// value modulo `modulus` when one is given.
pub(crate) fn evaluate_points(
    constant: &BigInt,
    coefficients: &[BigInt],
    n_shares: usize,
    modulus: Option<&BigInt>,
) -> Vec<(usize, BigInt)> {
    (1..=n_shares)
        .into_par_iter()
        .map(|x| {
            let y = evaluate(constant, coefficients, x);
            let y = match modulus {
                Some(p) => reduce(&y, p),
                None => y,
            };
            (x, y)
        })
        .collect()
}
