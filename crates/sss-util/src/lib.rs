#![crate_name = "sss_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Utilities for the sss library

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};

/// Returns `n!`, with `0! = 1`.
pub fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
}

/// Returns whether `p` is prime.
///
/// The test is probabilistic: it runs Miller-Rabin with 20 random bases
/// followed by a Baillie-PSW Lucas test, so a composite is reported as prime
/// with negligible probability.
pub fn is_prime(p: &BigUint) -> bool {
    let p = num_bigint_dig::BigUint::from_bytes_le(&p.to_bytes_le());
    num_bigint_dig::prime::probably_prime(&p, 20)
}

/// Sample an integer uniformly in `[0, bound)`.
///
/// An empty range (`bound <= 0`) yields zero.
pub fn sample_below<R: RngCore + CryptoRng>(bound: &BigInt, rng: &mut R) -> BigInt {
    if !bound.is_positive() {
        return BigInt::zero();
    }
    rng.gen_bigint_range(&BigInt::zero(), bound)
}

/// Returns the least non-negative residue of `value` modulo `modulus`, in
/// `[0, |modulus|)`.
///
/// The modulus must be nonzero.
pub fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    let modulus = modulus.abs();
    let r = value % &modulus;
    if r.is_negative() {
        r + modulus
    } else {
        r
    }
}
