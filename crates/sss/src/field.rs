//! Shamir secret sharing over a finite field.

use crate::poly::evaluate_points;
use crate::share::{Domain, Share};
use num_bigint::BigInt;
use num_traits::Signed;
use rand::{thread_rng, CryptoRng, RngCore};
use sss_util::{reduce, sample_below};
use tracing::{debug, warn};

/// Share `secret` over the field of integers modulo `field_size`.
///
/// Produces `n_shares` shares at the points `1..=n_shares` from a random
/// polynomial of the given degree; `degree + 1` shares are required for
/// reconstruction. Randomness is drawn from [`thread_rng`].
///
/// The caller must ensure that `field_size` is prime. A negative
/// `field_size` is replaced by its absolute value. Use
/// [`crate::SharingParametersBuilder`] for validated parameters.
///
/// # Panics
///
/// Panics if `field_size` is zero.
pub fn share_finite_field(
    secret: &BigInt,
    field_size: &BigInt,
    degree: usize,
    n_shares: usize,
) -> Vec<Share> {
    share_finite_field_with_rng(secret, field_size, degree, n_shares, &mut thread_rng())
}

/// Same as [`share_finite_field`], drawing the polynomial coefficients from
/// `rng`.
pub fn share_finite_field_with_rng<R: RngCore + CryptoRng>(
    secret: &BigInt,
    field_size: &BigInt,
    degree: usize,
    n_shares: usize,
    rng: &mut R,
) -> Vec<Share> {
    if degree == 0 {
        warn!("sharing with a degree 0 polynomial, every share equals the secret");
    }
    if degree >= n_shares {
        warn!(
            degree,
            n_shares, "fewer shares than needed to reconstruct the secret"
        );
    }
    debug!(degree, n_shares, "sharing over a finite field");

    let field_size = field_size.abs();
    let coefficients: Vec<BigInt> = (0..degree)
        .map(|_| sample_below(&field_size, rng))
        .collect();
    let secret = reduce(secret, &field_size);

    let points = evaluate_points(&secret, &coefficients, n_shares, Some(&field_size));
    let domain = Domain::FiniteField {
        modulus: field_size,
    };
    points
        .into_iter()
        .map(|(x, y)| Share::new(domain.clone(), degree, x, y))
        .collect()
}
