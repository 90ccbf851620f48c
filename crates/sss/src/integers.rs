//! Secret sharing over the integers.
//!
//! Shares are computed without modular reduction. Secrecy is statistical:
//! the random coefficients are drawn from a range `2^stat_sec_param * n^2`
//! times wider than the bound on the secret, which hides the secret's
//! contribution up to a statistical distance of about `2^-stat_sec_param`.

use crate::poly::evaluate_points;
use crate::share::{Domain, Share};
use num_bigint::BigInt;
use num_traits::One;
use rand::{thread_rng, CryptoRng, RngCore};
use sss_util::{factorial, sample_below};
use tracing::{debug, warn};

/// Upper bound `2^stat_sec_param * n_shares^2 * secret_upper_bound` on the
/// random coefficients of an integer sharing.
pub fn coefficient_bound(
    secret_upper_bound: &BigInt,
    stat_sec_param: usize,
    n_shares: usize,
) -> BigInt {
    let n = BigInt::from(n_shares);
    (BigInt::one() << stat_sec_param) * &n * &n * secret_upper_bound
}

/// Share `secret` over the integers.
///
/// `secret_upper_bound` bounds the absolute value of the secret and
/// `stat_sec_param` is the statistical security level in bits. Produces
/// `n_shares` shares at the points `1..=n_shares` from a random polynomial of
/// the given degree; `degree + 1` shares are required for reconstruction.
/// Randomness is drawn from [`thread_rng`].
pub fn share_integers(
    secret: &BigInt,
    secret_upper_bound: &BigInt,
    stat_sec_param: usize,
    degree: usize,
    n_shares: usize,
) -> Vec<Share> {
    share_integers_with_rng(
        secret,
        secret_upper_bound,
        stat_sec_param,
        degree,
        n_shares,
        &mut thread_rng(),
    )
}

/// Same as [`share_integers`], drawing the polynomial coefficients from `rng`.
pub fn share_integers_with_rng<R: RngCore + CryptoRng>(
    secret: &BigInt,
    secret_upper_bound: &BigInt,
    stat_sec_param: usize,
    degree: usize,
    n_shares: usize,
    rng: &mut R,
) -> Vec<Share> {
    if degree >= n_shares {
        warn!(
            degree,
            n_shares, "fewer shares than needed to reconstruct the secret"
        );
    }
    debug!(degree, n_shares, stat_sec_param, "sharing over the integers");

    let bound = coefficient_bound(secret_upper_bound, stat_sec_param, n_shares);
    let coefficients: Vec<BigInt> = (0..degree).map(|_| sample_below(&bound, rng)).collect();

    // Scaling by n! clears the denominators of the Lagrange coefficients for
    // any subset of the points 1..=n.
    let scale = BigInt::from(factorial(n_shares));
    let scaled_secret = secret * &scale;
    let domain = Domain::Integers { scale };

    evaluate_points(&scaled_secret, &coefficients, n_shares, None)
        .into_iter()
        .map(|(x, y)| Share::new(domain.clone(), degree, x, y))
        .collect()
}
