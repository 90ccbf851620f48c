//! Reconstruction of a secret from its shares.

use crate::share::{ensure_compatible, Domain, Share};
use crate::{Error, Result};
use itertools::Itertools;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use sss_util::reduce;
use tracing::debug;

/// Reconstruct the secret from a set of shares of the same secret.
///
/// Only the first `degree + 1` shares are used, but every share is checked
/// for compatibility with the first one. Finite field secrets are returned as
/// their least non-negative residue; integer secrets are returned exactly.
pub fn combine(shares: &[Share]) -> Result<BigInt> {
    if shares.is_empty() {
        return Err(Error::NoShares);
    }
    let degree = shares[0].degree;
    if shares.len() <= degree {
        return Err(Error::TooFewShares(shares.len(), degree.saturating_add(1)));
    }
    ensure_compatible(shares, false)?;

    let used = &shares[..=degree];
    if let Some(x) = used.iter().map(|s| s.x).duplicates().next() {
        return Err(Error::InvalidShares(format!(
            "duplicate evaluation point {x}"
        )));
    }

    debug!(
        domain = shares[0].domain.name(),
        degree,
        provided = shares.len(),
        "reconstructing secret"
    );
    let secret = interpolate_at_zero(used);

    match &shares[0].domain {
        Domain::FiniteField { modulus } => {
            if modulus <= &BigInt::one() {
                return Err(Error::InvalidShares(format!("invalid modulus {modulus}")));
            }
            // The rational normalizes over Q, the denominator still has to be
            // inverted in the field.
            let inverse = secret.denom().modinv(modulus).ok_or_else(|| {
                Error::InvalidShares(format!(
                    "interpolation denominator is not invertible modulo {modulus}"
                ))
            })?;
            Ok(reduce(&(secret.numer() * inverse), modulus))
        }
        Domain::Integers { scale } => {
            if !scale.is_positive() {
                return Err(Error::InvalidShares(format!("invalid scale factor {scale}")));
            }
            if !secret.is_integer() {
                debug!("interpolation over the integers is not integral");
                return Err(Error::FractionalSecret);
            }
            let scaled = secret.to_integer();
            if !(&scaled % scale).is_zero() {
                debug!("interpolated value is not a multiple of the scale factor");
                return Err(Error::FractionalSecret);
            }
            Ok(scaled / scale)
        }
    }
}

/// Lagrange interpolation at zero over the rationals.
///
/// The evaluation points must be distinct.
fn interpolate_at_zero(shares: &[Share]) -> BigRational {
    let mut sum = BigRational::zero();
    for (i, share_i) in shares.iter().enumerate() {
        let xi = BigInt::from(share_i.x);
        let mut term = BigRational::from_integer(share_i.y.clone());
        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigInt::from(share_j.x);
            let denominator = &xj - &xi;
            term *= BigRational::new(xj, denominator);
        }
        sum += term;
    }
    sum
}
