//! Shares of a secret.

use crate::{Error, Result};
use num_bigint::BigInt;
use tracing::debug;

/// The domain a secret was shared over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    /// Shamir secret sharing modulo a prime `modulus`.
    FiniteField {
        /// The prime modulus of the field.
        modulus: BigInt,
    },
    /// Secret sharing over the integers. The secret was multiplied by
    /// `scale` before being embedded in the polynomial.
    Integers {
        /// The accumulated scale factor, `n!` for a fresh sharing of `n` shares.
        scale: BigInt,
    },
}

impl Domain {
    /// The field modulus, if the domain is a finite field.
    pub fn modulus(&self) -> Option<&BigInt> {
        match self {
            Domain::FiniteField { modulus } => Some(modulus),
            Domain::Integers { .. } => None,
        }
    }

    /// The scale factor, if the domain is the integers.
    pub fn scale(&self) -> Option<&BigInt> {
        match self {
            Domain::FiniteField { .. } => None,
            Domain::Integers { scale } => Some(scale),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Domain::FiniteField { .. } => "finite field",
            Domain::Integers { .. } => "integers",
        }
    }

    /// Two domains are compatible when they are of the same kind and, for
    /// finite fields, have the same modulus. Scale factors are not compared.
    pub(crate) fn is_compatible(&self, other: &Domain) -> bool {
        match (self, other) {
            (Domain::FiniteField { modulus: a }, Domain::FiniteField { modulus: b }) => a == b,
            (Domain::Integers { .. }, Domain::Integers { .. }) => true,
            _ => false,
        }
    }
}

/// A single participant's share of a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub(crate) domain: Domain,
    pub(crate) degree: usize,
    pub(crate) x: usize,
    pub(crate) y: BigInt,
}

impl Share {
    /// Assemble a share from its parts, e.g. after receiving it from another
    /// party.
    pub fn new(domain: Domain, degree: usize, x: usize, y: BigInt) -> Self {
        Self {
            domain,
            degree,
            x,
            y,
        }
    }

    /// The domain of the sharing.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Degree of the sharing polynomial; `degree + 1` shares reconstruct.
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// The evaluation point.
    pub const fn x(&self) -> usize {
        self.x
    }

    /// The value of the sharing polynomial at `x`.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// The field modulus, for finite field shares.
    pub fn modulus(&self) -> Option<&BigInt> {
        self.domain.modulus()
    }

    /// The scale factor, for integer shares.
    pub fn scale(&self) -> Option<&BigInt> {
        self.domain.scale()
    }

    /// Whether this is a share over a finite field.
    pub fn is_finite_field(&self) -> bool {
        matches!(self.domain, Domain::FiniteField { .. })
    }

    /// Whether this is a share over the integers.
    pub fn is_integer(&self) -> bool {
        matches!(self.domain, Domain::Integers { .. })
    }

    /// Returns a copy of this share moved to the evaluation point `x`.
    pub fn with_x(&self, x: usize) -> Self {
        Self {
            x,
            ..self.clone()
        }
    }
}

/// Checks that every share agrees with the first one on domain and degree,
/// and on the evaluation point when `same_point` is set.
///
/// The slice must not be empty.
pub(crate) fn ensure_compatible(shares: &[Share], same_point: bool) -> Result<()> {
    let first = &shares[0];
    for (i, share) in shares.iter().enumerate().skip(1) {
        if !first.domain.is_compatible(&share.domain) {
            debug!(
                index = i,
                expected = first.domain.name(),
                found = share.domain.name(),
                "share domain mismatch"
            );
            return Err(Error::IncompatibleShares);
        }
        if first.degree != share.degree {
            debug!(
                index = i,
                expected = first.degree,
                found = share.degree,
                "share degree mismatch"
            );
            return Err(Error::IncompatibleShares);
        }
        if same_point && first.x != share.x {
            debug!(
                index = i,
                expected = first.x,
                found = share.x,
                "share evaluation point mismatch"
            );
            return Err(Error::IncompatibleShares);
        }
    }
    Ok(())
}
