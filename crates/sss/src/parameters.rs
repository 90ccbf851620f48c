//! Validated parameters for sharing secrets.

use crate::{
    share_finite_field_with_rng, share_integers_with_rng, Error, ParametersError, Result, Share,
};
use num_bigint::BigInt;
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};
use sss_traits::SecretSharer;
use sss_util::is_prime;

/// Default statistical security parameter, in bits, for integer sharings.
pub const DEFAULT_STATISTICAL_SECURITY: usize = 40;

/// Parameters for Shamir secret sharing over a finite field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSharing {
    field_size: BigInt,
    degree: usize,
    n_shares: usize,
}

impl FieldSharing {
    /// The prime modulus of the field.
    pub fn field_size(&self) -> &BigInt {
        &self.field_size
    }

    /// Degree of the sharing polynomial.
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Number of shares produced.
    pub const fn n_shares(&self) -> usize {
        self.n_shares
    }

    /// Number of shares needed to reconstruct a secret.
    pub const fn threshold(&self) -> usize {
        self.degree + 1
    }
}

impl SecretSharer for FieldSharing {
    type Secret = BigInt;
    type Share = Share;
    type Error = Error;

    fn share<R: RngCore + CryptoRng>(&self, secret: &BigInt, rng: &mut R) -> Result<Vec<Share>> {
        Ok(share_finite_field_with_rng(
            secret,
            &self.field_size,
            self.degree,
            self.n_shares,
            rng,
        ))
    }
}

/// Parameters for secret sharing over the integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerSharing {
    secret_bound: BigInt,
    stat_sec_param: usize,
    degree: usize,
    n_shares: usize,
}

impl IntegerSharing {
    /// Bound on the absolute value of the secrets.
    pub fn secret_bound(&self) -> &BigInt {
        &self.secret_bound
    }

    /// Statistical security parameter, in bits.
    pub const fn statistical_security(&self) -> usize {
        self.stat_sec_param
    }

    /// Degree of the sharing polynomial.
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Number of shares produced.
    pub const fn n_shares(&self) -> usize {
        self.n_shares
    }

    /// Number of shares needed to reconstruct a secret.
    pub const fn threshold(&self) -> usize {
        self.degree + 1
    }
}

impl SecretSharer for IntegerSharing {
    type Secret = BigInt;
    type Share = Share;
    type Error = Error;

    /// Share a secret whose absolute value is at most the secret bound.
    fn share<R: RngCore + CryptoRng>(&self, secret: &BigInt, rng: &mut R) -> Result<Vec<Share>> {
        if secret.abs() > self.secret_bound {
            return Err(Error::ParametersError(ParametersError::SecretOutOfBounds(
                secret.to_string(),
                self.secret_bound.to_string(),
            )));
        }
        Ok(share_integers_with_rng(
            secret,
            &self.secret_bound,
            self.stat_sec_param,
            self.degree,
            self.n_shares,
            rng,
        ))
    }
}

/// Builder for sharing parameters.
#[derive(Debug)]
pub struct SharingParametersBuilder {
    n_shares: usize,
    degree: usize,
    field_size: Option<BigInt>,
    secret_bound: Option<BigInt>,
    stat_sec_param: usize,
}

impl SharingParametersBuilder {
    /// Creates a new instance of the builder
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            n_shares: Default::default(),
            degree: Default::default(),
            field_size: None,
            secret_bound: None,
            stat_sec_param: DEFAULT_STATISTICAL_SECURITY,
        }
    }

    /// Sets the number of shares. Building fails if it is zero.
    pub fn set_n_shares(&mut self, n_shares: usize) -> &mut Self {
        self.n_shares = n_shares;
        self
    }

    /// Sets the degree of the sharing polynomial. Building fails unless it is
    /// smaller than the number of shares.
    pub fn set_degree(&mut self, degree: usize) -> &mut Self {
        self.degree = degree;
        self
    }

    /// Sets the field modulus, for finite field sharings. Building fails if
    /// it is not a prime larger than the number of shares.
    pub fn set_field_size(&mut self, field_size: &BigInt) -> &mut Self {
        self.field_size = Some(field_size.clone());
        self
    }

    /// Sets the bound on the absolute value of the secrets, for integer
    /// sharings.
    pub fn set_secret_bound(&mut self, secret_bound: &BigInt) -> &mut Self {
        self.secret_bound = Some(secret_bound.clone());
        self
    }

    /// Sets the statistical security parameter in bits, for integer
    /// sharings. Defaults to [`DEFAULT_STATISTICAL_SECURITY`].
    pub fn set_statistical_security(&mut self, stat_sec_param: usize) -> &mut Self {
        self.stat_sec_param = stat_sec_param;
        self
    }

    fn check_share_count(&self) -> Result<()> {
        if self.n_shares == 0 {
            return Err(Error::ParametersError(ParametersError::InvalidShareCount(
                self.n_shares,
            )));
        }
        if self.degree >= self.n_shares {
            return Err(Error::ParametersError(ParametersError::InvalidDegree(
                self.degree,
                self.n_shares,
            )));
        }
        Ok(())
    }

    /// Build parameters for sharing over a finite field.
    pub fn build_field(&self) -> Result<FieldSharing> {
        self.check_share_count()?;

        let field_size = self.field_size.clone().ok_or_else(|| {
            Error::ParametersError(ParametersError::InvalidModulus(
                "the field size must be specified".to_string(),
            ))
        })?;
        if field_size <= BigInt::one() {
            return Err(Error::ParametersError(ParametersError::InvalidModulus(
                format!("{field_size} is smaller than 2"),
            )));
        }
        if !is_prime(field_size.magnitude()) {
            return Err(Error::ParametersError(ParametersError::InvalidModulus(
                format!("{field_size} is not prime"),
            )));
        }
        // Evaluation points 1..=n must be distinct and nonzero in the field.
        if field_size <= BigInt::from(self.n_shares) {
            return Err(Error::ParametersError(ParametersError::InvalidModulus(
                format!(
                    "{field_size} is not larger than the number of shares {}",
                    self.n_shares
                ),
            )));
        }

        Ok(FieldSharing {
            field_size,
            degree: self.degree,
            n_shares: self.n_shares,
        })
    }

    /// Build parameters for sharing over the integers.
    pub fn build_integers(&self) -> Result<IntegerSharing> {
        self.check_share_count()?;

        let secret_bound = self.secret_bound.clone().ok_or_else(|| {
            Error::ParametersError(ParametersError::InvalidSecretBound(
                "the secret bound must be specified".to_string(),
            ))
        })?;
        if !secret_bound.is_positive() {
            return Err(Error::ParametersError(ParametersError::InvalidSecretBound(
                format!("{secret_bound} is not positive"),
            )));
        }
        if self.stat_sec_param == 0 {
            return Err(Error::ParametersError(
                ParametersError::InvalidSecurityParameter(self.stat_sec_param),
            ));
        }

        Ok(IntegerSharing {
            secret_bound,
            stat_sec_param: self.stat_sec_param,
            degree: self.degree,
            n_shares: self.n_shares,
        })
    }
}
