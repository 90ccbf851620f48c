#![crate_name = "sss_traits"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Traits for threshold secret sharing.

use rand::{CryptoRng, RngCore};

/// Splitting a secret into shares.
///
/// Implementors carry the sharing parameters (domain, degree, number of
/// shares) so that a single value can be reused to share many secrets.
pub trait SecretSharer {
    /// The type of the secrets being shared.
    type Secret;

    /// The type of the shares produced.
    type Share;

    /// The type of error returned.
    type Error;

    /// Split `secret` into shares, drawing randomness from `rng`.
    fn share<R: RngCore + CryptoRng>(
        &self,
        secret: &Self::Secret,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;
}

/// Serialization.
pub trait Serialize {
    /// Serialize `Self` into a vector of bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Deserialization.
pub trait Deserialize
where
    Self: Sized,
{
    /// The type of error returned.
    type Error;

    /// Attempt to deserialize from a vector of bytes.
    fn try_deserialize(bytes: &[u8]) -> Result<Self, Self::Error>;
}
