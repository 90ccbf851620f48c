use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that an operation requiring shares received none.
    #[error("No shares provided")]
    NoShares,

    /// Indicates that fewer than `degree + 1` shares were given for
    /// reconstruction.
    #[error("Too few shares provided: {0} is below the required {1}")]
    TooFewShares(usize, usize),

    /// Indicates that shares with different domains, moduli, degrees or
    /// evaluation points were combined.
    #[error("Attempted to combine shares with different parameters")]
    IncompatibleShares,

    /// Indicates that reconstruction over the integers did not produce an
    /// integer, which happens with insufficient or inconsistent shares.
    #[error("Reconstruction of the secret failed: the result is not an integer")]
    FractionalSecret,

    /// Indicates that the shares cannot be interpolated.
    #[error("Invalid shares: {0}")]
    InvalidShares(String),

    /// Indicates a parameter error.
    #[error("{0}")]
    ParametersError(ParametersError),

    /// Indicates a serialization error.
    #[error("Serialization error")]
    SerializationError,
}

impl From<ParametersError> for Error {
    fn from(e: ParametersError) -> Self {
        Error::ParametersError(e)
    }
}

/// Separate enum to indicate parameters-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParametersError {
    /// Indicates that the number of shares is invalid.
    #[error("Invalid number of shares: {0} must be at least 1")]
    InvalidShareCount(usize),

    /// Indicates that the degree is too large for the number of shares.
    #[error("Invalid degree: {0} must be smaller than the number of shares {1}")]
    InvalidDegree(usize, usize),

    /// Indicates that the field modulus is invalid.
    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),

    /// Indicates that the bound on the secret is invalid.
    #[error("Invalid secret bound: {0}")]
    InvalidSecretBound(String),

    /// Indicates that the statistical security parameter is invalid.
    #[error("Invalid statistical security parameter: {0} must be at least 1")]
    InvalidSecurityParameter(usize),

    /// Indicates that a secret exceeds the bound the parameters were built for.
    #[error("Secret out of bounds: |{0}| exceeds {1}")]
    SecretOutOfBounds(String, String),
}
