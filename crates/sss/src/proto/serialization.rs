//! Protobuf serialization for shares.

use super::generated::{Domain as DomainProto, Share as ShareProto};
use crate::share::{Domain, Share};
use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::Signed;
use prost::Message;
use sss_traits::{Deserialize, Serialize};

/// Convert a Share to its protobuf representation
impl From<&Share> for ShareProto {
    fn from(share: &Share) -> Self {
        let (domain, parameter) = match share.domain() {
            Domain::FiniteField { modulus } => (DomainProto::FiniteField, modulus),
            Domain::Integers { scale } => (DomainProto::Integers, scale),
        };
        ShareProto {
            domain: domain as i32,
            parameter: parameter.to_signed_bytes_le(),
            degree: share.degree() as u64,
            x: share.x() as u64,
            y: share.y().to_signed_bytes_le(),
        }
    }
}

impl TryFrom<ShareProto> for Share {
    type Error = Error;

    fn try_from(proto: ShareProto) -> Result<Self> {
        let parameter = BigInt::from_signed_bytes_le(&proto.parameter);
        if !parameter.is_positive() {
            return Err(Error::SerializationError);
        }
        let domain = match DomainProto::try_from(proto.domain) {
            Ok(DomainProto::FiniteField) => Domain::FiniteField { modulus: parameter },
            Ok(DomainProto::Integers) => Domain::Integers { scale: parameter },
            Err(_) => return Err(Error::SerializationError),
        };
        let degree = usize::try_from(proto.degree).map_err(|_| Error::SerializationError)?;
        let x = usize::try_from(proto.x).map_err(|_| Error::SerializationError)?;

        Ok(Share::new(
            domain,
            degree,
            x,
            BigInt::from_signed_bytes_le(&proto.y),
        ))
    }
}

impl Serialize for Share {
    fn to_bytes(&self) -> Vec<u8> {
        ShareProto::from(self).encode_to_vec()
    }
}

impl Deserialize for Share {
    type Error = Error;

    fn try_deserialize(bytes: &[u8]) -> Result<Self> {
        let proto: ShareProto = Message::decode(bytes).map_err(|_| Error::SerializationError)?;
        Share::try_from(proto)
    }
}
