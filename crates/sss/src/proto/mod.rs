//! Protobuf wire format for shares.

#[allow(clippy::all)]
mod generated;
mod serialization;

pub use generated::{Domain as DomainProto, Share as ShareProto};
