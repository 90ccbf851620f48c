#![allow(missing_docs)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Share {
    #[prost(enumeration = "Domain", tag = "1")]
    pub domain: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub parameter: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub degree: u64,
    #[prost(uint64, tag = "4")]
    pub x: u64,
    #[prost(bytes = "vec", tag = "5")]
    pub y: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Domain {
    FiniteField = 0,
    Integers = 1,
}
