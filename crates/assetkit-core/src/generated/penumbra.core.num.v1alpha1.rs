/// A 128 bit unsigned integer split into its lower and upper 64 bits.
///
/// x = (hi << 64) + lo
#[derive(Copy)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Amount {
    #[prost(uint64, tag = "1")]
    pub lo: u64,
    #[prost(uint64, tag = "2")]
    pub hi: u64,
}
impl ::prost::Name for Amount {
    const NAME: &'static str = "Amount";
    const PACKAGE: &'static str = "penumbra.core.num.v1alpha1";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("penumbra.core.num.v1alpha1.{}", Self::NAME)
    }
}
