#![allow(unreachable_pub, clippy::pedantic, clippy::large_enum_variant)]

//! Files generated using [`prost-build`], [`pbjson-build`], and [`buf`] via the
//! [`tools/protobuf-compiler`] build tool.
//!
//! [`prost-build`]: https://docs.rs/prost-build
//! [`pbjson-build`]: https://docs.rs/pbjson-build
//! [`buf`]: https://buf.build
//! [`tools/protobuf-compiler`]: ../../../../tools/protobuf-compiler

pub mod penumbra {
    pub mod core {
        pub mod asset {
            pub mod v1alpha1 {
                include!("penumbra.core.asset.v1alpha1.rs");

                #[cfg(feature = "serde")]
                mod _serde_impl {
                    use super::*;
                    include!("penumbra.core.asset.v1alpha1.serde.rs");
                }
            }
        }

        pub mod num {
            pub mod v1alpha1 {
                include!("penumbra.core.num.v1alpha1.rs");

                #[cfg(feature = "serde")]
                mod _serde_impl {
                    use super::*;
                    include!("penumbra.core.num.v1alpha1.serde.rs");
                }
            }
        }
    }
}

#[doc(inline)]
pub use penumbra::core::{
    asset,
    num,
};
