//! Asset identifiers, denominations and the metadata describing them.

mod cache;
mod commitment;
pub mod denom;
mod id;
mod metadata;
mod value;

pub use cache::{
    Cache,
    ParseValueError,
    STAKING_TOKEN_BASE_DENOM,
};
pub use commitment::{
    BalanceCommitment,
    BalanceCommitmentError,
};
pub use denom::{
    Denom,
    ParseDenomError,
};
pub use id::{
    Id,
    IdError,
    HUMAN_READABLE_ID_PREFIX,
    ID_LEN,
};
pub use metadata::{
    Metadata,
    MetadataBuilder,
    MetadataError,
    ParseUnitAmountError,
    Unit,
    UnitError,
    MAX_EXPONENT,
};
pub use value::{
    Value,
    ValueError,
    ValueView,
    ValueViewError,
};

use crate::generated::asset::v1alpha1 as raw;
