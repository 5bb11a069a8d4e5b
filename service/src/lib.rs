pub mod dto;
pub mod error;
pub mod feed;
pub mod mutation;
pub mod query;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_util;

pub use mutation::*;
pub use query::*;

pub use sea_orm;
