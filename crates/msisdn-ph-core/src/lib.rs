pub mod domain;
pub mod dto;
pub mod error;
pub mod table;

pub use domain::*;
pub use dto::MsisdnDetailDto;
pub use error::CoreError;
pub use table::{PrefixTable, CHECK_ORDER};
