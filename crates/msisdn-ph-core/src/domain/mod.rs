pub mod msisdn;
pub mod operator;

pub use msisdn::{
    clean, validate, Msisdn, DEFAULT_COUNTRY_PREFIX, PREFIX_DIGITS, SUBSCRIBER_DIGITS,
};
pub use operator::Operator;
