use crate::domain::msisdn::Msisdn;
use crate::domain::operator::Operator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsisdnDetailDto {
    pub msisdn: String,
    pub prefix: String,
    pub operator: Operator,
    pub local: String,
    pub international: String,
}

impl From<&Msisdn> for MsisdnDetailDto {
    fn from(value: &Msisdn) -> Self {
        Self {
            msisdn: value.digits().to_string(),
            prefix: value.prefix().to_string(),
            operator: value.operator(),
            local: value.get(false, ""),
            international: value.get(true, ""),
        }
    }
}
