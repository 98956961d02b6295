use serde::Deserialize;

use super::account::AccountType;
use super::benefit::Benefit;
use super::credit::CreditFacility;
use super::fees::TransactionFees;
use super::foreign::ForeignAccount;
use super::travel::TravelFeeEntry;
use crate::ordered_map::OrderedMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub account_types: Option<Vec<AccountType>>,
    pub transaction_fees: Option<TransactionFees>,
    pub credit_facilities: Option<Vec<CreditFacility>>,
    pub global_account: Option<Vec<ForeignAccount>>,
    pub e_bucks_travel: Option<Vec<TravelFeeEntry>>,
    pub benefits: Option<OrderedMap<Benefit>>,
}
