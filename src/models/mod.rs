mod account;
mod fees;
mod credit;
mod foreign;
mod travel;
mod benefit;
mod catalog;

pub use self::account::AccountType;
pub use self::fees::{Fee, FeeEntry};
pub use self::credit::CreditFacility;
pub use self::foreign::ForeignAccount;
pub use self::travel::TravelFeeEntry;
pub use self::benefit::Benefit;
pub use self::catalog::Catalog;
