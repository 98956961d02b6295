#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Accounts,
    Fees,
    Credit,
    Global,
    Travel,
    Benefits,
}

static SECTION_SLUGS: phf::Map<&'static str, SectionId> = phf::phf_map! {
    "accounts" => SectionId::Accounts,
    "fees" => SectionId::Fees,
    "credit" => SectionId::Credit,
    "global" => SectionId::Global,
    "travel" => SectionId::Travel,
    "benefits" => SectionId::Benefits,
};

impl SectionId {
    pub const ALL: [Self; 6] = [
        Self::Accounts,
        Self::Fees,
        Self::Credit,
        Self::Global,
        Self::Travel,
        Self::Benefits,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Fees => "fees",
            Self::Credit => "credit",
            Self::Global => "global",
            Self::Travel => "travel",
            Self::Benefits => "benefits",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Accounts => "Account Types",
            Self::Fees => "Transaction Fees",
            Self::Credit => "Credit Facilities",
            Self::Global => "Global Account",
            Self::Travel => "eBucks Travel",
            Self::Benefits => "Benefits",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        SECTION_SLUGS.get(slug).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    AccountsList,
    NoChargeFees,
    StandardFees,
    CashFees,
    RealTimeFees,
    EWalletFees,
    CreditList,
    GlobalAccountList,
    TravelFees,
    BenefitsList,
}

impl RegionId {
    pub const ALL: [Self; 10] = [
        Self::AccountsList,
        Self::NoChargeFees,
        Self::StandardFees,
        Self::CashFees,
        Self::RealTimeFees,
        Self::EWalletFees,
        Self::CreditList,
        Self::GlobalAccountList,
        Self::TravelFees,
        Self::BenefitsList,
    ];

    pub const fn section(self) -> SectionId {
        match self {
            Self::AccountsList => SectionId::Accounts,
            Self::NoChargeFees
            | Self::StandardFees
            | Self::CashFees
            | Self::RealTimeFees
            | Self::EWalletFees => SectionId::Fees,
            Self::CreditList => SectionId::Credit,
            Self::GlobalAccountList => SectionId::Global,
            Self::TravelFees => SectionId::Travel,
            Self::BenefitsList => SectionId::Benefits,
        }
    }

    pub const fn element_id(self) -> &'static str {
        match self {
            Self::AccountsList => "accountsList",
            Self::NoChargeFees => "noChargeFees",
            Self::StandardFees => "standardFees",
            Self::CashFees => "cashFees",
            Self::RealTimeFees => "realTimeFees",
            Self::EWalletFees => "eWalletFees",
            Self::CreditList => "creditList",
            Self::GlobalAccountList => "globalAccountList",
            Self::TravelFees => "travelFees",
            Self::BenefitsList => "benefitsList",
        }
    }

    pub const fn heading(self) -> Option<&'static str> {
        match self {
            Self::NoChargeFees => Some("No Charge Transactions"),
            Self::StandardFees => Some("Standard Fees"),
            Self::CashFees => Some("Cash Transactions"),
            Self::RealTimeFees => Some("Real-Time Payments"),
            Self::EWalletFees => Some("eWallet & Send Money"),
            _ => None,
        }
    }
}

pub trait Surface {
    fn set_content(&mut self, region: RegionId, html: &str);
    fn show_error(&mut self, message: &str);
}
