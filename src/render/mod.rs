mod surface;
mod page;
mod accounts;
mod fees;
mod credit;
mod global;
mod travel;
mod benefits;

pub use self::page::HtmlPage;
pub use self::surface::{RegionId, SectionId, Surface};

use tracing::debug;

use crate::models::Catalog;
use crate::search::SearchableItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub searchable: Vec<String>,
}

struct TableRow {
    searchable: String,
    cells: String,
}

fn table(headers: &[&str], rows: Vec<TableRow>) -> Fragment {
    let mut html = String::from("<table><thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr></thead><tbody>");

    let mut searchable = Vec::with_capacity(rows.len());
    for row in rows {
        html.push_str(&format!(
            r#"<tr data-searchable="{}">{}</tr>"#,
            row.searchable, row.cells
        ));
        searchable.push(row.searchable);
    }
    html.push_str("</tbody></table>");

    Fragment { html, searchable }
}

fn join_parts(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_catalog(catalog: &Catalog, surface: &mut impl Surface) -> Vec<SearchableItem> {
    let mut items = Vec::new();

    apply(
        surface,
        &mut items,
        RegionId::AccountsList,
        accounts::render(catalog.account_types.as_deref().unwrap_or_default()),
    );

    if let Some(fees) = &catalog.transaction_fees {
        apply(surface, &mut items, RegionId::NoChargeFees, fees::render_no_charge(&fees.no_charge));
        apply(surface, &mut items, RegionId::StandardFees, fees::render_standard(&fees.standard_fees));
        apply(surface, &mut items, RegionId::CashFees, fees::render_cash(&fees.cash_transactions));
        apply(surface, &mut items, RegionId::RealTimeFees, fees::render_real_time(&fees.real_time_payments));
        apply(
            surface,
            &mut items,
            RegionId::EWalletFees,
            fees::render_e_wallet(&fees.send_money, &fees.e_wallet),
        );
    }

    apply(
        surface,
        &mut items,
        RegionId::CreditList,
        credit::render(catalog.credit_facilities.as_deref().unwrap_or_default()),
    );
    apply(
        surface,
        &mut items,
        RegionId::GlobalAccountList,
        global::render(catalog.global_account.as_deref().unwrap_or_default()),
    );
    apply(
        surface,
        &mut items,
        RegionId::TravelFees,
        travel::render(catalog.e_bucks_travel.as_deref().unwrap_or_default()),
    );
    apply(
        surface,
        &mut items,
        RegionId::BenefitsList,
        catalog.benefits.as_ref().and_then(benefits::render),
    );

    items
}

fn apply(
    surface: &mut impl Surface,
    items: &mut Vec<SearchableItem>,
    region: RegionId,
    fragment: Option<Fragment>,
) {
    let Some(fragment) = fragment else { return };
    debug!(region = region.element_id(), rows = fragment.searchable.len(), "rendered region");
    for text in fragment.searchable {
        items.push(SearchableItem::new(region.section(), text));
    }
    surface.set_content(region, &fragment.html);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{RegionId, Surface};
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct RecordingSurface {
        pub regions: HashMap<RegionId, String>,
        pub error: Option<String>,
    }

    impl Surface for RecordingSurface {
        fn set_content(&mut self, region: RegionId, html: &str) {
            self.regions.insert(region, html.to_string());
        }

        fn show_error(&mut self, message: &str) {
            self.error = Some(message.to_string());
        }
    }
}
