use super::{Fragment, TableRow, table};
use crate::format::{currency_symbol, format_currency};
use crate::models::ForeignAccount;

// Literal keywords carried in the searchable text so "global", "account"
// and "foreign" all find these rows.
const SEARCH_KEYWORDS: &str = "global account foreign";

pub fn render(accounts: &[ForeignAccount]) -> Option<Fragment> {
    if accounts.is_empty() {
        return None;
    }

    let rows = accounts
        .iter()
        .map(|account| {
            let symbol = currency_symbol(&account.currency);
            TableRow {
                searchable: format!("{} {SEARCH_KEYWORDS}", account.currency),
                cells: format!(
                    r#"<td><strong>{}</strong></td><td class="fee-amount">{}</td><td class="fee-amount">{}</td><td class="fee-amount">{}</td><td class="fee-amount">{}</td>"#,
                    account.currency,
                    format_currency(account.annual_card_fee, symbol),
                    format_currency(account.atm_withdrawal, symbol),
                    format_currency(account.card_replacement, symbol),
                    format_currency(account.balance_enquiry, symbol)
                ),
            }
        })
        .collect();

    Some(table(
        &["Currency", "Annual Card Fee", "ATM Withdrawal", "Card Replacement", "Balance Enquiry"],
        rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(currency: &str) -> ForeignAccount {
        ForeignAccount {
            currency: currency.to_string(),
            annual_card_fee: 49.0,
            atm_withdrawal: 2.5,
            card_replacement: 10.0,
            balance_enquiry: 0.5,
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render(&[]).is_none());
    }

    #[test]
    fn fees_use_the_currency_symbol() {
        let fragment = render(&[account("USD"), account("EUR")]).unwrap();
        assert!(fragment.html.contains(r#"<td class="fee-amount">$49.00</td>"#));
        assert!(fragment.html.contains(r#"<td class="fee-amount">€2.50</td>"#));
    }

    #[test]
    fn unknown_currency_uses_default_symbol() {
        let fragment = render(&[account("AUD")]).unwrap();
        assert!(fragment.html.contains(r#"<td class="fee-amount">R49.00</td>"#));
    }

    #[test]
    fn searchable_text_carries_keywords() {
        let fragment = render(&[account("GBP")]).unwrap();
        assert_eq!(fragment.searchable, vec!["GBP global account foreign".to_string()]);
    }
}
