use super::{Fragment, join_parts};
use crate::constants::{DEFAULT_CURRENCY_SYMBOL, PER_MONTH_SUFFIX};
use crate::format::format_currency;
use crate::models::AccountType;

pub fn render(accounts: &[AccountType]) -> Option<Fragment> {
    if accounts.is_empty() {
        return None;
    }

    let mut html = String::new();
    let mut searchable = Vec::with_capacity(accounts.len());

    for account in accounts {
        let text = searchable_text(account);
        let price = format_currency(account.monthly_fee, DEFAULT_CURRENCY_SYMBOL);

        html.push_str(&format!(r#"<div class="card" data-searchable="{text}">"#));
        html.push_str(&format!("<h3>{}</h3>", account.name));
        html.push_str(&format!(r#"<div class="price">{price} {PER_MONTH_SUFFIX}</div>"#));
        html.push_str(&format!(r#"<p class="description">{}</p>"#, account.description));
        if let Some(features) = &account.features {
            html.push_str("<ul>");
            for feature in features {
                html.push_str(&format!("<li>{feature}</li>"));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");

        searchable.push(text);
    }

    Some(Fragment { html, searchable })
}

fn searchable_text(account: &AccountType) -> String {
    let mut parts = vec![Some(account.name.as_str()), Some(account.description.as_str())];
    if let Some(features) = &account.features {
        parts.extend(features.iter().map(|feature| Some(feature.as_str())));
    }
    join_parts(&parts)
}
