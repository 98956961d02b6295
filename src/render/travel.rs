use super::{Fragment, TableRow, table};
use crate::constants::DEFAULT_CURRENCY_SYMBOL;
use crate::format::format_currency;
use crate::models::TravelFeeEntry;
use crate::ordered_map::OrderedMap;

pub fn render(entries: &[TravelFeeEntry]) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }

    let mut groups: OrderedMap<Vec<&TravelFeeEntry>> = OrderedMap::new();
    for entry in entries {
        if let Some(group) = groups.get_mut(&entry.category) {
            group.push(entry);
        } else {
            groups.insert(entry.category.clone(), vec![entry]);
        }
    }

    let mut html = String::new();
    let mut searchable = Vec::with_capacity(entries.len());

    for (category, group) in groups.iter() {
        let rows = group
            .iter()
            .map(|entry| TableRow {
                searchable: format!("{category} {} travel", entry.service),
                cells: format!(
                    r#"<td>{}</td><td class="fee-amount">{}</td><td class="note">{}</td>"#,
                    entry.service,
                    format_currency(entry.fee, DEFAULT_CURRENCY_SYMBOL),
                    entry.max_fee.map_or_else(
                        || "-".to_string(),
                        |fee| format_currency(fee, DEFAULT_CURRENCY_SYMBOL)
                    )
                ),
            })
            .collect();

        let group_table = table(&["Service", "Fee", "Max Fee"], rows);
        html.push_str(&format!(
            r#"<div class="subsection"><h3>{category}</h3>{}</div>"#,
            group_table.html
        ));
        searchable.extend(group_table.searchable);
    }

    Some(Fragment { html, searchable })
}
