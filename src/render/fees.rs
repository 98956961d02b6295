use super::{Fragment, TableRow, join_parts, table};
use crate::format::format_fee;
use crate::models::FeeEntry;

pub fn render_no_charge(entries: &[FeeEntry]) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            searchable: join_parts(&[Some(&entry.category), Some(&entry.description)]),
            cells: format!(
                r#"<td>{}</td><td>{}</td><td class="no-charge">No charge</td>"#,
                entry.category, entry.description
            ),
        })
        .collect();

    Some(table(&["Category", "Description", "Fee"], rows))
}

pub fn render_standard(entries: &[FeeEntry]) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            searchable: join_parts(&[
                Some(&entry.category),
                Some(&entry.description),
                entry.channel.as_deref(),
            ]),
            cells: format!(
                r#"<td>{}</td><td>{}</td><td class="fee-amount">{}</td><td>{}</td>"#,
                entry.category,
                entry.description,
                format_fee(entry.fee.as_ref()),
                entry.channel.as_deref().unwrap_or("-")
            ),
        })
        .collect();

    Some(table(&["Category", "Description", "Fee", "Channel"], rows))
}

pub fn render_cash(entries: &[FeeEntry]) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            searchable: join_parts(&[
                Some(&entry.category),
                Some(&entry.description),
                entry.note.as_deref(),
            ]),
            cells: format!(
                r#"<td>{}</td><td>{}</td><td class="fee-amount">{}</td><td class="note">{}</td>"#,
                entry.category,
                entry.description,
                format_fee(entry.fee.as_ref()),
                entry.note.as_deref().unwrap_or("-")
            ),
        })
        .collect();

    Some(table(&["Category", "Description", "Fee", "Note"], rows))
}

pub fn render_real_time(entries: &[FeeEntry]) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            searchable: join_parts(&[
                Some(&entry.category),
                Some(&entry.description),
                entry.limit.as_deref(),
            ]),
            cells: format!(
                r#"<td>{}</td><td>{}</td><td class="no-charge">No charge</td><td class="note">{}</td>"#,
                entry.category,
                entry.description,
                entry.limit.as_deref().unwrap_or("")
            ),
        })
        .collect();

    Some(table(&["Category", "Description", "Fee", "Details"], rows))
}

// The send-money and eWallet lists share one table: all of the former,
// then all of the latter, in source order.
pub fn render_e_wallet(send_money: &[FeeEntry], e_wallet: &[FeeEntry]) -> Option<Fragment> {
    if send_money.is_empty() && e_wallet.is_empty() {
        return None;
    }

    let rows = send_money
        .iter()
        .chain(e_wallet.iter())
        .map(|entry| TableRow {
            searchable: join_parts(&[
                Some(&entry.category),
                Some(&entry.description),
                entry.note.as_deref(),
            ]),
            cells: format!(
                r#"<td>{}</td><td>{}</td><td class="fee-amount">{}</td><td class="note">{}</td>"#,
                entry.category,
                entry.description,
                format_fee(entry.fee.as_ref()),
                entry.note.as_deref().or(entry.limit.as_deref()).unwrap_or("-")
            ),
        })
        .collect();

    Some(table(&["Category", "Description", "Fee", "Note"], rows))
}
