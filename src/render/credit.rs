use super::{Fragment, TableRow, join_parts, table};
use crate::constants::DEFAULT_CURRENCY_SYMBOL;
use crate::format::format_currency;
use crate::models::CreditFacility;

pub fn render(facilities: &[CreditFacility]) -> Option<Fragment> {
    if facilities.is_empty() {
        return None;
    }

    let rows = facilities
        .iter()
        .map(|facility| TableRow {
            searchable: join_parts(&[Some(&facility.name), facility.note.as_deref()]),
            cells: format!(
                r#"<td>{}</td><td class="fee-amount">{}</td><td>{}</td><td class="note">{}</td>"#,
                facility.name,
                format_currency(facility.monthly_service_fee, DEFAULT_CURRENCY_SYMBOL),
                other_fees_cell(facility),
                facility.note.as_deref().unwrap_or("-")
            ),
        })
        .collect();

    Some(table(&["Facility Type", "Monthly Service Fee", "Other Fees", "Note"], rows))
}

fn other_fees_cell(facility: &CreditFacility) -> String {
    let mut cell = facility
        .initiation_fee
        .as_deref()
        .map_or_else(|| "-".to_string(), |fee| format!("Initiation: {fee}"));

    if let Some(fee) = facility.monthly_non_utilisation_fee {
        cell.push_str(&format!(
            "<br>Non-utilisation: {}",
            format_currency(fee, DEFAULT_CURRENCY_SYMBOL)
        ));
    }

    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overdraft() -> CreditFacility {
        CreditFacility {
            name: "Overdraft".to_string(),
            monthly_service_fee: 17.0,
            initiation_fee: Some("Varies by limit".to_string()),
            monthly_non_utilisation_fee: Some(5.0),
            note: Some("Subject to credit approval".to_string()),
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render(&[]).is_none());
    }

    #[test]
    fn combines_initiation_and_non_utilisation_fees() {
        let fragment = render(&[overdraft()]).unwrap();
        assert!(fragment.html.contains("Initiation: Varies by limit<br>Non-utilisation: R5.00"));
        assert!(fragment.html.contains(r#"<td class="fee-amount">R17.00</td>"#));
    }

    #[test]
    fn optional_fees_default_to_dash() {
        let facility = CreditFacility {
            initiation_fee: None,
            monthly_non_utilisation_fee: None,
            note: None,
            ..overdraft()
        };
        let fragment = render(&[facility]).unwrap();
        assert!(fragment.html.contains("<td>-</td>"));
        assert_eq!(fragment.searchable, vec!["Overdraft".to_string()]);
    }

    #[test]
    fn searchable_text_includes_note() {
        let fragment = render(&[overdraft()]).unwrap();
        assert_eq!(
            fragment.searchable,
            vec!["Overdraft Subject to credit approval".to_string()]
        );
    }
}
