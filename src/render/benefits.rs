use super::{Fragment, join_parts};
use crate::models::Benefit;
use crate::ordered_map::OrderedMap;

pub fn render(benefits: &OrderedMap<Benefit>) -> Option<Fragment> {
    if benefits.is_empty() {
        return None;
    }

    let mut html = String::new();
    let mut searchable = Vec::with_capacity(benefits.len());

    for benefit in benefits.values() {
        let text = searchable_text(benefit);

        html.push_str(&format!(r#"<div class="card benefit-card" data-searchable="{text}">"#));
        html.push_str(&format!("<h3>{}</h3>", benefit.title));
        html.push_str(&format!("<p>{}</p>", benefit.description));
        if let Some(partners) = &benefit.partners {
            html.push_str("<ul>");
            for partner in partners {
                html.push_str(&format!("<li>{partner}</li>"));
            }
            html.push_str("</ul>");
        }
        if let Some(note) = &benefit.note {
            html.push_str(&format!(r#"<p class="note">{note}</p>"#));
        }
        html.push_str("</div>");

        searchable.push(text);
    }

    Some(Fragment { html, searchable })
}

fn searchable_text(benefit: &Benefit) -> String {
    let mut parts = vec![Some(benefit.title.as_str()), Some(benefit.description.as_str())];
    if let Some(partners) = &benefit.partners {
        parts.extend(partners.iter().map(|partner| Some(partner.as_str())));
    }
    join_parts(&parts)
}
