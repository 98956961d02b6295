use std::collections::HashMap;

use super::surface::{RegionId, SectionId, Surface};
use crate::constants::{APP_TAGLINE, APP_TITLE};

const STYLE: &str = "\
body{font-family:sans-serif;margin:0;background:#f5f6f8;color:#1c1e21}\
header{background:#00674f;color:#fff;padding:1.5rem 2rem}\
header input{width:100%;max-width:28rem;padding:.5rem;border:none;border-radius:4px}\
.filters{margin-top:.75rem}\
.filter-btn{margin-right:.5rem;padding:.35rem .9rem;border:none;border-radius:999px;cursor:pointer}\
.filter-btn.active{background:#ffb81c}\
main{padding:1.5rem 2rem}\
.section{margin-bottom:2.5rem}\
.card{background:#fff;border-radius:8px;padding:1rem;margin-bottom:1rem;box-shadow:0 1px 3px rgba(0,0,0,.12)}\
.price{font-weight:700;color:#00674f}\
table{width:100%;border-collapse:collapse;background:#fff}\
th,td{text-align:left;padding:.5rem .75rem;border-bottom:1px solid #e3e5e8}\
.fee-amount{font-weight:600}\
.no-charge{color:#0a7d36;font-weight:600}\
.note{color:#5f6368;font-size:.9rem}\
.error{background:#fde8e8;border:1px solid #e02424;border-radius:8px;padding:1.5rem}";

pub struct HtmlPage {
    regions: HashMap<RegionId, String>,
    error: Option<String>,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlPage {
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            error: None,
        }
    }

    pub fn document(&self, results_count: &str) -> String {
        let body = self.error.as_deref().map_or_else(
            || self.content_body(results_count),
            Self::error_body,
        );

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{APP_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
        )
    }

    fn content_body(&self, results_count: &str) -> String {
        let mut body = String::new();

        body.push_str("<header>");
        body.push_str(&format!("<h1>{APP_TITLE}</h1>"));
        body.push_str(&format!(r#"<p class="tagline">{APP_TAGLINE}</p>"#));
        body.push_str(
            r#"<input type="search" id="searchInput" placeholder="Search accounts, fees and benefits">"#,
        );
        body.push_str(&Self::filter_buttons());
        body.push_str(&format!(r#"<div id="resultsCount">{results_count}</div>"#));
        body.push_str("</header>");

        body.push_str(r#"<main id="content">"#);
        for section in SectionId::ALL {
            body.push_str(&format!(
                r#"<section id="{}" class="section"><h2>{}</h2>"#,
                section.slug(),
                section.title()
            ));
            for region in RegionId::ALL.iter().filter(|region| region.section() == section) {
                if let Some(heading) = region.heading() {
                    body.push_str(&format!("<h3>{heading}</h3>"));
                }
                body.push_str(&format!(
                    r#"<div id="{}">{}</div>"#,
                    region.element_id(),
                    self.regions.get(region).map_or("", String::as_str)
                ));
            }
            body.push_str("</section>");
        }
        body.push_str("</main>");

        body
    }

    fn filter_buttons() -> String {
        let mut buttons = String::from(r#"<div class="filters">"#);
        buttons.push_str(r#"<button class="filter-btn active" data-filter="all">All</button>"#);
        for section in SectionId::ALL {
            buttons.push_str(&format!(
                r#"<button class="filter-btn" data-filter="{}">{}</button>"#,
                section.slug(),
                section.title()
            ));
        }
        buttons.push_str("</div>");
        buttons
    }

    fn error_body(message: &str) -> String {
        format!(
            r#"<main id="content"><div class="error"><h3>Error</h3><p>{message}</p></div></main>"#
        )
    }
}

impl Surface for HtmlPage {
    fn set_content(&mut self, region: RegionId, html: &str) {
        self.regions.insert(region, html.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
