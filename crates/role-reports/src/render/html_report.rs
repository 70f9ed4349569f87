use std::borrow::Cow;

use super::{format_number, ReportLayout};
use crate::config::Escaping;
use crate::constants;
use crate::error::Result;
use crate::items::{AnnotatedItem, User};

/// Minimal HTML document with one table row per item.
/// Priority rows are bold.
pub struct HtmlLayout {
    escaping: Escaping,
}

impl HtmlLayout {
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }

    fn text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self.escaping {
            Escaping::Escaped => html_escape(raw),
            Escaping::Literal => Cow::Borrowed(raw),
        }
    }
}

impl ReportLayout for HtmlLayout {
    fn header(&self, user: &User) -> Result<String> {
        Ok(format!(
            "<html><body>\n\
             <h1>Relatório</h1>\n\
             <h2>Usuário: {}</h2>\n\
             <table>\n\
             <tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
            self.text(&user.name)
        ))
    }

    fn row(&self, item: &AnnotatedItem, _user: &User) -> Result<String> {
        let open = if item.priority {
            format!("<tr style=\"{}\">", constants::PRIORITY_ROW_STYLE)
        } else {
            "<tr>".to_string()
        };

        Ok(format!(
            "{}<td>{}</td><td>{}</td><td>{}</td></tr>\n",
            open,
            self.text(&item.id),
            self.text(&item.name),
            format_number(item.value)
        ))
    }

    fn footer(&self, total: f64) -> Result<String> {
        Ok(format!(
            "</table>\n<h3>Total: {}</h3>\n</body></html>\n",
            format_number(total)
        ))
    }
}

/// Escape text for HTML element content and attribute values
fn html_escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
