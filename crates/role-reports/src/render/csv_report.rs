use csv::{QuoteStyle, WriterBuilder};

use super::{format_number, ReportLayout};
use crate::config::Escaping;
use crate::constants;
use crate::error::Result;
use crate::items::{AnnotatedItem, User};

/// CSV layout: column header, `id,name,value,user` rows, blank line, totals
pub struct CsvLayout {
    escaping: Escaping,
}

impl CsvLayout {
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }

    /// Write one record terminated by `\n`
    fn line(&self, fields: &[&str]) -> Result<String> {
        let quote_style = match self.escaping {
            Escaping::Escaped => QuoteStyle::Necessary,
            Escaping::Literal => QuoteStyle::Never,
        };

        let mut wtr = WriterBuilder::new()
            .quote_style(quote_style)
            .from_writer(Vec::new());
        wtr.write_record(fields)?;
        let bytes = wtr
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl ReportLayout for CsvLayout {
    fn header(&self, _user: &User) -> Result<String> {
        self.line(&constants::CSV_HEADER)
    }

    fn row(&self, item: &AnnotatedItem, user: &User) -> Result<String> {
        let value = format_number(item.value);
        self.line(&[
            item.id.as_str(),
            item.name.as_str(),
            value.as_str(),
            user.name.as_str(),
        ])
    }

    fn footer(&self, total: f64) -> Result<String> {
        let mut footer = String::from("\n");
        footer.push_str(&self.line(&[constants::CSV_TOTAL_LABEL, "", ""])?);
        footer.push_str(&self.line(&[format_number(total).as_str(), "", ""])?);
        Ok(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Item, Role};

    fn row_for(name: &str, user_name: &str, escaping: Escaping) -> String {
        let item = AnnotatedItem::plain(&Item::new("9", name, 42.0));
        CsvLayout::new(escaping)
            .row(&item, &User::new(user_name, Role::User))
            .unwrap()
    }

    #[test]
    fn test_header_line() {
        let header = CsvLayout::new(Escaping::Escaped)
            .header(&User::new("Ana", Role::User))
            .unwrap();
        assert_eq!(header, "ID,NOME,VALOR,USUARIO\n");
    }

    #[test]
    fn test_plain_row() {
        assert_eq!(row_for("Desk", "Ana", Escaping::Escaped), "9,Desk,42,Ana\n");
    }

    #[test]
    fn test_escaped_row_quotes_separators() {
        assert_eq!(
            row_for("Chair, red", "Ana \"A\"", Escaping::Escaped),
            "9,\"Chair, red\",42,\"Ana \"\"A\"\"\"\n"
        );
    }

    #[test]
    fn test_literal_row_interpolates_raw_text() {
        assert_eq!(
            row_for("Chair, red", "Ana", Escaping::Literal),
            "9,Chair, red,42,Ana\n"
        );
    }

    #[test]
    fn test_footer() {
        let footer = CsvLayout::new(Escaping::Escaped).footer(1600.25).unwrap();
        assert_eq!(footer, "\nTotal,,\n1600.25,,\n");
    }

    #[test]
    fn test_priority_is_not_rendered_in_csv() {
        let item = AnnotatedItem::flagged(&Item::new("4", "Server", 1500.0));
        let row = CsvLayout::new(Escaping::Escaped)
            .row(&item, &User::new("Root", Role::Admin))
            .unwrap();
        assert_eq!(row, "4,Server,1500,Root\n");
    }
}
