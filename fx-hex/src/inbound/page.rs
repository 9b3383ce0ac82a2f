//! Server-rendered converter page.

use std::fmt;

use axum::response::{Html, IntoResponse, Response};

use fx_types::{ConversionResult, ConvertForm, CurrencyCatalog};

/// Everything the converter page shows: selector choices, the submitted form
/// values, and the outcome of the last conversion if any.
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    pub currencies: CurrencyCatalog,
    pub form: ConvertForm,
    pub result: Option<ConversionResult>,
}

impl IndexPage {
    pub fn new(currencies: CurrencyCatalog) -> Self {
        Self {
            currencies,
            ..Self::default()
        }
    }

    pub fn with_form(mut self, form: ConvertForm) -> Self {
        self.form = form;
        self
    }

    pub fn with_result(mut self, result: ConversionResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_options(&self, f: &mut fmt::Formatter<'_>, selected: &str) -> fmt::Result {
        for code in &self.currencies {
            let attr = if code.as_str() == selected {
                " selected"
            } else {
                ""
            };
            writeln!(
                f,
                r#"          <option value="{code}"{attr}>{code}</option>"#,
                code = Escaped(code.as_str()),
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for IndexPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"fr\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "  <title>Convertisseur de devises</title>\n",
            "  <link rel=\"stylesheet\" href=\"/style.css\">\n",
            "</head>\n",
            "<body>\n",
            "  <main>\n",
            "    <h1>Convertisseur de devises</h1>\n",
            "    <form method=\"post\" action=\"/convert\">\n",
        ))?;

        writeln!(
            f,
            r#"      <label for="amount">Montant</label>
      <input type="number" step="any" id="amount" name="amount" value="{}" required>"#,
            Escaped(&self.form.amount)
        )?;

        writeln!(f, r#"      <label for="from">De</label>"#)?;
        writeln!(f, r#"      <select id="from" name="from">"#)?;
        self.write_options(f, &self.form.from)?;
        writeln!(f, "      </select>")?;

        writeln!(f, r#"      <label for="to">Vers</label>"#)?;
        writeln!(f, r#"      <select id="to" name="to">"#)?;
        self.write_options(f, &self.form.to)?;
        writeln!(f, "      </select>")?;

        writeln!(f, r#"      <button type="submit">Convertir</button>"#)?;
        writeln!(f, "    </form>")?;

        match &self.result {
            Some(ConversionResult::Converted { display_text }) => writeln!(
                f,
                r#"    <p class="result" id="result">{}</p>"#,
                Escaped(display_text)
            )?,
            Some(ConversionResult::Failed { message }) => writeln!(
                f,
                r#"    <p class="error" id="error">{}</p>"#,
                Escaped(message)
            )?,
            None => {}
        }

        writeln!(
            f,
            r#"    <section id="history" data-from="{}" data-to="{}">
      <h2>Historique</h2>
      <canvas id="history-chart"></canvas>
    </section>"#,
            Escaped(&self.form.from),
            Escaped(&self.form.to)
        )?;

        f.write_str(concat!(
            "  </main>\n",
            "  <script src=\"/app.js\" defer></script>\n",
            "</body>\n",
            "</html>\n",
        ))
    }
}

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

/// HTML-escapes text and attribute values on output.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
