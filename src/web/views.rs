//! HTML rendering for the single summarization page.

use crate::core::models::PageView;
use crate::web::form::TEXT_FIELD;

const PAGE_TITLE: &str = "Text Summarizer";

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn summary_section(summary: Option<&str>) -> String {
    match summary {
        Some(text) => format!(
            "    <section class=\"summary\" id=\"summary\">\n      <h2>Summary</h2>\n      <p>{}</p>\n    </section>\n",
            escape_html(text)
        ),
        None => String::new(),
    }
}

/// Renders the form, pre-filled with `view.input_text` and followed by
/// `view.summary` when present.
#[must_use]
pub fn render_page(view: &PageView) -> String {
    let input = view.input_text.as_deref().map(escape_html).unwrap_or_default();

    // A newline right after <textarea> is swallowed by HTML parsers, so add
    // one to keep a leading newline in the submitted text intact.
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
      body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
      textarea {{ width: 100%; min-height: 14rem; }}
      .summary {{ margin-top: 1.5rem; padding: 1rem; background: #f4f4f4; }}
    </style>
  </head>
  <body>
    <h1>{title}</h1>
    <form method="post" action="/">
      <label for="{field}">Text to summarize</label>
      <textarea id="{field}" name="{field}">
{input}</textarea>
      <button type="submit">Summarize</button>
    </form>
{summary}  </body>
</html>
"#,
        title = PAGE_TITLE,
        field = TEXT_FIELD,
        input = input,
        summary = summary_section(view.summary.as_deref()),
    )
}
