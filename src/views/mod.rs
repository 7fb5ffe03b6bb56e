pub mod analytics;
pub mod pricing;
pub mod sections;

use chrono::Datelike;

use crate::models::client::Client;

/// Navigation entries in display order: (path, label).
const NAV: [(&str, &str); 7] = [
    ("/strategic_objectives", "Strategic Objectives"),
    ("/content_ideas", "Content Ideas"),
    ("/weekly_goals", "Weekly Goals"),
    ("/captions", "Captions"),
    ("/notes", "Notes"),
    ("/analytics", "Analytics"),
    ("/pricing_billing", "Pricing & Billing"),
];

/// Escape text for use in HTML bodies and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps page content in the shared layout: navigation, optional warning
/// banner, and a footer with the current year.
pub fn layout(title: &str, active: &str, warning: Option<&str>, content: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(path, label)| {
            let class = if *path == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{path}"{class}>{}</a>"#, escape(label))
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let banner = warning
        .map(|w| format!(r#"<div class="alert alert-warning" role="alert">{}</div>"#, escape(w)))
        .unwrap_or_default();

    let year = chrono::Local::now().year();
    let title = escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ margin:0; font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif; background:#f1f5f9; color:#0f172a }}
    nav {{ display:flex; flex-wrap:wrap; gap:4px; padding:12px 24px; background:#0f172a }}
    nav a {{ color:#cbd5e1; text-decoration:none; padding:6px 10px; border-radius:6px }}
    nav a.active {{ background:#334155; color:#fff }}
    main {{ max-width:960px; margin:0 auto; padding:24px }}
    section {{ background:#fff; border-radius:12px; padding:20px 24px; margin-bottom:20px; box-shadow:0 1px 3px rgba(0,0,0,0.08) }}
    .alert-warning {{ background:#fef3c7; border:1px solid #f59e0b; padding:10px 14px; border-radius:8px; margin-bottom:20px }}
    form {{ display:flex; flex-wrap:wrap; gap:8px; align-items:center }}
    footer {{ text-align:center; font-size:12px; color:#94a3b8; padding:20px }}
  </style>
</head>
<body>
  <nav>
      {nav}
  </nav>
  <main>
    <h1>{title}</h1>
    {banner}
    {content}
  </main>
  <footer>&copy; {year} Content Planner</footer>
</body>
</html>"#
    )
}

/// A `<select name="client">` over the fixed client list.
pub fn client_select(selected: Client) -> String {
    let options: String = Client::ALL
        .iter()
        .map(|c| {
            let sel = if *c == selected { " selected" } else { "" };
            format!(r#"<option value="{c}"{sel}>{c}</option>"#)
        })
        .collect();
    format!(r#"<select name="client">{options}</select>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_layout_marks_active_page_and_shows_warning() {
        let html = layout("Notes", "/notes", Some("Please enter a note."), "<p>body</p>");
        assert!(html.contains(r#"<a href="/notes" class="active">Notes</a>"#));
        assert!(html.contains("Please enter a note."));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("Pricing &amp; Billing"));
    }

    #[test]
    fn test_client_select_marks_selection() {
        let html = client_select(Client::Tricolor);
        assert!(html.contains(r#"<option value="Tricolor" selected>"#));
        assert!(html.contains(r#"<option value="Biga">"#));
    }
}
