use crate::models::{client::Client, document::Document};

use super::{client_select, escape, layout};

pub fn pricing_page(doc: &Document, warning: Option<&str>) -> String {
    let rows: String = Client::ALL
        .iter()
        .map(|&c| {
            let pricing = doc.pricing_for(c);
            let due = if pricing.due_date.is_empty() {
                "<em>not set</em>".to_string()
            } else {
                format!("Billing Date: {}", escape(&pricing.due_date))
            };
            format!("<tr><td>{c}</td><td>${:.2}</td><td>{due}</td></tr>", pricing.amount)
        })
        .collect();

    let content = format!(
        r#"<section>
      <form method="post" action="/pricing_billing">
        {select}
        <input type="number" min="0" step="0.01" name="amount" placeholder="Amount">
        <button type="submit">Set price</button>
      </form>
    </section>
    <section>
      <table>
        <thead><tr><th>Client</th><th>Amount</th><th>Due</th></tr></thead>
        <tbody>{rows}</tbody>
      </table>
    </section>"#,
        select = client_select(Client::default()),
    );

    layout("Pricing & Billing", "/pricing_billing", warning, &content)
}
