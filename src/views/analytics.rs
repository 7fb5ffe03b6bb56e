use crate::models::{analytics::ChartData, client::Client, document::Document};

use super::{client_select, escape, layout};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const CURRENT_COLOR: &str = "skyblue";
const GOAL_COLOR: &str = "lightgreen";

pub fn analytics_page(
    doc: &Document,
    selected: Client,
    chart: &ChartData,
    warning: Option<&str>,
) -> String {
    let switcher: String = Client::ALL
        .iter()
        .map(|c| {
            let class = if *c == selected { r#" class="active""# } else { "" };
            format!(r#"<a href="/analytics?client={c}"{class}>{c}</a> "#)
        })
        .collect();

    let rows: String = Client::ALL
        .iter()
        .map(|&c| {
            let totals = doc.analytics_for(c);
            let goals = doc.goals_for(c);
            format!(
                "<tr><td>{c}</td><td>{} / {}</td><td>{} / {}</td><td>{} / {}</td></tr>",
                totals.views,
                goals.views,
                totals.engagement,
                goals.engagements,
                totals.likes,
                goals.likes
            )
        })
        .collect();

    let content = format!(
        r#"<section>
      <form method="post" action="/analytics">
        {select}
        <input type="number" min="0" name="views" placeholder="Views">
        <input type="number" min="0" name="engagements" placeholder="Engagements">
        <input type="number" min="0" name="likes" placeholder="Likes">
        <button type="submit">Add</button>
      </form>
    </section>
    <section>
      <p>{switcher}</p>
      {svg}
    </section>
    <section>
      <table>
        <thead><tr><th>Client</th><th>Views</th><th>Engagements</th><th>Likes</th></tr></thead>
        <tbody>{rows}</tbody>
      </table>
    </section>"#,
        select = client_select(selected),
        svg = chart_svg(chart),
    );

    layout("Analytics", "/analytics", warning, &content)
}

/// Grouped bar chart: one pair of bars (current, goal) per metric, with the
/// value printed above each bar.
pub fn chart_svg(chart: &ChartData) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    // Headroom for the value labels
    let scale_max = chart.max_value() as f64 * 1.1;
    let group_w = plot_w / chart.metrics.len().max(1) as f64;
    let bar_w = group_w * 0.35;
    let title = escape(&chart.title());

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="{title}">"#
    );
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="24" text-anchor="middle" font-size="16">{title}</text>"#,
        WIDTH / 2.0
    ));
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{baseline}" x2="{:.1}" y2="{baseline}" stroke="#334155"/>"##,
        WIDTH - MARGIN_RIGHT
    ));
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline}" stroke="#334155"/>"##
    ));

    for (i, metric) in chart.metrics.iter().enumerate() {
        let center = MARGIN_LEFT + group_w * (i as f64 + 0.5);
        for (value, x, color) in [
            (metric.current, center - bar_w, CURRENT_COLOR),
            (metric.goal, center, GOAL_COLOR),
        ] {
            let h = value as f64 / scale_max * plot_h;
            let y = baseline - h;
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{color}"/>"#
            ));
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{value}</text>"#,
                x + bar_w / 2.0,
                y - 4.0
            ));
        }
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
            baseline + 20.0,
            metric.label
        ));
    }

    // Axis titles
    let mid_y = MARGIN_TOP + plot_h / 2.0;
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">Metrics</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 12.0
    ));
    svg.push_str(&format!(
        r#"<text x="18" y="{mid_y:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 18 {mid_y:.1})">Count</text>"#
    ));

    // Legend
    let legend_x = WIDTH - MARGIN_RIGHT - 110.0;
    for (row, (label, color)) in [("Current", CURRENT_COLOR), ("Goal", GOAL_COLOR)]
        .into_iter()
        .enumerate()
    {
        let y = MARGIN_TOP + row as f64 * 20.0;
        svg.push_str(&format!(
            r#"<rect x="{legend_x:.1}" y="{y:.1}" width="14" height="14" fill="{color}"/><text x="{:.1}" y="{:.1}" font-size="12">{label}</text>"#,
            legend_x + 20.0,
            y + 11.0
        ));
    }

    svg.push_str("</svg>");
    svg
}
