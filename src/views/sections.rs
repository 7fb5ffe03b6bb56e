use crate::models::{
    client::Client,
    content::Category,
    document::{entries, Document, PerClient},
};

use super::{client_select, escape, layout};

/// A plain text list section and the form that appends to it.
pub struct TextSection {
    pub path: &'static str,
    pub title: &'static str,
    /// Name of the form field holding the new entry.
    pub field: &'static str,
    pub placeholder: &'static str,
}

pub const OBJECTIVES: TextSection = TextSection {
    path: "/strategic_objectives",
    title: "Strategic Objectives",
    field: "objective",
    placeholder: "New objective",
};

pub const WEEKLY_GOALS: TextSection = TextSection {
    path: "/weekly_goals",
    title: "Weekly Goals",
    field: "goal",
    placeholder: "New goal",
};

pub const CAPTIONS: TextSection = TextSection {
    path: "/captions",
    title: "Captions",
    field: "caption",
    placeholder: "New caption",
};

pub const NOTES: TextSection = TextSection {
    path: "/notes",
    title: "Notes",
    field: "note",
    placeholder: "New note",
};

pub fn text_list_page(
    section: &TextSection,
    data: &PerClient<Vec<String>>,
    warning: Option<&str>,
) -> String {
    let lists: String = Client::ALL
        .iter()
        .map(|&client| {
            let items: String = entries(data, client)
                .iter()
                .map(|item| format!("<li>{}</li>", escape(item)))
                .collect();
            client_block(client, &items)
        })
        .collect();

    let form = format!(
        r#"<section>
      <form method="post" action="{path}">
        {select}
        <input type="text" name="{field}" placeholder="{placeholder}">
        <button type="submit">Add</button>
      </form>
    </section>"#,
        path = section.path,
        select = client_select(Client::default()),
        field = section.field,
        placeholder = section.placeholder,
    );

    layout(section.title, section.path, warning, &format!("{form}\n{lists}"))
}

pub fn content_ideas_page(doc: &Document, warning: Option<&str>) -> String {
    let lists: String = Client::ALL
        .iter()
        .map(|&client| {
            let items: String = entries(&doc.content_ideas, client)
                .iter()
                .map(|i| {
                    format!(
                        r#"<li>{} <span class="tag">{}</span></li>"#,
                        escape(&i.idea),
                        i.category
                    )
                })
                .collect();
            client_block(client, &items)
        })
        .collect();

    let categories: String = Category::ALL
        .iter()
        .map(|c| format!(r#"<option value="{c}">{c}</option>"#))
        .collect();

    let form = format!(
        r#"<section>
      <form method="post" action="/content_ideas">
        {select}
        <input type="text" name="idea" placeholder="New content idea">
        <select name="category"><option value="">Category</option>{categories}</select>
        <button type="submit">Add</button>
      </form>
    </section>"#,
        select = client_select(Client::default()),
    );

    layout("Content Ideas", "/content_ideas", warning, &format!("{form}\n{lists}"))
}

fn client_block(client: Client, items: &str) -> String {
    if items.is_empty() {
        return format!("<section><h2>{client}</h2><p><em>Nothing yet.</em></p></section>");
    }
    format!("<section><h2>{client}</h2><ul>{items}</ul></section>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::defaults::seed_document;

    #[test]
    fn test_text_list_page_renders_entries_escaped() {
        let mut doc = seed_document();
        doc.notes
            .insert(Client::Biga, vec!["<script>alert(1)</script>".into()]);

        let html = text_list_page(&NOTES, &doc.notes, None);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains(r#"name="note""#));
        assert!(html.contains("Nothing yet."));
    }

    #[test]
    fn test_content_ideas_page_lists_categories() {
        let html = content_ideas_page(&seed_document(), None);
        for category in Category::ALL {
            assert!(html.contains(&format!(r#"<option value="{category}">"#)));
        }
        assert!(html.contains("Mystery empanada"));
    }
}
