use super::pages::{
    DashboardPage, EntryFormPage, EntryView, Page, PageRenderer, RenderError, TopicDetailPage,
    TopicFormPage, TopicView, TopicsPage,
};

/// Bundled renderer: plain escaped HTML, no template engine. The real
/// presentation layer is a collaborator behind the `PageRenderer` port.
#[derive(Debug, Clone, Default)]
pub struct HtmlPageRenderer;

impl PageRenderer for HtmlPageRenderer {
    fn render(&self, page: &Page) -> Result<String, RenderError> {
        let html = match page {
            Page::Dashboard(p) => dashboard(p),
            Page::Topics(p) => topics(p),
            Page::TopicDetail(p) => topic_detail(p),
            Page::TopicForm(p) => topic_form(p),
            Page::EntryForm(p) => entry_form(p),
        };
        Ok(html)
    }
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, nav_topics: &[TopicView], body: &str) -> String {
    let mut nav = String::from("<nav><a href=\"/\">Learning Log</a> <a href=\"/topics\">Topics</a><ul>");
    for topic in nav_topics {
        nav.push_str(&format!(
            "<li><a href=\"/topics/{}\">{}</a></li>",
            topic.id,
            escape(&topic.text)
        ));
    }
    nav.push_str("</ul></nav>");

    format!(
        "<!DOCTYPE html><html><head><title>{}</title></head><body>{}{}</body></html>",
        escape(title),
        nav,
        body
    )
}

fn entry_list(entries: &[EntryView]) -> String {
    if entries.is_empty() {
        return "<p>There are no entries yet.</p>".to_string();
    }

    let mut list = String::from("<ul class=\"entries\">");
    for entry in entries {
        list.push_str(&format!(
            "<li><time>{}</time><p>{}</p><a href=\"/entries/{}/edit\">edit entry</a></li>",
            entry.date_added.format("%Y-%m-%d %H:%M"),
            escape(&entry.text),
            entry.id
        ));
    }
    list.push_str("</ul>");
    list
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut list = String::from("<ul class=\"errors\">");
    for error in errors {
        list.push_str(&format!("<li>{}</li>", escape(error)));
    }
    list.push_str("</ul>");
    list
}

fn dashboard(page: &DashboardPage) -> String {
    let mut body = format!(
        "<h1>Learning Log</h1><p>{} topics, {} entries</p>",
        page.topic_count, page.entry_count
    );
    body.push_str(&entry_list(&page.entries));
    layout("Learning Log", &page.topics, &body)
}

fn topics(page: &TopicsPage) -> String {
    let mut body = String::from("<h1>Topics</h1><ul class=\"topics\">");
    for topic in &page.topics {
        body.push_str(&format!(
            "<li><a href=\"/topics/{}\">{}</a></li>",
            topic.id,
            escape(&topic.text)
        ));
    }
    body.push_str("</ul><a href=\"/topics/new\">Add a new topic</a>");
    layout("Topics", &page.topics, &body)
}

fn topic_detail(page: &TopicDetailPage) -> String {
    let mut body = format!("<h1>{}</h1>", escape(&page.topic.text));
    body.push_str(&format!(
        "<a href=\"/topics/{}/entries/new\">Add new entry</a>",
        page.topic.id
    ));
    body.push_str(&entry_list(&page.entries));
    layout(&page.topic.text, &page.nav_topics, &body)
}

fn topic_form(page: &TopicFormPage) -> String {
    let body = format!(
        "<h1>Add a new topic</h1>{}<form action=\"/topics/new\" method=\"post\">\
         <input type=\"text\" name=\"text\" value=\"{}\">\
         <button type=\"submit\">Add topic</button></form>",
        error_list(&page.errors),
        escape(&page.text)
    );
    layout("New Topic", &page.nav_topics, &body)
}

fn entry_form(page: &EntryFormPage) -> String {
    let (title, action) = match page.entry_id {
        Some(entry_id) => ("Edit entry", format!("/entries/{entry_id}/edit")),
        None => (
            "Add a new entry",
            format!("/topics/{}/entries/new", page.topic.id),
        ),
    };

    let body = format!(
        "<h1>{}</h1><h2>{}</h2>{}<form action=\"{}\" method=\"post\">\
         <textarea name=\"text\">{}</textarea>\
         <button type=\"submit\">Save entry</button></form>",
        title,
        escape(&page.topic.text),
        error_list(&page.errors),
        action,
        escape(&page.text)
    );
    layout(title, &page.nav_topics, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn topic_view(text: &str) -> TopicView {
        TopicView {
            id: Uuid::new_v4(),
            text: text.to_string(),
        }
    }

    fn entry_view(text: &str) -> EntryView {
        EntryView {
            id: Uuid::new_v4(),
            text: text.to_string(),
            date_added: Utc::now(),
        }
    }

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape("<script>\"&'</script>"),
            "&lt;script&gt;&quot;&amp;&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn dashboard_shows_both_counts() {
        let page = DashboardPage {
            topics: vec![topic_view("Chess")],
            entries: vec![entry_view("Learned the Sicilian Defense")],
            topic_count: 1,
            entry_count: 1,
        };

        let html = HtmlPageRenderer
            .render(&Page::Dashboard(page))
            .unwrap();

        assert!(html.contains("1 topics, 1 entries"));
        assert!(html.contains("Learned the Sicilian Defense"));
    }

    #[test]
    fn user_text_is_escaped_in_pages() {
        let page = TopicsPage {
            topics: vec![topic_view("<b>Chess</b>")],
        };

        let html = HtmlPageRenderer.render(&Page::Topics(page)).unwrap();

        assert!(html.contains("&lt;b&gt;Chess&lt;/b&gt;"));
        assert!(!html.contains("<b>Chess</b>"));
    }

    #[test]
    fn topic_detail_links_to_new_entry_and_edit() {
        let topic = topic_view("Chess");
        let entry = entry_view("An entry");
        let entry_id = entry.id;

        let page = TopicDetailPage {
            topic: topic.clone(),
            entries: vec![entry],
            nav_topics: vec![topic.clone()],
        };

        let html = HtmlPageRenderer
            .render(&Page::TopicDetail(page))
            .unwrap();

        assert!(html.contains(&format!("/topics/{}/entries/new", topic.id)));
        assert!(html.contains(&format!("/entries/{entry_id}/edit")));
    }

    #[test]
    fn topic_form_echoes_value_and_errors() {
        let page = TopicFormPage {
            text: "  ".to_string(),
            errors: vec!["Text cannot be empty".to_string()],
            nav_topics: vec![],
        };

        let html = HtmlPageRenderer.render(&Page::TopicForm(page)).unwrap();

        assert!(html.contains("Text cannot be empty"));
        assert!(html.contains("action=\"/topics/new\""));
    }

    #[test]
    fn entry_form_targets_the_right_action() {
        let topic = topic_view("Chess");
        let entry_id = Uuid::new_v4();

        let blank = EntryFormPage {
            topic: topic.clone(),
            entry_id: None,
            text: String::new(),
            errors: vec![],
            nav_topics: vec![],
        };
        let editing = EntryFormPage {
            topic: topic.clone(),
            entry_id: Some(entry_id),
            text: "old text".to_string(),
            errors: vec![],
            nav_topics: vec![],
        };

        let blank_html = HtmlPageRenderer.render(&Page::EntryForm(blank)).unwrap();
        let editing_html = HtmlPageRenderer.render(&Page::EntryForm(editing)).unwrap();

        assert!(blank_html.contains(&format!("action=\"/topics/{}/entries/new\"", topic.id)));
        assert!(editing_html.contains(&format!("action=\"/entries/{entry_id}/edit\"")));
        assert!(editing_html.contains("old text"));
    }
}
