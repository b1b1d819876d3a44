//! HTML writer for [`Document`].
//!
//! Class names match the stylesheet of the view page (`epic`, `story`,
//! `story-section`, `acceptance-criteria`, `test-criteria`,
//! `technical-considerations`).

use super::{CriterionItem, Document, EpicBlock, Field, StoryBlock};

impl Document {
    /// Write the document as an HTML fragment. Every text field is escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_epic(&mut out, &self.epic);
        for story in &self.stories {
            write_story(&mut out, story);
        }
        out
    }
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_epic(out: &mut String, epic: &EpicBlock) {
    out.push_str("<div class=\"epic\">");
    out.push_str("<div class=\"epic-title\">");
    out.push_str(&escape_html(&epic.title));
    out.push_str("</div>");
    for field in &epic.fields {
        // "Long Description" -> "epic-long-description"
        let class = format!("epic-{}", field.label.to_lowercase().replace(' ', "-"));
        write_field(out, &class, field);
    }
    out.push_str("</div>");
}

fn write_story(out: &mut String, story: &StoryBlock) {
    out.push_str("<div class=\"story\">");
    out.push_str("<h3>");
    out.push_str(&escape_html(&story.title));
    out.push_str("</h3>");
    for field in &story.fields {
        write_field(out, "story-section", field);
    }

    if let Some(criteria) = &story.acceptance_criteria {
        out.push_str("<div class=\"story-section\"><strong>Acceptance Criteria:</strong><ul>");
        for item in criteria {
            write_criterion(out, item);
        }
        out.push_str("</ul></div>");
    }

    if let Some(considerations) = &story.technical_considerations {
        out.push_str(
            "<div class=\"story-section\"><strong>Technical Considerations:</strong>\
             <ul class=\"technical-considerations\">",
        );
        for item in considerations {
            out.push_str("<li>");
            out.push_str(&escape_html(item));
            out.push_str("</li>");
        }
        out.push_str("</ul></div>");
    }

    out.push_str("</div>");
}

fn write_field(out: &mut String, class: &str, field: &Field) {
    out.push_str("<div class=\"");
    out.push_str(class);
    out.push_str("\"><strong>");
    out.push_str(field.label);
    out.push_str(":</strong> ");
    out.push_str(&escape_html(&field.text));
    out.push_str("</div>");
}

fn write_criterion(out: &mut String, item: &CriterionItem) {
    out.push_str("<li><em>Criteria:</em> ");
    out.push_str(&escape_html(&item.criteria));
    if !item.tests.is_empty() {
        out.push_str("<ul class=\"acceptance-criteria\">");
        for test in &item.tests {
            out.push_str("<li class=\"test-criteria\">");
            out.push_str(&escape_html(test));
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>");
}
