//! The single HTML page served by the view server. No scripts: ideas are
//! links that reload the page with the description prefilled.

use crate::client::IdeaList;
use crate::export::EXPORT_FILE_NAME;
use crate::render::{escape_html, Document};

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2em auto}\
textarea{width:100%;min-height:8em}\
.idea{display:inline}.idea-button{margin:0 .5em .5em 0}\
.epic{margin-bottom:2em}.epic-title{font-size:1.6em;font-weight:bold}\
.story{border-top:1px solid #ddd;padding-top:1em}.story-section{margin:.5em 0}\
.test-criteria{color:#555}";

/// What to show on the page.
#[derive(Debug, Default)]
pub struct Page<'a> {
    /// Current contents of the description box.
    pub description: &'a str,
    pub focus: &'a str,
    /// `None` hides the idea panel.
    pub ideas: Option<&'a IdeaList>,
    /// Shown in the result area instead of a document.
    pub message: Option<&'a str>,
    pub document: Option<&'a Document>,
    /// Shows the download link.
    pub export_ready: bool,
}

pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>epicgen</title><style>");
    out.push_str(STYLE);
    out.push_str("</style></head><body><h1>Feature Generator</h1>");

    if let Some(ideas) = page.ideas {
        write_ideas(&mut out, ideas, page.focus);
    }

    out.push_str("<form method=\"post\" action=\"/generate\">");
    out.push_str("<textarea id=\"feature-input\" name=\"description\" placeholder=\"Describe a feature\">");
    out.push_str(&escape_html(page.description));
    out.push_str("</textarea><button id=\"submit-button\" type=\"submit\">Generate</button></form>");

    out.push_str("<div id=\"result\">");
    if let Some(message) = page.message {
        out.push_str("<p class=\"message\">");
        out.push_str(&escape_html(message));
        out.push_str("</p>");
    } else if let Some(document) = page.document {
        out.push_str(&document.to_html());
    }
    out.push_str("</div>");

    if page.export_ready {
        out.push_str("<div id=\"download-markdown-container\"><a id=\"download-markdown\" href=\"/export\" download=\"");
        out.push_str(EXPORT_FILE_NAME);
        out.push_str("\">Download Markdown</a></div>");
    }

    out.push_str("</body></html>");
    out
}

fn write_ideas(out: &mut String, ideas: &IdeaList, focus: &str) {
    out.push_str("<section id=\"ideas\"><form id=\"ideas-actions\" method=\"get\" action=\"/\">");
    out.push_str("<input id=\"focus-input\" name=\"focus\" placeholder=\"e.g. Document Management\" value=\"");
    out.push_str(&escape_html(focus));
    let label = if ideas.ideas.is_empty() && !ideas.is_error() {
        "Show Ideas"
    } else {
        "Refresh Ideas"
    };
    out.push_str("\"><button id=\"refresh-ideas\" type=\"submit\">");
    out.push_str(label);
    out.push_str("</button></form>");

    out.push_str("<div id=\"ideas-buttons\">");
    if let Some(message) = ideas.error_message() {
        out.push_str(message);
    }
    for idea in &ideas.ideas {
        out.push_str("<form class=\"idea\" method=\"get\" action=\"/\">");
        out.push_str("<input type=\"hidden\" name=\"description\" value=\"");
        out.push_str(&escape_html(&idea.long_description));
        out.push_str("\"><button class=\"idea-button\" type=\"submit\">");
        out.push_str(&escape_html(&idea.short_title));
        out.push_str("</button></form>");
    }
    out.push_str("</div></section>");
}
