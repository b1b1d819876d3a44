//! Markdown export, structurally the same as the HTML document.

use crate::models::{FeatureResult, Story};

/// Convert a result to a Markdown document.
///
/// Pure: the same input always yields the same bytes.
///
/// Example output:
/// ```text
/// # Login
///
/// **Description:** d
///
/// ...
/// ## Stories
///
/// ### Sign in
///
/// **Acceptance Criteria:**
/// - Criteria: works
///    - t1
/// ```
pub fn to_portable_text(result: &FeatureResult) -> String {
    let mut md = String::new();
    md.push_str(&format!("# {}\n\n", result.epic_title));
    push_field(&mut md, "Description", &result.description);
    push_field(&mut md, "Rationale", &result.rationale);
    push_field(&mut md, "Long Description", &result.long_description);

    if !result.stories.is_empty() {
        md.push_str("## Stories\n\n");
        for story in &result.stories {
            push_story(&mut md, story);
        }
    }
    md
}

fn push_field(md: &mut String, label: &str, text: &str) {
    md.push_str(&format!("**{}:** {}\n\n", label, text));
}

fn push_story(md: &mut String, story: &Story) {
    md.push_str(&format!("### {}\n\n", story.story_title));
    push_field(md, "Description", &story.description);
    push_field(md, "Agile Story", &story.agile_story);
    push_field(md, "Purpose", &story.purpose);
    push_field(md, "Rationale", &story.rationale);

    if !story.acceptance_criteria.is_empty() {
        md.push_str("**Acceptance Criteria:**\n");
        for criterion in &story.acceptance_criteria {
            md.push_str(&format!("- Criteria: {}\n", criterion.criteria));
            for test in &criterion.test_criteria {
                md.push_str(&format!("   - {}\n", test));
            }
        }
        md.push('\n');
    }

    if !story.technical_considerations.is_empty() {
        md.push_str("**Technical Considerations:**\n");
        for item in &story.technical_considerations {
            md.push_str(&format!("- {}\n", item));
        }
        md.push('\n');
    }

    md.push('\n');
}
