//! Server-rendered page: intake form, result area and the Start Over action.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::intake::session::{SessionView, ViewState};
use crate::models::intake::{Department, Impact, IntakeForm, Volume};

pub const PAGE_TITLE: &str = "AI Opportunity Analyzer";
pub const SUBMITTED_BANNER: &str = "Inputs captured! Generating recommendations...";
pub const RESULT_HEADING: &str = "AI Use Cases & Roadmap";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;line-height:1.5}\
label{display:block;font-weight:600;margin-top:1rem}\
textarea,select{width:100%;box-sizing:border-box;font:inherit}\
textarea{height:100px}\
fieldset{border:none;padding:0;margin-top:1rem}\
legend{font-weight:600}\
.banner{padding:.75rem 1rem;border-radius:.4rem;margin:1rem 0}\
.success{background:#e6f4ea;color:#1e4620}\
.error{background:#fdecea;color:#611a15}\
.info{background:#e8f0fe;color:#174ea6}\
button{margin-top:1rem;padding:.5rem 1rem;font:inherit}";

/// Renders the whole page for the given session view.
pub fn render_page(view: &SessionView) -> String {
    let form = view
        .snapshot
        .as_ref()
        .map(|s| s.form().clone())
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>🔍 {PAGE_TITLE}</h1>
<p>This tool helps identify high-impact AI opportunities and builds a 90-day transformation roadmap.</p>
<p>Fill out the brief intake form below to begin.</p>
{form}
{result}
<form method="post" action="/reset">
<button type="submit">🔄 Start Over</button>
</form>
</body>
</html>
"#,
        form = render_form(&form),
        result = render_result(&view.state),
    )
}

fn render_form(form: &IntakeForm) -> String {
    let departments: String = Department::ALL
        .iter()
        .map(|d| {
            let selected = if *d == form.department { " selected" } else { "" };
            format!(
                r#"<option value="{label}"{selected}>{label}</option>"#,
                label = escape_html(d.label())
            )
        })
        .collect();

    let volumes = radio_group(
        "volume",
        Volume::ALL.iter().map(|v| (v.label(), *v == form.volume)),
    );
    let impacts = radio_group(
        "impact",
        Impact::ALL.iter().map(|i| (i.label(), *i == form.impact)),
    );

    format!(
        r#"<form method="post" action="/analyze">
<label for="department">Which department are you analyzing?</label>
<select id="department" name="department">{departments}</select>
<label for="pain_point">What is the most repetitive or manual task in this department?</label>
<textarea id="pain_point" name="pain_point">{pain_point}</textarea>
<label for="data_used">What kind of data do you typically work with? (e.g., spreadsheets, databases, paper forms)</label>
<textarea id="data_used" name="data_used">{data_used}</textarea>
<fieldset><legend>How frequent is this task?</legend>{volumes}</fieldset>
<fieldset><legend>How important is this task to business performance?</legend>{impacts}</fieldset>
<button type="submit">Analyze AI Opportunities</button>
</form>"#,
        pain_point = escape_html(&form.pain_point),
        data_used = escape_html(&form.data_used),
    )
}

fn radio_group<'a>(name: &str, options: impl Iterator<Item = (&'a str, bool)>) -> String {
    options
        .map(|(label, checked)| {
            let checked = if checked { " checked" } else { "" };
            format!(
                r#"<div><label style="font-weight:normal"><input type="radio" name="{name}" value="{label}"{checked}> {label}</label></div>"#,
                label = escape_html(label)
            )
        })
        .collect()
}

fn render_result(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Submitted => format!(
            r#"<div class="banner success">{SUBMITTED_BANNER}</div>
<div class="banner info">Analyzing with GPT...</div>"#
        ),
        ViewState::Displayed { text } => format!(
            r#"<div class="banner success">{SUBMITTED_BANNER}</div>
<h2>📊 {RESULT_HEADING}</h2>
<section class="result">{}</section>"#,
            render_markdown(text)
        ),
        ViewState::Errored { message } => format!(
            r#"<div class="banner success">{SUBMITTED_BANNER}</div>
<div class="banner error">{}</div>"#,
            escape_html(message)
        ),
    }
}

/// Renders model output as Markdown. Raw HTML in the output is shown as text
/// and link or image targets outside http, https and mailto are blanked.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Relative targets are allowed; absolute ones only with a known-safe scheme.
/// Whitespace and control characters are ignored, as browsers do when
/// reading a scheme.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    match cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if cleaned[i..].starts_with(':') => matches!(
            cleaned[..i].to_ascii_lowercase().as_str(),
            "http" | "https" | "mailto"
        ),
        _ => true,
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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
