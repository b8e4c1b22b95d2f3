//! Server-rendered HTML for the single page.
use std::fmt::Write;

use crate::ui::{Screen, View, BLURB, LOADING_TEXT, PLACEHOLDER_TEXT, RESULT_TEXT, TITLE};

/// Seconds between automatic reloads while a request is pending.
const LOADING_REFRESH_SECS: u32 = 1;

const SPINNER_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="44" height="44" viewBox="0 0 24 24" stroke-width="2" stroke="currentColor" fill="none" stroke-linecap="round" stroke-linejoin="round"><path stroke="none" d="M0 0h24v24H0z" fill="none"></path><path d="M12 6l0 -3"></path><path d="M16.25 7.75l2.15 -2.15"></path><path d="M18 12l3 0"></path><path d="M16.25 16.25l2.15 2.15"></path><path d="M12 18l0 3"></path><path d="M7.75 16.25l-2.15 2.15"></path><path d="M6 12l-3 0"></path><path d="M7.75 7.75l-2.15 -2.15"></path></svg>"#;

const PLACEHOLDER_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="44" height="44" viewBox="0 0 24 24" stroke-width="2" stroke="currentColor" fill="none" stroke-linecap="round" stroke-linejoin="round"><path stroke="none" d="M0 0h24v24H0z" fill="none"></path><path d="M15 8h.01"></path><path d="M11.5 21h-5.5a3 3 0 0 1 -3 -3v-12a3 3 0 0 1 3 -3h12a3 3 0 0 1 3 3v5.5"></path><path d="M18 18m-3 0a3 3 0 1 0 6 0a3 3 0 1 0 -6 0"></path><path d="M20.2 20.2l1.8 1.8"></path><path d="M3 16l5 -5c.928 -.893 2.072 -.893 3 0l2 2"></path></svg>"#;

const STYLE: &str = "body{margin:0;font-family:sans-serif;background:#f8fafc}\
.shell{display:flex;min-height:100vh;flex-direction:column;justify-content:center;align-items:center}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:4px;padding:3.5rem;text-align:center;max-width:58rem}\
.views{display:flex;flex-direction:column;align-items:center;gap:1.5rem;margin-top:3rem}\
textarea{width:75%;height:8rem;resize:none}\
button[disabled]{opacity:.5;cursor:not-allowed}\
.error{text-align:center;width:50%;background:#ef4444;border:1px solid #991b1b;border-radius:4px}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Center `content` in a full-height vertical flex container.
pub fn layout_shell(content: &str) -> String {
    format!(r#"<main class="shell">{}</main>"#, content)
}

fn render_form(screen: &Screen) -> String {
    let disabled = if screen.submit_enabled { "" } else { " disabled" };
    format!(
        r#"<form method="post" action="/prompt"><div><label for="prompt">Image prompt</label><br><textarea id="prompt" name="value" placeholder="Enter your prompt">{}</textarea></div><button type="submit"{}>Generate</button></form>"#,
        escape(&screen.prompt),
        disabled
    )
}

fn render_view(view: &View) -> String {
    match view {
        View::Loading => format!(r#"<div class="loading"><p>{}</p>{}</div>"#, LOADING_TEXT, SPINNER_ICON),
        View::Result { image } => format!(
            r#"<div class="result"><p>{}</p><img src="{}" width="600" height="600" alt="Generated image"></div>"#,
            RESULT_TEXT,
            escape(image)
        ),
        View::Placeholder => format!(r#"<div class="placeholder"><p>{}</p>{}</div>"#, PLACEHOLDER_TEXT, PLACEHOLDER_ICON),
    }
}

/// Full HTML document for `screen`.
pub fn render_page(screen: &Screen) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<section><div class="card"><h1>{}</h1><p>{}</p>{}</div><div class="views">{}"#,
        TITLE,
        BLURB,
        render_form(screen),
        render_view(&screen.view)
    );
    if let Some(message) = &screen.banner {
        let _ = write!(body, r#"<div class="error" role="alert">{}</div>"#, escape(message));
    }
    body.push_str("</div></section>");

    let refresh = if screen.view == View::Loading {
        format!(r#"<meta http-equiv="refresh" content="{}">"#, LOADING_REFRESH_SECS)
    } else {
        String::new()
    };
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title>{}<style>{}</style></head><body>{}</body></html>",
        TITLE,
        refresh,
        STYLE,
        layout_shell(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(view: View, banner: Option<&str>, prompt: &str) -> Screen {
        Screen {
            prompt: prompt.to_string(),
            submit_enabled: !prompt.is_empty(),
            view,
            banner: banner.map(str::to_string),
        }
    }

    #[test]
    fn layout_shell_wraps_any_content() {
        assert_eq!(layout_shell(""), r#"<main class="shell"></main>"#);
        assert_eq!(layout_shell("<p>hi</p>"), r#"<main class="shell"><p>hi</p></main>"#);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn empty_prompt_disables_button() {
        let html = render_page(&screen(View::Placeholder, None, ""));
        assert!(html.contains("<button type=\"submit\" disabled>Generate</button>"));
        assert!(html.contains(PLACEHOLDER_TEXT));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn loading_page_refreshes() {
        let html = render_page(&screen(View::Loading, None, "fox"));
        assert!(html.contains(LOADING_TEXT));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(!html.contains(RESULT_TEXT));
    }

    #[test]
    fn result_page_shows_image_and_banner() {
        let view = View::Result { image: "https://x/img.png?a=1&b=2".into() };
        let html = render_page(&screen(view, Some("<oops>"), "fox"));
        assert!(html.contains(r#"<img src="https://x/img.png?a=1&amp;b=2" width="600" height="600" alt="Generated image">"#));
        assert!(html.contains("&lt;oops&gt;"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn prompt_is_escaped_in_textarea() {
        let html = render_page(&screen(View::Placeholder, None, "</textarea><script>"));
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;</textarea>"));
    }
}
