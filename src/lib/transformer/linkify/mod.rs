use std::{collections::VecDeque, sync::LazyLock};

use pulldown_cmark::{CowStr, Event, LinkType, Tag, TagEnd};
use regex::Regex;

use crate::transformer::Transformer;

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"'`]+"#).expect("static URL pattern is valid")
});

/// Wraps bare URLs in text with links. Text already inside a link (markdown
/// or inline `<a>`), an image or a code block is left alone.
pub struct LinkifyTransformer<'a, I> {
    inner: I,
    pending: VecDeque<Event<'a>>,
    // Depth of enclosing links, images and code blocks.
    opaque: usize,
}

impl<'a, I> Iterator for LinkifyTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let event = self.inner.next()?;
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => {
                self.opaque += 1;
            }
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                self.opaque = self.opaque.saturating_sub(1);
            }
            Event::InlineHtml(html) if opens_anchor(html) => self.opaque += 1,
            Event::InlineHtml(html) if closes_anchor(html) => {
                self.opaque = self.opaque.saturating_sub(1);
            }
            Event::Text(text) if self.opaque == 0 => {
                if let Some(mut events) = linkify_text(text) {
                    let first = events.pop_front();
                    self.pending = events;
                    return first;
                }
            }
            _ => {}
        }
        Some(event)
    }
}

impl<'a, I> Transformer<'a, I> for LinkifyTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            opaque: 0,
        }
    }
}

/// Split text around bare URLs. `None` when the text holds no URL.
fn linkify_text<'a>(text: &str) -> Option<VecDeque<Event<'a>>> {
    let mut events = VecDeque::new();
    let mut last = 0;

    for m in BARE_URL.find_iter(text) {
        let url = trim_trailing(m.as_str());
        if url.is_empty() {
            continue;
        }
        let start = m.start();
        let end = start + url.len();

        if start > last {
            events.push_back(Event::Text(CowStr::from(text[last..start].to_string())));
        }
        events.push_back(Event::Start(Tag::Link {
            link_type: LinkType::Inline,
            dest_url: CowStr::from(href_for(url)),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        events.push_back(Event::Text(CowStr::from(url.to_string())));
        events.push_back(Event::End(TagEnd::Link));
        last = end;
    }

    if events.is_empty() {
        return None;
    }
    if last < text.len() {
        events.push_back(Event::Text(CowStr::from(text[last..].to_string())));
    }
    Some(events)
}

/// Drop sentence punctuation that trails a URL, and a closing paren with no
/// opening partner.
fn trim_trailing(url: &str) -> &str {
    let mut url = url;
    loop {
        let trimmed = url.trim_end_matches(['.', ',', ':', ';', '!', '?', '*', '_', '~']);
        let trimmed = if trimmed.ends_with(')') && !trimmed.contains('(') {
            &trimmed[..trimmed.len() - 1]
        } else {
            trimmed
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}

fn opens_anchor(html: &str) -> bool {
    let html = html.trim_start().to_ascii_lowercase();
    html.starts_with("<a ") || html.starts_with("<a>")
}

fn closes_anchor(html: &str) -> bool {
    html.trim().eq_ignore_ascii_case("</a>")
}

fn href_for(url: &str) -> String {
    if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
        format!("http://{url}")
    } else {
        url.to_string()
    }
}
