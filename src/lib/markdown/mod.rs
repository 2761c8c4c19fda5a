use pulldown_cmark::{Options, Parser, TextMergeStream};

use crate::transformer::{
    WithTransformer, line_break::LineBreakTransformer, linkify::LinkifyTransformer,
};

/// Parser options for post bodies. Raw HTML is always passed through by
/// pulldown-cmark.
pub fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render a markdown body to HTML with line breaks kept and bare URLs
/// turned into links.
pub fn render_html(body: &str, options: Options) -> String {
    let events = TextMergeStream::new(Parser::new_ext(body, options))
        .with_transformer::<LinkifyTransformer<'_, _>>()
        .with_transformer::<LineBreakTransformer<_>>();

    let mut rendered = String::with_capacity(body.len() + body.len() / 2);
    pulldown_cmark::html::push_html(&mut rendered, events);
    rendered
}
