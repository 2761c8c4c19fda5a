use pulldown_cmark::Event;

use crate::transformer::Transformer;

/// Renders single newlines inside a paragraph as line breaks instead of
/// folding them into one line.
pub struct LineBreakTransformer<I> {
    inner: I,
}

impl<'a, I> Iterator for LineBreakTransformer<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Event::SoftBreak => Some(Event::HardBreak),
            other => Some(other),
        }
    }
}

impl<'a, I> Transformer<'a, I> for LineBreakTransformer<I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self { inner }
    }
}
