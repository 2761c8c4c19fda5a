//! A transformer is an adapter over an iterator of pulldown-cmark `Event`. It
//! intercepts any incoming event(s) that are of interest, and outputs
//! transformed event(s). For example, the line break transformer turns every
//! `Event::SoftBreak` into `Event::HardBreak` so that single newlines in the
//! source survive as `<br />` in the output.
use pulldown_cmark::Event;

pub mod line_break;
pub mod linkify;

/// A transformer over events, that takes in an inner iterator and returns
/// another iterator of events, which returns transformed events.
pub trait Transformer<'a, I>: Iterator<Item = Event<'a>> + Sized
where
    I: Iterator<Item = Event<'a>>,
{
    /// Wrap an inner iterator with the transformer
    fn transform(inner: I) -> Self;
}

/// Wrap an event iterator with another transformer, allowing for chaining.
pub trait WithTransformer<'a>: Iterator<Item = Event<'a>> + Sized {
    /// Wrap ourselves with some transformer
    fn with_transformer<T: Transformer<'a, Self>>(self) -> T {
        T::transform(self)
    }
}

/// Blanket implementation over any event iterator
impl<'a, I: Iterator<Item = Event<'a>>> WithTransformer<'a> for I {}
