//! One feed model serialized three ways: RSS 2.0, Atom 1.0 and JSON Feed.
use color_eyre::Section;
use tracing::debug;

use crate::{
    config::{AuthorInfo, SiteConfig},
    post::Post,
    types::PostDate,
};

mod atom;
mod json;
mod rss;

/// Self-referential URLs for each output format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedLinks {
    pub rss: String,
    pub atom: String,
    pub json: String,
}

/// Feed-level metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub title: String,
    pub description: String,
    pub id: String,
    pub link: String,
    pub copyright: String,
    pub generator: String,
    pub feed_links: FeedLinks,
    pub author: Option<AuthorInfo>,
    pub image: Option<String>,
    pub favicon: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Feed {
    options: FeedOptions,
    items: Vec<Post>,
}

/// The three serialized documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFeeds {
    pub rss: String,
    pub atom: String,
    pub json: String,
}

impl RenderedFeeds {
    /// `(extension, payload)` pairs.
    pub fn outputs(&self) -> [(&'static str, &str); 3] {
        [
            ("xml", self.rss.as_str()),
            ("atom", self.atom.as_str()),
            ("json", self.json.as_str()),
        ]
    }
}

impl Feed {
    pub fn new(options: FeedOptions) -> Self {
        Self {
            options,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, post: Post) {
        self.items.push(post);
    }

    pub fn options(&self) -> &FeedOptions {
        &self.options
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    /// Newest item date, or the Unix epoch for an empty feed. Never the wall
    /// clock, so unchanged input gives unchanged output.
    pub fn updated(&self) -> PostDate {
        self.items
            .iter()
            .map(|post| post.date)
            .max()
            .unwrap_or_else(PostDate::epoch)
    }

    pub fn rss2(&self) -> String {
        rss::build_rss(self)
    }

    pub fn atom1(&self) -> String {
        atom::build_atom(self)
    }

    pub fn json1(&self) -> color_eyre::Result<String> {
        json::build_json(self)
    }

    pub fn render(&self) -> color_eyre::Result<RenderedFeeds> {
        Ok(RenderedFeeds {
            rss: self.rss2(),
            atom: self.atom1(),
            json: self
                .json1()
                .with_note(|| "While serializing the JSON feed.")?,
        })
    }
}

/// Attach the site author and the static image URLs to the base options, then
/// add every post in the given order.
pub fn assemble(site: &SiteConfig, posts: Vec<Post>) -> Feed {
    let mut options = site.feed_options.clone();
    options.author = Some(site.author.clone());
    options.image = Some(site.image.clone());
    options.favicon = Some(site.favicon.clone());

    let mut feed = Feed::new(options);
    posts.into_iter().for_each(|post| feed.add_item(post));
    debug!(items = feed.items().len(), "assembled feed");
    feed
}
