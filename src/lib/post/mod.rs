use std::{fmt, fs, io, path::Path};

use pulldown_cmark::Options;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{AuthorInfo, SiteConfig},
    front_matter::{FrontMatter, Metadata, field_text, is_present},
    markdown::render_html,
    types::PostDate,
    utils::url_path,
};

const REQUIRED_FIELDS: [&str; 2] = ["title", "date"];

/// One syndicated post.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub title: String,
    pub date: PostDate,
    /// Rendered HTML body.
    pub content: String,
    pub link: String,
    pub image: Option<String>,
    /// Front matter fields other than title, date and image, unchanged.
    pub extra: Metadata,
    pub author: Vec<AuthorInfo>,
}

impl Post {
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn description(&self) -> Option<String> {
        self.extra.get("description").and_then(field_text)
    }

    /// Categories from `tags` or `categories`, either a list or a single
    /// value.
    pub fn categories(&self) -> Vec<String> {
        let Some(value) = self.extra.get("tags").or_else(|| self.extra.get("categories")) else {
            return Vec::new();
        };
        match value {
            Value::Array(items) => items.iter().filter_map(field_text).collect(),
            other => field_text(other).into_iter().collect(),
        }
    }
}

/// Why a file produced no post.
#[derive(Debug)]
pub enum Skip {
    Read(io::Error),
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Read(e) => write!(f, "could not read file: {e}"),
            Skip::MissingFields(fields) => {
                write!(f, "missing required field(s): {}", fields.join(", "))
            }
        }
    }
}

/// Parse one discovered file. Every failure is logged and turned into
/// `None`; nothing escapes to the caller.
pub fn parse_post(path: &Path, site: &SiteConfig, options: Options) -> Option<Post> {
    match try_parse_post(path, site, options) {
        Ok(post) => {
            debug!(file = %path.display(), link = %post.link, "parsed post");
            Some(post)
        }
        Err(skip) => {
            warn!(file = %path.display(), "skipping post: {skip}");
            None
        }
    }
}

pub fn try_parse_post(path: &Path, site: &SiteConfig, options: Options) -> Result<Post, Skip> {
    let raw = fs::read_to_string(path).map_err(Skip::Read)?;
    Post::from_source(path, &raw, site, options)
}

impl Post {
    /// Build a post from the text of `path`.
    pub fn from_source(
        path: &Path,
        raw: &str,
        site: &SiteConfig,
        options: Options,
    ) -> Result<Self, Skip> {
        let FrontMatter { mut data, body } = FrontMatter::from(raw);

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !data.get(*field).is_some_and(is_present))
            .collect();
        if !missing.is_empty() {
            return Err(Skip::MissingFields(missing));
        }

        let title = data
            .remove("title")
            .as_ref()
            .and_then(field_text)
            .unwrap_or_default();

        let content = site
            .domain
            .absolutize_first_src(&render_html(&body, options));

        let image = match data.remove("image") {
            Some(Value::String(image)) => Some(site.domain.absolutize(&image)),
            Some(other) => {
                data.insert("image".to_string(), other);
                None
            }
            None => None,
        };

        let date = data
            .remove("date")
            .as_ref()
            .and_then(PostDate::from_value)
            .unwrap_or_else(|| {
                warn!(file = %path.display(), "unparseable date, using the current time");
                PostDate::now()
            });

        Ok(Self {
            title,
            date,
            content,
            link: post_link(path, site),
            image,
            extra: data,
            author: vec![site.author.clone()],
        })
    }
}

/// Absolute URL of a post: the path below the content root, minus the
/// markdown extension, on the site domain.
pub fn post_link(path: &Path, site: &SiteConfig) -> String {
    let rel = path.strip_prefix(&site.content_dir).unwrap_or(path);
    format!("{}{}", site.domain, url_path(rel))
}
