use color_eyre::eyre::WrapErr;
use serde::Serialize;

use super::Feed;
use crate::config::AuthorInfo;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    favicon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<JsonAuthor<'a>>,
    items: Vec<JsonItem<'a>>,
}

#[derive(Serialize)]
struct JsonAuthor<'a> {
    name: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    content_html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    date_published: String,
    date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<JsonAuthor<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl<'a> From<&'a AuthorInfo> for JsonAuthor<'a> {
    fn from(author: &'a AuthorInfo) -> Self {
        Self {
            name: &author.name,
            url: &author.link,
        }
    }
}

pub(super) fn build_json(feed: &Feed) -> color_eyre::Result<String> {
    let options = feed.options();

    let items = feed
        .items()
        .iter()
        .map(|post| {
            let date = post.date.to_rfc3339();
            JsonItem {
                id: &post.link,
                url: &post.link,
                title: &post.title,
                content_html: &post.content,
                summary: post.description(),
                image: post.image.as_deref(),
                date_published: date.clone(),
                date_modified: date,
                author: post.author.first().map(JsonAuthor::from),
                tags: post.categories(),
            }
        })
        .collect();

    let doc = JsonFeed {
        version: JSON_FEED_VERSION,
        title: &options.title,
        home_page_url: &options.link,
        feed_url: &options.feed_links.json,
        description: &options.description,
        icon: options.image.as_deref(),
        favicon: options.favicon.as_deref(),
        author: options.author.as_ref().map(JsonAuthor::from),
        items,
    };

    serde_json::to_string_pretty(&doc).wrap_err("Failed to encode JSON feed")
}
