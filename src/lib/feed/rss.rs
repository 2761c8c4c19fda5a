use rss::{
    Category, Channel, Guid, Image, Item,
    extension::atom::{AtomExtension, Link},
};

use super::Feed;

const RSS_DOCS: &str = "https://validator.w3.org/feed/docs/rss2.html";

pub(super) fn build_rss(feed: &Feed) -> String {
    let options = feed.options();

    let mut channel = Channel::default();
    channel.set_title(options.title.clone());
    channel.set_link(options.link.clone());
    channel.set_description(options.description.clone());
    channel.set_copyright(Some(options.copyright.clone()));
    channel.set_generator(Some(options.generator.clone()));
    channel.set_docs(Some(RSS_DOCS.to_string()));
    channel.set_last_build_date(Some(feed.updated().to_rfc2822()));

    if let Some(url) = &options.image {
        let mut image = Image::default();
        image.set_url(url.clone());
        image.set_title(options.title.clone());
        image.set_link(options.link.clone());
        channel.set_image(Some(image));
    }

    {
        let mut link = Link::default();
        link.set_href(options.feed_links.rss.clone());
        link.set_rel("self".to_string());
        link.set_mime_type(Some("application/rss+xml".to_string()));
        let mut atom = AtomExtension::default();
        atom.set_links(vec![link]);
        channel.set_atom_ext(Some(atom));
    }

    let mut items = Vec::with_capacity(feed.items().len());
    for post in feed.items() {
        let mut item = Item::default();
        item.set_title(Some(post.title.clone()));
        item.set_link(Some(post.link.clone()));
        item.set_guid(Some(Guid {
            value: post.link.clone(),
            permalink: true,
        }));
        item.set_pub_date(Some(post.date.to_rfc2822()));
        item.set_description(post.description());
        item.set_content(Some(post.content.clone()));

        if let Some(author) = post.author.first() {
            item.set_author(Some(author.rss_author()));
        }

        let categories = post.categories();
        if !categories.is_empty() {
            let cats: Vec<Category> = categories
                .into_iter()
                .map(|name| {
                    let mut c = Category::default();
                    c.set_name(name);
                    c
                })
                .collect();
            item.set_categories(cats);
        }

        items.push(item);
    }

    channel.set_items(items);
    channel.to_string()
}
