use atom_syndication::{Category, Content, Entry, Generator, Link, Person, Text};

use super::Feed;
use crate::config::AuthorInfo;

pub(super) fn build_atom(feed: &Feed) -> String {
    let options = feed.options();

    let mut atom = atom_syndication::Feed::default();
    atom.set_title(options.title.clone());
    atom.set_id(options.id.clone());
    atom.set_updated(feed.updated().as_fixed());
    atom.set_subtitle(Some(Text::plain(options.description.clone())));
    atom.set_rights(Some(Text::plain(options.copyright.clone())));
    atom.set_logo(options.image.clone());
    atom.set_icon(options.favicon.clone());

    {
        let mut generator = Generator::default();
        generator.set_value(options.generator.clone());
        atom.set_generator(Some(generator));
    }

    {
        let mut alternate = Link::default();
        alternate.set_href(options.link.clone());
        alternate.set_rel("alternate");

        let mut this = Link::default();
        this.set_href(options.feed_links.atom.clone());
        this.set_rel("self");
        this.set_mime_type(Some("application/atom+xml".to_string()));

        atom.set_links(vec![alternate, this]);
    }

    if let Some(author) = &options.author {
        atom.set_authors(vec![person(author)]);
    }

    let mut entries = Vec::with_capacity(feed.items().len());
    for post in feed.items() {
        let mut e = Entry::default();
        e.set_id(post.link.clone());
        e.set_title(post.title.clone());
        e.set_updated(post.date.as_fixed());
        e.set_published(Some(post.date.as_fixed()));
        e.set_authors(post.author.iter().map(person).collect::<Vec<_>>());

        let mut link = Link::default();
        link.set_href(post.link.clone());
        link.set_rel("alternate");
        e.set_links(vec![link]);

        if let Some(summary) = post.description() {
            e.set_summary(Some(Text::plain(summary)));
        }

        let mut content = Content::default();
        content.set_content_type(Some("html".to_string()));
        content.set_value(Some(post.content.clone()));
        e.set_content(Some(content));

        let categories = post.categories();
        if !categories.is_empty() {
            let categories: Vec<Category> = categories
                .into_iter()
                .map(|term| {
                    let mut c = Category::default();
                    c.set_term(term);
                    c
                })
                .collect();
            e.set_categories(categories);
        }

        entries.push(e);
    }

    atom.set_entries(entries);
    atom.to_string()
}

fn person(author: &AuthorInfo) -> Person {
    let mut person = Person::default();
    person.set_name(author.name.clone());
    person.set_email(Some(author.email.clone()));
    person.set_uri(Some(author.link.clone()));
    person
}
