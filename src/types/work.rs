use crate::{openlib_schema::work as schema, traits::ResultSet};

/// Full record of a single work as shown on the detail page.
///
/// Every field except the key and title may be missing upstream, so absence is
/// kept explicit here and turned into fallback text only when rendering.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct WorkDetail {
    pub identifier:         String,
    pub title:              String,
    pub authors:            Vec<AuthorRef>,
    pub first_publish_date: Option<String>,
    pub description:        Option<String>,
    pub covers:             Option<Vec<i64>>,
    pub subjects:           Option<Vec<String>>,
    pub subject_places:     Option<Vec<String>>,
    pub dewey_numbers:      Option<Vec<String>>,
    pub links:              Option<Vec<Link>>,
    pub excerpts:           Option<Vec<Excerpt>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    /// Path-like key, e.g. `/authors/OL26320A`.
    pub author_key: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url:   String,
    pub title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub excerpt: String,
}

impl From<schema::Work> for WorkDetail {
    fn from(work: schema::Work) -> Self {
        let authors = work
            .authors
            .unwrap_or_default()
            .into_iter()
            .map(|a| AuthorRef {
                author_key: a.author.and_then(|a| a.key),
            })
            .collect();
        Self {
            identifier: work.key,
            title: work.title,
            authors,
            first_publish_date: work.first_publish_date,
            description: work.description.map(|d| d.into_text()),
            covers: work.covers,
            subjects: work.subjects,
            subject_places: work.subject_places,
            dewey_numbers: work.dewey_number,
            links: work.links.map(|links| {
                links
                    .into_iter()
                    .map(|l| Link {
                        url:   l.url,
                        title: l.title,
                    })
                    .collect()
            }),
            excerpts: work.excerpts.map(|excerpts| {
                excerpts
                    .into_iter()
                    .map(|e| Excerpt {
                        excerpt: e.excerpt.into_text(),
                    })
                    .collect()
            }),
        }
    }
}

impl ResultSet for WorkDetail {
    // A parsed work is always something to show.
    fn is_empty_result(&self) -> bool {
        false
    }
}
