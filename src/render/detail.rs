use std::fmt::Write;

use serde::Serialize;

use super::{fallback, LOADING};
use crate::{
    config::Config,
    navigation::HOME_ROUTE,
    traits::DisplayTerminal,
    types::{cover::ImageSource, work::WorkDetail},
    view::ViewState,
};

pub const BACK_TO_HOME: &str = "\u{2190} Back to Home";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub title: String,
    pub url:   String,
}

/// Display model of a fetched work. Optional sections are empty when the
/// work doesn't have them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSheet {
    pub cover:           Option<ImageSource>,
    pub title:           String,
    pub authors:         Vec<String>,
    pub first_published: Option<String>,
    pub description:     String,
    pub subjects:        Vec<String>,
    pub links:           Vec<LinkItem>,
    pub excerpt:         Option<String>,
    pub subject_places:  Vec<String>,
    pub dewey:           Vec<String>,
}

impl WorkSheet {
    pub fn new(work: &WorkDetail, config: &Config) -> Self {
        let cover = work
            .covers
            .as_ref()
            .and_then(|covers| covers.first())
            .map(|id| fallback::cover_image(Some(id), config));
        let authors = work.authors.iter().map(fallback::author_label).collect();
        let links = fallback::list_or_empty(work.links.as_ref())
            .into_iter()
            .map(|l| LinkItem {
                title: l.title,
                url:   l.url,
            })
            .collect();
        let excerpt = work
            .excerpts
            .as_ref()
            .and_then(|e| e.first())
            .map(|e| e.excerpt.clone());
        Self {
            cover,
            title: work.title.clone(),
            authors,
            first_published: work.first_publish_date.clone(),
            description: fallback::description(work.description.as_deref()),
            subjects: fallback::list_or_empty(work.subjects.as_ref()),
            links,
            excerpt,
            subject_places: fallback::list_or_empty(work.subject_places.as_ref()),
            dewey: fallback::list_or_empty(work.dewey_numbers.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "kebab-case")]
pub enum DetailBody {
    Idle,
    Loading,
    Error(String),
    Work(Box<WorkSheet>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkPage {
    pub back:    String,
    pub home:    String,
    pub profile: String,
    pub body:    DetailBody,
}

impl WorkPage {
    pub fn new(state: &ViewState<WorkDetail>, config: &Config) -> Self {
        let body = match state {
            ViewState::Idle => DetailBody::Idle,
            ViewState::Loading => DetailBody::Loading,
            ViewState::Error(message) => DetailBody::Error(message.clone()),
            // A work is never empty, but if it were there'd be nothing to show.
            ViewState::Empty => DetailBody::Idle,
            ViewState::Success(work) => DetailBody::Work(Box::new(WorkSheet::new(work, config))),
        };
        Self {
            back: BACK_TO_HOME.into(),
            home: HOME_ROUTE.into(),
            profile: config.display_name.clone(),
            body,
        }
    }

    pub fn sheet(&self) -> Option<&WorkSheet> {
        match &self.body {
            DetailBody::Work(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub fn image_mut(&mut self) -> Option<&mut ImageSource> {
        match &mut self.body {
            DetailBody::Work(sheet) => sheet.cover.as_mut(),
            _ => None,
        }
    }
}

fn write_section(f: &mut String, config: &Config, heading: &str) -> std::fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", config.output_section.format_str(heading))
}

impl DisplayTerminal for WorkSheet {
    fn fmt(&self, f: &mut String, config: &Config) -> std::fmt::Result {
        writeln!(f, "{}", config.output_title.format_str(&self.title))?;
        writeln!(f, "{}", config.output_author.format_vec(&self.authors))?;
        if let Some(date) = &self.first_published {
            writeln!(
                f,
                "{}",
                config
                    .output_published
                    .format_str(format!("First Published: {date}"))
            )?;
        }
        if let Some(cover) = &self.cover {
            writeln!(f, "{}", config.output_cover.format_str(cover.src()))?;
        }

        write_section(f, config, "Description")?;
        writeln!(f, "{}", config.output_description.format_str(&self.description))?;

        if !self.subjects.is_empty() {
            write_section(f, config, "Subjects")?;
            for subject in &self.subjects {
                writeln!(f, "{}", config.output_subject.format_str(subject))?;
            }
        }
        if !self.links.is_empty() {
            write_section(f, config, "Useful Links")?;
            for link in &self.links {
                writeln!(
                    f,
                    "{}",
                    config
                        .output_link
                        .format_str(format!("{} ({})", link.title, link.url))
                )?;
            }
        }
        if let Some(excerpt) = &self.excerpt {
            write_section(f, config, "Excerpt")?;
            writeln!(f, "{}", config.output_excerpt.format_str(excerpt))?;
        }
        if !self.subject_places.is_empty() {
            write_section(f, config, "Subject Places")?;
            for place in &self.subject_places {
                writeln!(f, "{}", config.output_place.format_str(place))?;
            }
        }
        if !self.dewey.is_empty() {
            write_section(f, config, "Dewey Number")?;
            writeln!(f, "{}", config.output_dewey.format_vec(&self.dewey))?;
        }
        Ok(())
    }
}

impl DisplayTerminal for WorkPage {
    fn fmt(&self, f: &mut String, config: &Config) -> std::fmt::Result {
        writeln!(
            f,
            "{}    {}",
            config.output_target.format_str(&self.back),
            config.output_header.format_str(&self.profile)
        )?;
        writeln!(f)?;
        match &self.body {
            DetailBody::Idle => Ok(()),
            DetailBody::Loading => writeln!(f, "{}", config.output_status.format_str(LOADING)),
            DetailBody::Error(message) => writeln!(f, "{}", config.output_error.format_str(message)),
            DetailBody::Work(sheet) => DisplayTerminal::fmt(&**sheet, f, config),
        }
    }
}
