use std::fmt::Write;

use serde::Serialize;

use super::fallback;
use crate::{
    config::Config,
    navigation,
    traits::DisplayTerminal,
    types::{cover::ImageSource, search_result::SearchResultItem},
};

/// One entry of the results grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub image:          ImageSource,
    pub title:          String,
    pub author_text:    String,
    pub published_text: String,
    pub target:         String,
}

impl Card {
    pub fn new(item: &SearchResultItem, config: &Config) -> Self {
        Self {
            image:          fallback::cover_image(item.cover_id, config),
            title:          item.title.clone(),
            author_text:    fallback::card_author(item),
            published_text: fallback::card_published(item),
            target:         navigation::card_target(&item.identifier),
        }
    }
}

impl DisplayTerminal for Card {
    fn fmt(&self, f: &mut String, config: &Config) -> std::fmt::Result {
        writeln!(f, "{}", config.output_title.format_str(&self.title))?;
        writeln!(f, "    {}", config.output_author.format_str(&self.author_text))?;
        if !self.published_text.is_empty() {
            writeln!(
                f,
                "    {}",
                config.output_published.format_str(&self.published_text)
            )?;
        }
        writeln!(f, "    {}", config.output_cover.format_str(self.image.src()))?;
        write!(f, "    {}", config.output_target.format_str(&self.target))
    }
}
