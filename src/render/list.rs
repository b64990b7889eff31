use std::fmt::Write;

use serde::Serialize;

use super::{card::Card, fallback, LOADING};
use crate::{
    config::Config,
    traits::DisplayTerminal,
    types::{cover::ImageSource, search_result::SearchResultItem},
    view::ViewState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "kebab-case")]
pub enum ListBody {
    Idle,
    Loading,
    Error(String),
    Empty(String),
    Cards(Vec<Card>),
}

/// Everything the list view shows: greeting and grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPage {
    pub greeting: String,
    pub body:     ListBody,
}

impl ListPage {
    pub fn new(
        state: &ViewState<Vec<SearchResultItem>>,
        query: Option<&str>,
        config: &Config,
    ) -> Self {
        let body = match state {
            ViewState::Idle => ListBody::Idle,
            ViewState::Loading => ListBody::Loading,
            ViewState::Error(message) => ListBody::Error(message.clone()),
            ViewState::Empty => ListBody::Empty(match query {
                Some(_) => fallback::NO_BOOKS_FOR_QUERY.to_string(),
                None => fallback::NO_BOOKS.to_string(),
            }),
            ViewState::Success(items) => {
                ListBody::Cards(items.iter().map(|item| Card::new(item, config)).collect())
            }
        };
        Self {
            greeting: format!("Welcome {}", config.display_name),
            body,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match &self.body {
            ListBody::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn images_mut(&mut self) -> impl Iterator<Item = &mut ImageSource> {
        let cards: &mut [Card] = match &mut self.body {
            ListBody::Cards(cards) => cards,
            _ => &mut [],
        };
        cards.iter_mut().map(|card| &mut card.image)
    }
}

impl DisplayTerminal for ListPage {
    fn fmt(&self, f: &mut String, config: &Config) -> std::fmt::Result {
        writeln!(f, "{}", config.output_header.format_str(&self.greeting))?;
        writeln!(f)?;
        match &self.body {
            ListBody::Idle => Ok(()),
            ListBody::Loading => writeln!(f, "{}", config.output_status.format_str(LOADING)),
            ListBody::Error(message) => writeln!(f, "{}", config.output_error.format_str(message)),
            ListBody::Empty(message) => writeln!(f, "{}", config.output_status.format_str(message)),
            ListBody::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    write!(f, "{} ", config.output_index.format_str(i + 1))?;
                    DisplayTerminal::fmt(card, f, config)?;
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}
