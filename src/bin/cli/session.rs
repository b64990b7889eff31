use anyhow::Result;
use folio::{
    config::Config,
    navigation::{self, Route, HOME_ROUTE},
    openlibrary::{Endpoints, OpenLibrary},
    render::{ListPage, WorkPage},
    traits::DisplayTerminal,
    view::{DetailView, ListView},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// One list view and one detail view, with the list mounted while it is on
/// screen and the detail view while a work is open.
pub struct Session {
    config: Config,
    list:   ListView<reqwest::Client>,
    detail: DetailView<reqwest::Client>,
    screen: Screen,
}

impl Session {
    pub fn new(config: Config, client: reqwest::Client) -> Self {
        let api = OpenLibrary::new(client, Endpoints::from_config(&config));
        Self {
            list: ListView::new(api.clone(), config.race_policy),
            detail: DetailView::new(api, config.race_policy),
            screen: Screen::List,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Route path of whatever is on screen.
    pub fn location(&self) -> String {
        match (self.screen, self.detail.identifier()) {
            (Screen::Detail, Some(id)) => Route::Work(id.to_string()).to_string(),
            _ => HOME_ROUTE.to_string(),
        }
    }

    /// Show the list, mounting it (and so loading the default listing) if it
    /// isn't already.
    pub async fn home(&mut self) -> Result<()> {
        if self.screen == Screen::Detail {
            self.detail.unmount();
            self.screen = Screen::List;
        }
        if !self.list.is_mounted() {
            self.print_loading_list()?;
            self.list.mount().await;
        }
        self.print_list().await
    }

    pub async fn search(&mut self, query: &str) -> Result<()> {
        if self.screen == Screen::Detail {
            self.detail.unmount();
            self.screen = Screen::List;
        }
        let Some(pending) = self.list.begin_search(query) else {
            debug!("Blank query, nothing to do");
            return Ok(());
        };
        self.print_list().await?;
        let outcome = self.list.run(&pending).await;
        self.list.finish(pending, outcome);
        self.print_list().await
    }

    /// Follow a card number from the grid or a route path.
    pub async fn open(&mut self, target: &str) -> Result<()> {
        if let Ok(n) = target.parse::<usize>() {
            if self.screen != Screen::List {
                anyhow::bail!("Card numbers refer to the list, go back to it first");
            }
            let Some(route) = n.checked_sub(1).and_then(|i| self.list.select(i)) else {
                anyhow::bail!("There is no card number {n}");
            };
            return self.go(Route::parse(&route)).await;
        }
        self.go(Route::parse(target)).await
    }

    pub async fn go(&mut self, route: Route) -> Result<()> {
        match route {
            Route::Home => self.home().await,
            Route::Work(id) => self.work(&id).await,
            Route::NotFound(path) => anyhow::bail!("Nothing lives at {path}"),
        }
    }

    pub async fn work(&mut self, id: &str) -> Result<()> {
        if self.screen == Screen::List {
            self.list.unmount();
            self.screen = Screen::Detail;
        }
        if self.detail.identifier() != Some(navigation::work_id(id).unwrap_or(id)) {
            let pending = self.detail.begin(id);
            self.print_detail().await?;
            let outcome = self.detail.run(&pending).await;
            self.detail.finish(pending, outcome);
        }
        self.print_detail().await
    }

    /// Let the user choose a card interactively.
    pub async fn pick(&mut self) -> Result<()> {
        if self.screen != Screen::List {
            anyhow::bail!("Go back to the list first");
        }
        let page = ListPage::new(self.list.state(), self.list.query(), &self.config);
        let options = page
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}. {} ({})", i + 1, card.title, card.author_text))
            .collect::<Vec<String>>();
        if options.is_empty() {
            anyhow::bail!("There are no books to pick from");
        }
        let Some(choice) = inquire::Select::new("Open which book?", options.clone())
            .prompt_skippable()?
        else {
            return Ok(());
        };
        let index = options
            .iter()
            .position(|o| *o == choice)
            .ok_or_else(|| anyhow::anyhow!("Unknown choice"))?;
        match self.list.select(index) {
            Some(target) => self.go(Route::parse(&target)).await,
            None => anyhow::bail!("The list changed, pick again"),
        }
    }

    fn print_loading_list(&self) -> Result<()> {
        let page = ListPage::new(
            &folio::view::ViewState::Loading,
            None,
            &self.config,
        );
        println!("{}", page.fmt_to_string(&self.config)?);
        Ok(())
    }

    async fn print_list(&self) -> Result<()> {
        let mut page = ListPage::new(self.list.state(), self.list.query(), &self.config);
        if self.config.probe_covers {
            for image in page.images_mut() {
                self.list.api().probe_cover(image).await;
            }
        }
        println!("{}", page.fmt_to_string(&self.config)?);
        Ok(())
    }

    async fn print_detail(&self) -> Result<()> {
        let mut page = WorkPage::new(self.detail.state(), &self.config);
        if self.config.probe_covers {
            if let Some(image) = page.image_mut() {
                self.detail.api().probe_cover(image).await;
            }
        }
        println!("{}", page.fmt_to_string(&self.config)?);
        Ok(())
    }
}
