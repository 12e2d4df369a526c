use tracing::{error, info};

use crate::{
    catalog::{CatalogApi, CatalogError},
    config::DisplayConfig,
    render::{self, BestsellerView},
    types::{attributes::BlockAttributes, book::BookRecord, genre::GenreOption},
};

/// Where the fetch cycle for the current genre stands.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Handle for one bestseller fetch. Tickets carry the monotonic token that
/// decides, on arrival, whether their result is still current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    genre: String,
}

/// One editing session over a single block.
///
/// Sole writer of the block's attributes: genre selections open fetch
/// tickets, and only the newest ticket's outcome may replace `book_data`
/// (last-request-wins). The error notice is display-only and never
/// persisted.
pub struct EditorSession<C> {
    client:       C,
    attributes:   BlockAttributes,
    state:        FetchState,
    genres:       Vec<GenreOption>,
    error_notice: Option<String>,
    last_token:   u64,
}

impl<C: CatalogApi> EditorSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            attributes: BlockAttributes::default(),
            state: FetchState::Idle,
            genres: Vec::new(),
            error_notice: None,
            last_token: 0,
        }
    }

    /// Re-hydrates a session from attributes serialized at a previous save.
    pub fn restore(client: C, json: &str) -> serde_json::Result<Self> {
        let attributes = BlockAttributes::from_json(json)?;
        let state = if attributes.book_data.is_some() {
            FetchState::Loaded
        } else {
            FetchState::Idle
        };
        Ok(Self {
            client,
            attributes,
            state,
            genres: Vec::new(),
            error_notice: None,
            last_token: 0,
        })
    }

    /// Serializes the attributes for the host to persist. State machine
    /// position and error notice deliberately do not survive.
    pub fn save(&self) -> serde_json::Result<String> {
        self.attributes.to_json()
    }

    pub fn attributes(&self) -> &BlockAttributes {
        &self.attributes
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn genres(&self) -> &[GenreOption] {
        &self.genres
    }

    pub fn error_notice(&self) -> Option<&str> {
        self.error_notice.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.attributes.title = title.into();
    }

    /// Loads the selectable genre list, once per session. Failure degrades
    /// the options to an empty list but does not block bestseller fetching
    /// for a genre already present from persisted state.
    pub async fn load_genres(&mut self) {
        match self.client.list_genres().await {
            Ok(genres) => {
                info!("Loaded {} genre options.", genres.len());
                self.genres = genres;
            }
            Err(e) => {
                error!("Genre list fetch failed: {e}.");
                self.genres = Vec::new();
                self.error_notice = Some("Error fetching genres".to_string());
            }
        }
    }

    /// Records a genre selection and opens a ticket for the one fetch that
    /// selection triggers. An empty selection resets to `Idle` without
    /// fetching.
    pub fn select_genre(&mut self, genre: &str) -> Option<FetchTicket> {
        self.attributes.genre = genre.to_string();
        if genre.is_empty() {
            self.state = FetchState::Idle;
            self.error_notice = None;
            return None;
        }
        self.last_token += 1;
        self.state = FetchState::Loading;
        Some(FetchTicket {
            token: self.last_token,
            genre: genre.to_string(),
        })
    }

    /// Runs the single fetch a ticket stands for.
    pub async fn run(
        &self,
        ticket: FetchTicket,
    ) -> (FetchTicket, Result<BookRecord, CatalogError>) {
        let result = self.client.fetch_bestseller(&ticket.genre).await;
        (ticket, result)
    }

    /// Applies a fetch outcome. A result whose ticket was superseded by a
    /// newer selection is dropped on arrival; a failure leaves the previous
    /// `book_data` untouched and raises the display notice.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<BookRecord, CatalogError>) {
        if ticket.token != self.last_token {
            info!("Dropping stale bestseller result for {}.", ticket.genre);
            return;
        }
        match result {
            Ok(book) => {
                info!("Bestseller for {} is {}.", ticket.genre, book.title);
                self.attributes.book_data = Some(book);
                self.error_notice = None;
                self.state = FetchState::Loaded;
            }
            Err(e) => {
                error!("Bestseller fetch for {} failed: {e}.", ticket.genre);
                self.error_notice = Some("Book not available".to_string());
                self.state = FetchState::Errored;
            }
        }
    }

    /// Select, fetch and apply in one await, for the non-overlapping path.
    pub async fn refresh(&mut self, genre: &str) -> &FetchState {
        if let Some(ticket) = self.select_genre(genre) {
            let (ticket, result) = self.run(ticket).await;
            self.complete(ticket, result);
        }
        &self.state
    }

    /// Live preview of the block in its current state.
    pub fn preview(&self, display: &DisplayConfig) -> BestsellerView {
        render::project(&self.attributes, self.error_notice.as_deref(), display)
    }

    /// The frozen markup persisted alongside the attributes at save time.
    /// Transient error notices never leak into it.
    pub fn saved_output(&self, display: &DisplayConfig) -> String {
        render::project(&self.attributes, None, display).to_html()
    }
}
