use pretty_assertions::assert_eq;

use biblio::catalog::{CatalogApi, CatalogError};
use biblio::config::DisplayConfig;
use biblio::editor::{EditorSession, FetchState};
use biblio::render::BestsellerView;
use biblio::types::book::{AuthorCredit, BookRecord};
use biblio::types::genre::GenreOption;

struct FictionCatalog;

impl CatalogApi for FictionCatalog {
    async fn list_genres(&self) -> Result<Vec<GenreOption>, CatalogError> {
        Ok(vec![GenreOption {
            label: "Fiction".to_string(),
            value: "/fiction".to_string(),
        }])
    }

    async fn fetch_bestseller(&self, cat_uri: &str) -> Result<BookRecord, CatalogError> {
        if cat_uri != "/fiction" {
            return Err(CatalogError::NotFound);
        }
        Ok(BookRecord {
            isbn:             "9780141036144".to_string(),
            title:            "Nineteen Eighty-Four".to_string(),
            seo_friendly_url: "/books/56743/nineteen-eighty-four".to_string(),
            author:           vec![
                AuthorCredit {
                    author_display: "George Orwell".to_string(),
                },
                AuthorCredit {
                    author_display: "Thomas Pynchon".to_string(),
                },
            ],
        })
    }
}

#[tokio::test]
async fn fiction_selection_renders_complete_block() {
    let display = DisplayConfig::default();
    let mut session = EditorSession::new(FictionCatalog);
    session.set_title("This week's bestseller");

    session.load_genres().await;
    assert_eq!(session.genres()[0].value, "/fiction");

    session.refresh("/fiction").await;
    assert_eq!(session.state(), &FetchState::Loaded);

    let view = session.preview(&display);
    let BestsellerView::Book {
        author_line,
        cover_url,
        purchase_url,
        ..
    } = &view
    else {
        panic!("expected a book view");
    };

    assert_eq!(author_line, "George Orwell, \nThomas Pynchon");
    assert!(cover_url.contains("9780141036144"));
    assert!(purchase_url.as_ref().unwrap().ends_with("/0141036141"));

    let html = view.to_html();
    assert!(html.contains("George Orwell, \nThomas Pynchon"));
    assert!(html.contains("This week's bestseller"));
}

#[tokio::test]
async fn saved_attributes_re_render_identically_without_network() {
    let display = DisplayConfig::default();
    let mut session = EditorSession::new(FictionCatalog);
    session.set_title("This week's bestseller");
    session.refresh("/fiction").await;

    let frozen = session.saved_output(&display);
    let saved = session.save().unwrap();

    // Rehydration alone must reproduce the exact same markup; the restored
    // session's catalog is never called.
    let restored = EditorSession::restore(FictionCatalog, &saved).unwrap();
    assert_eq!(restored.state(), &FetchState::Loaded);
    assert_eq!(restored.saved_output(&display), frozen);
    assert_eq!(restored.preview(&display).to_html(), frozen);
}
