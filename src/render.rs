use std::fmt::Write;

use crate::{
    config::DisplayConfig,
    types::{attributes::BlockAttributes, isbn},
};

/// What the block displays. Projected from persisted attributes alone, so
/// live preview and the frozen saved output are the same structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestsellerView {
    /// Genre prompt or error notice; no image, no links.
    Placeholder { notice: String },
    Book {
        heading:      String,
        title:        String,
        cover_url:    String,
        detail_url:   String,
        author_line:  String,
        /// Absent when the ISBN cannot be converted; a broken purchase URL
        /// is never emitted.
        purchase_url: Option<String>,
    },
}

/// Projects attributes into a view. Pure: same inputs, same output.
pub fn project(
    attributes: &BlockAttributes,
    error_notice: Option<&str>,
    display: &DisplayConfig,
) -> BestsellerView {
    if let Some(notice) = error_notice {
        return BestsellerView::Placeholder {
            notice: notice.to_string(),
        };
    }
    let Some(book) = &attributes.book_data else {
        return BestsellerView::Placeholder {
            notice: "Choose a genre...".to_string(),
        };
    };

    let mut author_line = book
        .author
        .first()
        .map(|author| author.author_display.clone())
        .unwrap_or_default();
    if let Some(second) = book.author.get(1) {
        // Carried separator: a comma then a literal line break.
        author_line.push_str(", \n");
        author_line.push_str(&second.author_display);
    }

    BestsellerView::Book {
        heading: attributes.title.clone(),
        title: book.title.clone(),
        cover_url: format!("{}{}", display.cover_host, book.isbn),
        detail_url: format!("{}{}", display.catalog_site, book.seo_friendly_url),
        author_line,
        purchase_url: isbn::to_isbn10(&book.isbn)
            .map(|isbn10| format!("{}{}", display.marketplace, isbn10)),
    }
}

/// Escapes the characters that would break out of markup text or a quoted
/// attribute. Everything interpolated into `to_html` is upstream-controlled
/// and goes through here.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl BestsellerView {
    /// Deterministic markup for the block, byte-for-byte reproducible from
    /// the same view.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"bestseller-block\">");
        match self {
            Self::Placeholder { notice } => {
                let _ = write!(html, "<p>{}</p>", escape_html(notice));
            }
            Self::Book {
                heading,
                title,
                cover_url,
                detail_url,
                author_line,
                purchase_url,
            } => {
                let title = escape_html(title);
                html.push_str("<div class=\"bestseller-display\">");
                let _ = write!(html, "<h2>{}</h2>", escape_html(heading));
                let _ = write!(
                    html,
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">\
                     <img src=\"{}\" alt=\"{title}\"/></a>",
                    escape_html(detail_url),
                    escape_html(cover_url),
                );
                let _ = write!(html, "<h3>{title}</h3>");
                let _ = write!(html, "<p>{}</p>", escape_html(author_line));
                if let Some(purchase_url) = purchase_url {
                    let _ = write!(
                        html,
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" \
                         class=\"buy-button\">Buy from Amazon</a>",
                        escape_html(purchase_url),
                    );
                }
                html.push_str("</div>");
            }
        }
        html.push_str("</div>");
        html
    }
}
