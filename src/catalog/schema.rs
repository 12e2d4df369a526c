use serde::Deserialize;

use crate::types::{
    book::{AuthorCredit, BookRecord},
    genre::GenreOption,
};

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct CategoriesResponse {
    pub data: CategoriesData,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct CategoriesData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub menu_text: String,
    pub cat_uri:   String,
}

impl From<Category> for GenreOption {
    fn from(category: Category) -> Self {
        Self {
            label: category.menu_text,
            value: category.cat_uri,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct WorksResponse {
    pub data: WorksData,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct WorksData {
    #[serde(default)]
    pub works: Vec<Work>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub isbn:             IsbnField,
    pub title:            String,
    pub seo_friendly_url: String,
    #[serde(default)]
    pub author:           Vec<WorkAuthor>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAuthor {
    pub author_display: String,
}

/// The upstream serves `isbn` as a bare number on some works and as a
/// string on others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IsbnField {
    Text(String),
    Numeric(u64),
}

impl Default for IsbnField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl IsbnField {
    fn into_string(self) -> String {
        match self {
            Self::Text(isbn) => isbn,
            Self::Numeric(isbn) => isbn.to_string(),
        }
    }
}

impl From<Work> for BookRecord {
    fn from(work: Work) -> Self {
        Self {
            isbn:             work.isbn.into_string(),
            title:            work.title,
            seo_friendly_url: work.seo_friendly_url,
            author:           work
                .author
                .into_iter()
                .map(|author| AuthorCredit {
                    author_display: author.author_display,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_categories_payload() {
        let body = r#"{
            "data": {
                "categories": [
                    { "menuText": "Fiction", "catUri": "/fiction", "hasChildren": true },
                    { "menuText": "Crime", "catUri": "/crime" }
                ]
            }
        }"#;
        let response: CategoriesResponse = serde_json::from_str(body).unwrap();
        let genres: Vec<GenreOption> = response
            .data
            .categories
            .into_iter()
            .map(GenreOption::from)
            .collect();
        assert_eq!(genres[0].label, "Fiction");
        assert_eq!(genres[0].value, "/fiction");
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn decodes_work_with_string_isbn() {
        let body = r#"{
            "data": {
                "works": [
                    {
                        "isbn": "9780141036144",
                        "title": "Nineteen Eighty-Four",
                        "seoFriendlyUrl": "/books/56743/nineteen-eighty-four",
                        "author": [ { "authorDisplay": "George Orwell" } ]
                    }
                ]
            }
        }"#;
        let response: WorksResponse = serde_json::from_str(body).unwrap();
        let book = BookRecord::from(response.data.works[0].clone());
        assert_eq!(book.isbn, "9780141036144");
        assert_eq!(book.author[0].author_display, "George Orwell");
    }

    #[test]
    fn decodes_work_with_numeric_isbn() {
        let body = r#"{
            "data": {
                "works": [
                    {
                        "isbn": 9780141036144,
                        "title": "Nineteen Eighty-Four",
                        "seoFriendlyUrl": "/books/56743/nineteen-eighty-four"
                    }
                ]
            }
        }"#;
        let response: WorksResponse = serde_json::from_str(body).unwrap();
        let book = BookRecord::from(response.data.works[0].clone());
        assert_eq!(book.isbn, "9780141036144");
        assert_eq!(book.author, vec![]);
    }

    #[test]
    fn decodes_empty_works_list() {
        let body = r#"{ "data": { "works": [] } }"#;
        let response: WorksResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.works, vec![]);
    }
}
