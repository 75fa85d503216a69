use bookfind::{BookRecord, Favorites};

use std::fmt::Write;

/// The mutually exclusive display states of the results area.
///
/// Loading wins over an error, an error over the empty placeholder and the
/// placeholder over the results grid, matching the order in [`screen`].
#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Results(Vec<Card<'a>>),
}

/// One search result annotated with its favorite status.
#[derive(Debug, PartialEq)]
pub struct Card<'a> {
    pub book: &'a BookRecord,
    pub favorite: bool,
}

/// Reduces the search state and the favorites shelf to a single [`Screen`].
#[must_use]
pub fn screen<'a>(
    results: &'a [BookRecord],
    favorites: &'a Favorites,
    loading: bool,
    error: Option<&'a str>,
) -> Screen<'a> {
    if loading {
        Screen::Loading
    } else if let Some(message) = error {
        Screen::Error(message)
    } else if results.is_empty() {
        Screen::Empty
    } else {
        Screen::Results(
            results
                .iter()
                .map(|book| Card {
                    book,
                    favorite: favorites.is_favorite(book),
                })
                .collect(),
        )
    }
}

/// Renders a [`Screen`], with the favorites panel appended when
/// `show_favorites` is set.
#[must_use]
pub fn render(screen: &Screen<'_>, favorites: &Favorites, show_favorites: bool) -> String {
    let mut out = String::new();

    match screen {
        Screen::Loading => out.push_str("Searching Open Library..\n"),
        Screen::Error(message) => {
            let _ = writeln!(out, "{message}");
        }
        Screen::Empty => {
            out.push_str("Try searching for something like \"Harry Potter\" or \"Dune\".\n");
        }
        Screen::Results(cards) => {
            let _ = writeln!(out, "Found books ({}):", cards.len());
            for card in cards {
                push_card(&mut out, card.book, card.favorite);
            }
        }
    }

    if show_favorites {
        out.push('\n');
        out.push_str(&render_favorites(favorites));
    }

    out
}

/// Renders the favorites panel.
#[must_use]
pub fn render_favorites(favorites: &Favorites) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Favorites ({}):", favorites.len());

    if favorites.is_empty() {
        out.push_str("  No favorites yet - toggle the heart on a book to add one.\n");
    } else {
        for book in favorites.iter() {
            push_card(&mut out, book, true);
        }
    }

    out
}

/// One line label for a book, used by the interactive select prompt.
#[must_use]
pub fn card_label(book: &BookRecord, favorite: bool) -> String {
    format!(
        "{} {} - {} ({})",
        heart(favorite),
        book.title,
        authors(book),
        year(book)
    )
}

fn push_card(out: &mut String, book: &BookRecord, favorite: bool) {
    let _ = writeln!(out, "  {} {}", heart(favorite), book.title);
    let _ = writeln!(out, "      {} ({})", authors(book), year(book));
    let _ = writeln!(out, "      {}", book.cover_url());
}

fn authors(book: &BookRecord) -> String {
    if book.author_name.is_empty() {
        "Unknown Author".to_owned()
    } else {
        book.author_name.join(", ")
    }
}

fn year(book: &BookRecord) -> String {
    book.first_publish_year
        .map_or_else(|| "N/A".to_owned(), |year| year.to_string())
}

const fn heart(favorite: bool) -> char {
    if favorite {
        '\u{2665}' // ♥
    } else {
        '\u{2661}' // ♡
    }
}
