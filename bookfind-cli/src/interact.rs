use bookfind::{Favorites, FavoritesStore, SearchSession, Store};

use eyre::{eyre, Context, Result};

use crate::app;

pub fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<usize> {
    let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    if let Some(index) = selection {
        Ok(index)
    } else {
        Err(eyre!("No selection made - cancelling operation"))
    }
}

/// Select loop over the search results: picking a book toggles its favorite
/// status, with extra entries to show or hide the favorites panel and to
/// finish.
pub fn toggle_favorites<S: Store>(
    session: &SearchSession,
    favorites: &mut FavoritesStore<S>,
) -> Result<()> {
    let mut show_favorites = false;

    loop {
        let screen = app::screen(
            session.results(),
            favorites.favorites(),
            session.loading(),
            session.error(),
        );
        println!("{}", app::render(&screen, favorites.favorites(), show_favorites));

        if session.results().is_empty() {
            return Ok(());
        }

        let items = select_items(session, favorites.favorites(), show_favorites);
        let selection = user_select("Toggle a favorite", &items)?;

        if selection == items.len() - 1 {
            return Ok(());
        }
        if selection == items.len() - 2 {
            show_favorites = !show_favorites;
            continue;
        }

        let book = session.results()[selection].clone();
        favorites.toggle(book);
    }
}

fn select_items(
    session: &SearchSession,
    favorites: &Favorites,
    show_favorites: bool,
) -> Vec<String> {
    let mut items: Vec<String> = session
        .results()
        .iter()
        .map(|book| app::card_label(book, favorites.is_favorite(book)))
        .collect();

    if show_favorites {
        items.push("Hide favorites".to_owned());
    } else {
        items.push(format!("Show favorites ({})", favorites.len()));
    }
    items.push("Done".to_owned());

    items
}
