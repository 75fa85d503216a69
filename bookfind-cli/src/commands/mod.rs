use crate::{app, file::FileStore, interact};

use bookfind::{FavoritesStore, SearchSession};

use clap::Subcommand;
use log::trace;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search Open Library for books matching a title
    ///
    /// At most the first ten matches are shown. With the `--interact` flag a
    /// select prompt follows the results, where picking a book toggles it on
    /// the favorites shelf.
    #[clap(arg_required_else_help = true)]
    Search {
        /// The title to search for
        title: String,
    },
    /// Show the favorites shelf
    Favorites,
    /// Remove every book from the favorites shelf
    Clear,
}

impl Commands {
    pub fn execute(
        self,
        favorites: &mut FavoritesStore<FileStore>,
        interact: bool,
    ) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Search { title } => {
                let mut session = SearchSession::default();
                session.search(&title);

                if interact {
                    interact::toggle_favorites(&session, favorites)?;
                } else {
                    let screen = app::screen(
                        session.results(),
                        favorites.favorites(),
                        session.loading(),
                        session.error(),
                    );
                    print!("{}", app::render(&screen, favorites.favorites(), false));
                }
                Ok(String::new())
            }
            Commands::Favorites => {
                print!("{}", app::render_favorites(favorites.favorites()));
                Ok(String::new())
            }
            Commands::Clear => {
                trace!("Clearing the favorites shelf..");
                favorites.clear();
                Ok("Favorites cleared".to_owned())
            }
        }
    }
}
