//! # CLI Module
//!
//! Subcommands of the `harmonify` binary. Each one takes already loaded
//! [`Settings`](crate::config::Settings) and reports through the colored
//! logging macros.
//!
//! - [`serve`] - run the web server
//! - [`search`] - run one search and print the page as a table
//! - [`lyrics`] - print lyrics for a title and artist
//!
//! ```bash
//! harmonify serve --open
//! harmonify search "Shape of You (Remix)" --sort-by date --sort-order desc
//! harmonify lyrics --title "Yellow" --artist "Coldplay"
//! ```

mod lyrics;
mod search;
mod serve;

pub use lyrics::lyrics;
pub use search::search;
pub use serve::serve;
