//! Page Selection
//!
//! The site is one page with a switchable main region. `Page` is the single
//! piece of navigation state; every identifier maps to some page.

use serde::{Deserialize, Serialize};

/// Pages reachable from the header navigation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Rooms,
    Gallery,
    Reviews,
    Contact,
    Chatbot,
}

impl Page {
    /// Navigation order
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Rooms,
        Self::Gallery,
        Self::Reviews,
        Self::Contact,
        Self::Chatbot,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Rooms => "rooms",
            Self::Gallery => "gallery",
            Self::Reviews => "reviews",
            Self::Contact => "contact",
            Self::Chatbot => "chatbot",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Rooms => "Rooms",
            Self::Gallery => "Gallery",
            Self::Reviews => "Reviews",
            Self::Contact => "Contact",
            Self::Chatbot => "Ask Us",
        }
    }

    /// Resolve an identifier (a nav id or a URL hash like `#gallery`).
    /// Anything unrecognized lands on the home page.
    pub fn from_id(id: &str) -> Self {
        let id = id.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
