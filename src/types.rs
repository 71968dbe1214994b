//! Common types and data structures

/// The four content views, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Contact,
    Projects,
    Links,
}

impl Route {
    /// Navigation order in the header.
    pub const ALL: [Route; 4] = [Route::Home, Route::Contact, Route::Projects, Route::Links];

    /// Resolve a path key. Unknown keys fall back to [`Route::Home`].
    ///
    /// Leading/trailing slashes and ASCII case are ignored, so `contact`,
    /// `/Contact/` and `/contact` all resolve the same way.
    pub fn resolve(path: &str) -> Self {
        Self::parse(path).unwrap_or_default()
    }

    /// Exact lookup without the fallback.
    pub fn parse(path: &str) -> Option<Self> {
        let key = path.trim().trim_matches('/');
        if key.is_empty() || key.eq_ignore_ascii_case("home") {
            return Some(Route::Home);
        }
        Self::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(key))
    }

    pub fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Contact => "contact",
            Route::Projects => "projects",
            Route::Links => "links",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Contact => "/contact",
            Route::Projects => "/projects",
            Route::Links => "/links",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Contact => "Contact",
            Route::Projects => "Projects",
            Route::Links => "Links",
        }
    }
}

/// Page metadata applied whenever a view mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub icon_url: &'static str,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: crate::constants::APP_NAME,
            description: "Your Description",
            keywords: "portfolio, developer, projects, coding, hardware",
            author: crate::constants::OWNER,
            icon_url: crate::constants::PROFILE_URL,
        }
    }
}

impl PageMeta {
    /// Multi-line summary used as hover text.
    pub fn summary(&self) -> String {
        format!(
            "{}\n{}\nKeywords: {}\nAuthor: {}",
            self.title, self.description, self.keywords, self.author
        )
    }
}
