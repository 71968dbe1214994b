//! Fixed data shown by the content views

/// A clickable entry with an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub icon_url: &'static str,
}

const EMAIL_ICON: &str = "https://img.icons8.com/ios/50/FFFFFF/new-post--v1.png";
const DISCORD_ICON: &str = "https://img.icons8.com/ios-filled/50/FFFFFF/discord-logo.png";
const INSTAGRAM_ICON: &str = "https://img.icons8.com/ios/50/FFFFFF/instagram-new--v1.png";

pub const HOME_BUTTONS: &[LinkEntry] = &[
    LinkEntry {
        name: "Email",
        url: "mailto:jovanstardev@gmail.com",
        icon_url: EMAIL_ICON,
    },
    LinkEntry {
        name: "Discord",
        url: "https://discord.gg/starstudiomc",
        icon_url: DISCORD_ICON,
    },
];

pub const CONTACTS: &[LinkEntry] = &[
    LinkEntry {
        name: "Email",
        url: "mailto:jovanstardev@gmail.com",
        icon_url: EMAIL_ICON,
    },
    LinkEntry {
        name: "Discord",
        url: "https://discord.gg/ffv7N2jkV8",
        icon_url: DISCORD_ICON,
    },
    LinkEntry {
        name: "Instagram",
        url: "https://instagram.com/jovanvuv3",
        icon_url: INSTAGRAM_ICON,
    },
];

pub const PROJECTS: &[LinkEntry] = &[
    LinkEntry {
        name: "BuiltByBit",
        url: "https://builtbybit.com/creators/jovanstar.407417/",
        icon_url: "https://avatars.githubusercontent.com/u/86993355?s=200&v=4",
    },
    LinkEntry {
        name: "My Studio",
        url: "https://discord.gg/starstudiomc",
        icon_url: "https://avatars.githubusercontent.com/u/71634013?s=200&v=4",
    },
];

pub const SOCIAL_LINKS: &[LinkEntry] = &[
    LinkEntry {
        name: "GitHub",
        url: "https://github.com/jovanstardev",
        icon_url: "https://img.icons8.com/ios-glyphs/60/FFFFFF/github.png",
    },
    LinkEntry {
        name: "Discord",
        url: "https://discord.com/starstudiomc",
        icon_url: "https://img.icons8.com/ios-glyphs/30/FFFFFF/discord-logo.png",
    },
    LinkEntry {
        name: "Instagram",
        url: "https://instagram.com/jovanvuv3",
        icon_url: INSTAGRAM_ICON,
    },
];

pub const GREETING: &str = "Hi I'm Jovan";
pub const PRONOUNS: &str = "(he/him)";
pub const BIO: &str = "I have been doing minecraft plugin/server development for more than 2 years! \
I also have my own studio where all my previous plugins can be viewed. You can see my works on the next page! \
I am ready to help your server with plugins or similar.";
pub const EXIST_BADGE: &str = "And i do exist :3";

/// Every remote image any view shows.
pub fn all_icon_urls() -> impl Iterator<Item = &'static str> {
    HOME_BUTTONS
        .iter()
        .chain(CONTACTS)
        .chain(PROJECTS)
        .chain(SOCIAL_LINKS)
        .map(|e| e.icon_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_match_the_site() {
        assert_eq!(CONTACTS.len(), 3);
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert!(CONTACTS.iter().chain(SOCIAL_LINKS).all(|e| !e.url.is_empty()));
    }

    #[test]
    fn icon_urls_are_http() {
        assert!(all_icon_urls().all(|u| u.starts_with("https://")));
    }
}
