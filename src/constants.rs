//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "JovanStar Portfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const OWNER: &str = "JovanStar";

/// Year used by the age label on the home view.
pub const BIRTH_YEAR: i32 = 2008;

/// How long the loading screen stays up before the shell takes over.
pub const LOADING_DURATION: Duration = Duration::from_millis(1600);
/// Progress bar fill time on the loading screen.
pub const LOADING_BAR_DURATION: Duration = Duration::from_millis(1200);
pub const LOADING_FADE_IN: Duration = Duration::from_millis(800);
/// One full dim-and-back cycle of the loading title.
pub const LOADING_PULSE_PERIOD: Duration = Duration::from_secs(2);

pub const HOME_FADE_IN: Duration = Duration::from_millis(1000);
pub const VIEW_FADE_IN: Duration = Duration::from_millis(800);

pub const LOGO_URL: &str = "https://i.ibb.co/RTNpJhSM/Copilot-20251019-203307-removebg-preview.png";
pub const PROFILE_URL: &str = "https://i.ibb.co/hJXwDvWD/profilepic.jpg";

/// Largest remote image accepted, in bytes.
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;
/// Concurrent remote image downloads.
pub const IMAGE_FETCH_CONCURRENCY: usize = 4;

/// Fonts probed for CJK glyph coverage when settings do not name one.
pub const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
];
