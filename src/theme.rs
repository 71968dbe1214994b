//! Centralized theme constants for the portfolio
//! Colors, sizes, and frames used by the views should reference these

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::BLACK;
pub const BG_CARD: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 191); // black/75
pub const BG_TILE: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 15); // white/6
pub const BG_TILE_HOVER: Color32 = Color32::from_rgba_premultiplied(31, 31, 31, 31); // white/12
pub const BG_CHIP: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26); // white/10
pub const BG_CHIP_HOVER: Color32 = Color32::from_rgba_premultiplied(51, 51, 51, 51); // white/20

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_BODY: Color32 = Color32::from_rgba_premultiplied(217, 217, 217, 217); // white/85
pub const TEXT_NAV: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204); // white/80
pub const TEXT_FOOTER: Color32 = Color32::from_rgba_premultiplied(102, 102, 102, 102); // white/40
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_CARD: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26); // white/10
pub const BORDER_TILE: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500
pub const BORDER_CHIP: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63); // gray-600
pub const UNDERLINE: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400

// =============================================================================
// COLORS - Loading bar
// =============================================================================
pub const BAR_TRACK: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26); // white/10
pub const BAR_FILL: Color32 = Color32::from_rgba_premultiplied(179, 179, 179, 179); // white/70

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_LOADING_TITLE: f32 = 48.0;
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// SIZES
// =============================================================================
pub const CARD_MAX_WIDTH: f32 = 896.0;
pub const CARD_NUDGE_UP: f32 = 40.0;
pub const LOGO_SIZE: f32 = 40.0;
pub const AVATAR_SIZE: f32 = 112.0;
pub const CONTACT_ICON_SIZE: f32 = 64.0;
pub const PROJECT_ICON_SIZE: f32 = 40.0;
pub const INLINE_ICON_SIZE: f32 = 20.0;
pub const NAV_GAP: f32 = 32.0;
pub const LOADING_BAR: (f32, f32) = (160.0, 8.0);

// =============================================================================
// SIZES - Rounding
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_TILE: f32 = 12.0;
pub const RADIUS_CARD: f32 = 16.0;

pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: Color32::TRANSPARENT,
        window_fill: BG_BASE,
        extreme_bg_color: BG_BASE,
        hyperlink_color: TEXT_NAV,
        override_text_color: Some(TEXT_BODY),
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_SM);
        style.spacing.button_padding = egui::vec2(SPACING_LG, SPACING_MD);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Translucent content card holding header and active view
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_CARD))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XXL as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 20],
            blur: 50,
            spread: 0,
            color: Color32::from_black_alpha(160),
        })
}

/// Small bordered pill, e.g. the pronouns badge
pub fn chip_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CHIP)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_CHIP))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 2))
}

/// Returns (fill, draw_rect) for a custom-painted tile with hover/press effects.
/// Swaps to the hover fill on hover; also shrinks slightly while pressed.
pub fn tile_visual(
    response: &egui::Response,
    base_fill: Color32,
    hover_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (hover_fill, rect.shrink(1.5))
    } else if response.hovered() {
        (hover_fill, rect)
    } else {
        (base_fill, rect)
    }
}

/// Multiply alpha of a colour, used for fade-ins
pub fn faded(c: Color32, opacity: f32) -> Color32 {
    c.gamma_multiply(opacity.clamp(0.0, 1.0))
}
