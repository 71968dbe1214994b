//! Reusable UI components
//!
//! Link tiles and the nav link are custom-painted so hover fills and
//! underlines match the rest of the site.

use crate::app::images::{ImageState, RemoteImages};
use crate::content::LinkEntry;
use crate::theme;
use eframe::egui;

/// Paint a remote image at `rect`; failed images show a placeholder glyph.
pub fn paint_remote_image(
    ui: &egui::Ui,
    images: &mut RemoteImages,
    url: &str,
    rect: egui::Rect,
    corner_radius: f32,
) {
    if !ui.is_rect_visible(rect) {
        return;
    }
    match images.get(ui.ctx(), url) {
        ImageState::Ready(texture) => {
            egui::Image::new(egui::load::SizedTexture::new(texture.id(), rect.size()))
                .corner_radius(corner_radius)
                .paint_at(ui, rect);
        }
        ImageState::Loading => {}
        ImageState::Failed => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::IMAGE,
                egui::FontId::proportional(rect.height() * 0.7),
                theme::TEXT_DIM,
            );
        }
    }
}

/// Remote image occupying its own layout slot.
pub fn remote_image(
    ui: &mut egui::Ui,
    images: &mut RemoteImages,
    url: &str,
    size: f32,
    corner_radius: f32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    paint_remote_image(ui, images, url, rect, corner_radius);
    response
}

/// Header navigation link. Bold-looking label, underlined on hover.
pub fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let color = if active { theme::TEXT_PRIMARY } else { theme::TEXT_NAV };
    let galley = ui.painter().layout_no_wrap(
        label.to_owned(),
        egui::FontId::proportional(theme::FONT_BODY),
        color,
    );
    let (rect, response) = ui.allocate_exact_size(galley.size(), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.galley(rect.min, galley, color);
        if response.hovered() {
            let y = rect.bottom() + 4.0;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::UNDERLINE),
            );
        }
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Layout and colours for a horizontal icon + label tile.
#[derive(Debug, Clone, Copy)]
pub struct TileStyle {
    pub padding: egui::Vec2,
    pub icon_size: f32,
    pub icon_radius: f32,
    pub gap: f32,
    pub font_size: f32,
    pub fill: egui::Color32,
    pub hover_fill: egui::Color32,
    pub border: Option<egui::Color32>,
    pub corner_radius: f32,
}

impl TileStyle {
    /// Home view Email/Discord buttons
    pub fn chip() -> Self {
        Self {
            padding: egui::vec2(12.0, 8.0),
            icon_size: theme::INLINE_ICON_SIZE,
            icon_radius: 0.0,
            gap: theme::SPACING_MD,
            font_size: theme::FONT_BODY,
            fill: theme::BG_CHIP,
            hover_fill: theme::BG_CHIP_HOVER,
            border: Some(theme::BORDER_TILE),
            corner_radius: theme::RADIUS_DEFAULT,
        }
    }

    /// Projects view cards
    pub fn project() -> Self {
        Self {
            padding: egui::vec2(12.0, 12.0),
            icon_size: theme::PROJECT_ICON_SIZE,
            icon_radius: theme::RADIUS_DEFAULT,
            gap: theme::SPACING_LG,
            font_size: theme::FONT_BODY,
            fill: theme::BG_TILE,
            hover_fill: theme::BG_TILE_HOVER,
            border: Some(theme::BORDER_TILE),
            corner_radius: theme::RADIUS_TILE,
        }
    }

    /// Links view rows
    pub fn row() -> Self {
        Self {
            padding: egui::vec2(16.0, 8.0),
            icon_size: theme::INLINE_ICON_SIZE,
            icon_radius: 0.0,
            gap: theme::SPACING_LG,
            font_size: theme::FONT_BODY,
            fill: theme::BG_TILE,
            hover_fill: theme::BG_TILE_HOVER,
            border: Some(theme::BORDER_TILE),
            corner_radius: theme::RADIUS_LARGE,
        }
    }
}

/// Icon + label tile. Returns the click response; callers open the link.
pub fn link_tile(
    ui: &mut egui::Ui,
    images: &mut RemoteImages,
    entry: &LinkEntry,
    style: TileStyle,
) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        entry.name.to_owned(),
        egui::FontId::proportional(style.font_size),
        theme::TEXT_PRIMARY,
    );
    let content = egui::vec2(
        style.icon_size + style.gap + galley.size().x,
        style.icon_size.max(galley.size().y),
    );
    let (rect, response) =
        ui.allocate_exact_size(content + style.padding * 2.0, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, rect) = theme::tile_visual(&response, style.fill, style.hover_fill, rect);
        let painter = ui.painter();
        painter.rect_filled(rect, style.corner_radius, fill);
        if let Some(border) = style.border {
            painter.rect_stroke(
                rect,
                style.corner_radius,
                egui::Stroke::new(theme::STROKE_DEFAULT, border),
                egui::StrokeKind::Inside,
            );
        }

        let icon_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + style.padding.x,
                rect.center().y - style.icon_size / 2.0,
            ),
            egui::vec2(style.icon_size, style.icon_size),
        );
        paint_remote_image(ui, images, entry.icon_url, icon_rect, style.icon_radius);

        let text_pos = egui::pos2(
            icon_rect.right() + style.gap,
            rect.center().y - galley.size().y / 2.0,
        );
        ui.painter().galley(text_pos, galley, theme::TEXT_PRIMARY);
    }

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(entry.url)
}

/// Contacts view card: large icon above the name, filling `width`.
pub fn contact_card(
    ui: &mut egui::Ui,
    images: &mut RemoteImages,
    entry: &LinkEntry,
    width: f32,
) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        entry.name.to_owned(),
        egui::FontId::proportional(theme::FONT_HEADING),
        theme::TEXT_PRIMARY,
    );
    let pad = theme::SPACING_XL;
    let height = pad + theme::CONTACT_ICON_SIZE + theme::SPACING_MD + galley.size().y + pad;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, rect) =
            theme::tile_visual(&response, theme::BG_TILE, theme::BG_TILE_HOVER, rect);
        ui.painter().rect_filled(rect, theme::RADIUS_TILE, fill);

        let icon_rect = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.top() + pad + theme::CONTACT_ICON_SIZE / 2.0),
            egui::Vec2::splat(theme::CONTACT_ICON_SIZE),
        );
        paint_remote_image(ui, images, entry.icon_url, icon_rect, 0.0);

        let text_pos = egui::pos2(
            rect.center().x - galley.size().x / 2.0,
            icon_rect.bottom() + theme::SPACING_MD,
        );
        ui.painter().galley(text_pos, galley, theme::TEXT_PRIMARY);
    }

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(entry.url)
}

/// Small bordered pill with text
pub fn badge(ui: &mut egui::Ui, text: &str) -> egui::Response {
    theme::chip_frame()
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_NAV),
            );
        })
        .response
}
