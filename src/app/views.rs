//! View rendering (header, the four content views, footer)

use super::App;
use crate::constants::{LOGO_URL, OWNER, PROFILE_URL};
use crate::content::{self, LinkEntry};
use crate::theme;
use crate::types::Route;
use crate::ui::components::{self, TileStyle};
use crate::utils::open_link;
use chrono::Datelike;
use eframe::egui;
use std::time::Instant;

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_TITLE)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_XL);
}

fn open_if_clicked(response: &egui::Response, entry: &LinkEntry) {
    if response.clicked() {
        open_link(entry.url);
    }
}

impl App {
    /// Content card with header and the active view, nudged above center.
    pub(crate) fn render_shell(&mut self, ctx: &egui::Context, now: Instant) {
        let screen = ctx.screen_rect();
        let inner_width = (screen.width() - 2.0 * theme::SPACING_XL).min(theme::CARD_MAX_WIDTH)
            - 2.0 * theme::SPACING_XXL;

        egui::Area::new(egui::Id::new("shell_card"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -theme::CARD_NUDGE_UP))
            .show(ctx, |ui| {
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(inner_width.max(200.0));
                    self.render_header(ui, now);
                    ui.add_space(theme::SPACING_XXL);

                    let opacity = self.router.opacity(now);
                    ui.scope(|ui| {
                        ui.set_opacity(opacity);
                        match self.router.current() {
                            Route::Home => self.render_home(ui),
                            Route::Contact => self.render_contact(ui),
                            Route::Projects => self.render_projects(ui),
                            Route::Links => self.render_links(ui),
                        }
                    });
                });
            });

        self.render_footer(ctx);

        if self.router.is_animating(now) {
            ctx.request_repaint();
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui, now: Instant) {
        let current = self.router.current();
        let mut clicked = None;

        ui.horizontal(|ui| {
            components::remote_image(
                ui,
                &mut self.images,
                LOGO_URL,
                theme::LOGO_SIZE,
                theme::RADIUS_DEFAULT,
            )
            .on_hover_text(self.meta.summary());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = theme::NAV_GAP;
                for route in Route::ALL.into_iter().rev() {
                    if components::nav_link(ui, route.label(), route == current).clicked() {
                        clicked = Some(route);
                    }
                }
            });
        });

        if let Some(route) = clicked {
            self.router.navigate(route.path(), now);
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_top(|ui| {
            let avatar = components::remote_image(
                ui,
                &mut self.images,
                PROFILE_URL,
                theme::AVATAR_SIZE,
                theme::RADIUS_DEFAULT,
            );
            ui.painter().rect_stroke(
                avatar.rect,
                theme::RADIUS_DEFAULT,
                egui::Stroke::new(2.0, theme::BORDER_TILE),
                egui::StrokeKind::Outside,
            );
            ui.add_space(theme::SPACING_XL);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_LG;
                    ui.label(
                        egui::RichText::new(content::GREETING)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    components::badge(ui, content::PRONOUNS);
                });

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label("Im ");
                    ui.label(egui::RichText::new(self.age.text()).monospace());
                    ui.label(" years old.");
                });

                ui.add_space(theme::SPACING_LG);
                ui.label(egui::RichText::new(content::BIO).size(theme::FONT_BODY));
                ui.add_space(theme::SPACING_SM);
                components::badge(ui, content::EXIST_BADGE);

                ui.add_space(theme::SPACING_XL);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_LG;
                    for entry in content::HOME_BUTTONS {
                        let response =
                            components::link_tile(ui, &mut self.images, entry, TileStyle::chip());
                        open_if_clicked(&response, entry);
                    }
                });
            });
        });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        heading(ui, "Contacts");
        ui.spacing_mut().item_spacing.x = theme::SPACING_XXL;
        ui.columns(content::CONTACTS.len(), |columns| {
            for (column, entry) in columns.iter_mut().zip(content::CONTACTS) {
                let width = column.available_width();
                let response = components::contact_card(column, &mut self.images, entry, width);
                open_if_clicked(&response, entry);
            }
        });
    }

    fn render_projects(&mut self, ui: &mut egui::Ui) {
        heading(ui, "Projects");
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_XXL;
            for entry in content::PROJECTS {
                let response =
                    components::link_tile(ui, &mut self.images, entry, TileStyle::project());
                open_if_clicked(&response, entry);
            }
        });
    }

    fn render_links(&mut self, ui: &mut egui::Ui) {
        heading(ui, "Links");
        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = theme::SPACING_LG;
            for entry in content::SOCIAL_LINKS {
                let response = components::link_tile(ui, &mut self.images, entry, TileStyle::row());
                open_if_clicked(&response, entry);
            }
        });
    }

    fn render_footer(&self, ctx: &egui::Context) {
        let year = chrono::Local::now().year();
        egui::Area::new(egui::Id::new("footer"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -theme::SPACING_XL))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("© {year} {OWNER}"))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_FOOTER),
                );
            });
    }
}
