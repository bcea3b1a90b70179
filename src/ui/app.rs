//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{Disc, Game, GameOutcome, Pos};

use super::board_view::BoardView;
use super::theme::*;

/// Main Othello application
pub struct OthelloApp {
    game: Game,
    board_view: BoardView,
    last_move: Option<Pos>,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
            last_move: None,
        }
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Replace the finished or abandoned game with a fresh one
    fn new_game(&mut self) {
        self.game = Game::new();
        self.last_move = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "● {}   ○ {}",
                        self.game.count(Disc::Black),
                        self.game.count(Disc::White)
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);

                if self.game.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.game.turn() == Disc::Black;
            let (disc_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let disc_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                // Disc circle background
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disc_char,
                    egui::FontId::proportional(28.0),
                    disc_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.is_game_over() {
                        "Game over"
                    } else {
                        "To move"
                    };
                    ui.label(RichText::new(status).size(12.0).color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Render the score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            self.render_score_row(ui, Disc::Black);
            ui.add_space(6.0);
            self.render_score_row(ui, Disc::White);
        });
    }

    /// Render a single score row
    fn render_score_row(&self, ui: &mut egui::Ui, side: Disc) {
        let (symbol, name) = match side {
            Disc::Black => ("●", "Black"),
            Disc::White => ("○", "White"),
            Disc::Empty => return,
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(symbol).size(18.0).color(TEXT_PRIMARY));
            ui.label(RichText::new(name).size(13.0).color(TEXT_SECONDARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}", self.game.count(side)))
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.game.outcome() {
            GameOutcome::Winner(Disc::Black) => "● BLACK WINS",
            GameOutcome::Winner(_) => "○ WHITE WINS",
            GameOutcome::Draw => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(16.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(10.0);

                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(ui, &self.game, self.last_move);

            // Forward the click; a rejected move leaves the game untouched
            if let Some(pos) = clicked {
                if self.game.apply_move(pos).is_ok() {
                    self.last_move = Some(pos);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
