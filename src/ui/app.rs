//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::{Mark, Outcome, ScoringMode};

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    /// Create the app for the given mode and search scoring
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, scoring: ScoringMode) -> Self {
        Self {
            state: GameState::with_scoring(mode, scoring),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, human_mark: Mark) {
        self.state.mode = GameMode::PvE { human_mark };
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play X)").clicked() {
                        self.new_game(Mark::X);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play O)").clicked() {
                        self.new_game(Mark::O);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", self.state.mode.human_mark()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
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

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let mark = self.state.current_turn;
                let color = match mark {
                    Mark::X => X_MARK,
                    Mark::O => O_MARK,
                };
                ui.label(RichText::new(mark.to_string()).size(32.0).strong().color(color));
                ui.add_space(12.0);

                let status = if self.state.is_ai_thinking() {
                    ("AI thinking...", STATUS_BUSY)
                } else if self.state.game_over.is_some() {
                    ("Game Over", WIN_HIGHLIGHT)
                } else if self.state.is_human_turn() {
                    ("Your turn", STATUS_READY)
                } else {
                    ("AI to move", STATUS_BUSY)
                };
                ui.label(RichText::new(status.0).size(14.0).color(status.1));
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
            });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).color(TEXT_SECONDARY));
                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(11.0).color(TEXT_SECONDARY));
                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(11.0).color(TEXT_SECONDARY));
                if let Some(pos) = result.best_move {
                    ui.label(
                        RichText::new(format!("-> cell {} (row {}, col {})", pos.to_index() + 1, pos.row + 1, pos.col + 1))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(RichText::new(format!("Thinking {:.2}s", elapsed.as_secs_f32())).size(10.0).color(STATUS_BUSY));
            } else if let Some(time) = self.state.ai_thinking_time {
                ui.label(RichText::new(format!("Last AI: {:.3}s", time.as_secs_f32())).size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.outcome {
            Outcome::Win(mark) if mark == self.state.mode.human_mark() => format!("{} wins! You beat the AI", mark),
            Outcome::Win(mark) => format!("Player {} wins!", mark),
            _ => "It's a tie!".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("Play Again").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(STATUS_WARNING)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.game_over.and_then(|r| r.winning_line);
            let accepting_input = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                winning_line,
                accepting_input,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
