//! Main application for the three-player Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::{GameConfig, PlayerKind};
use crate::Player;

use super::board_view::{BoardView, TurnView};
use super::game_state::{GameResult, GameState};
use super::theme::*;

/// Main three-player Othello application
pub struct TrithelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TrithelloApp {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

fn seat_label(kind: PlayerKind) -> &'static str {
    match kind {
        PlayerKind::Human => "Human",
        PlayerKind::GreedyAi => "Greedy AI",
        PlayerKind::WeightedSumAi => "Weighted sum AI",
        PlayerKind::WedgeAi => "Wedge AI",
    }
}

impl TrithelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config.players.clone(), config.depth),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (same seats)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("New Game (You vs 2 AI)").clicked() {
                        self.state.restart(vec![
                            PlayerKind::Human,
                            PlayerKind::WeightedSumAi,
                            PlayerKind::WedgeAi,
                        ]);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.state.restart(vec![PlayerKind::Human; 3]);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Watch AI)").clicked() {
                        self.state.restart(vec![
                            PlayerKind::GreedyAi,
                            PlayerKind::WeightedSumAi,
                            PlayerKind::WedgeAi,
                        ]);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (humans, ai) = self.state.seat_counts();
                    ui.label(format!("{humans} human, {ai} AI - depth {}", self.state.ai_depth()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_scores_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn disc_icon(ui: &mut egui::Ui, player: Player, size: f32) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
        let (main, highlight) = disc_colors(player);
        ui.painter().circle_filled(rect.center(), size * 0.45, main);
        ui.painter().circle_stroke(rect.center(), size * 0.45, egui::Stroke::new(1.0, highlight));
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            for seat in 0..self.state.seats.len() {
                Self::disc_icon(ui, Player(seat as u8), 16.0);
            }
            ui.add_space(4.0);
            ui.label(RichText::new("TRITHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Three-player Othello").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.current_turn;

            ui.horizontal(|ui| {
                Self::disc_icon(ui, player, 48.0);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(player.color_name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                    ui.label(
                        RichText::new(seat_label(self.state.seat(player)))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Disc count per player, leader highlighted
    fn render_scores_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISCS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let scores = self.state.board.scores();
            let leader = self.state.board.winner();
            for (seat, score) in scores.iter().enumerate() {
                let player = Player(seat as u8);
                ui.horizontal(|ui| {
                    Self::disc_icon(ui, player, 18.0);
                    ui.label(RichText::new(player.color_name()).size(13.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(seat_label(self.state.seat(player))).size(10.0).color(TEXT_MUTED));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(score.to_string()).size(14.0).strong();
                        let text = if leader == Some(player) {
                            text.color(WIN_HIGHLIGHT)
                        } else {
                            text.color(TEXT_SECONDARY)
                        };
                        ui.label(text);
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("New game").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });

                ui.add_space(4.0);

                if self.state.is_human_turn() {
                    btn_frame.show(ui, |ui| {
                        let label = egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY));
                        if ui.add(label.sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(
                            RichText::new(format!("{} candidates", result.candidates))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match result.winner {
                        Some(winner) => {
                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 60.0);
                                Self::disc_icon(ui, winner, 32.0);
                                ui.add_space(8.0);
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(winner.color_name().to_uppercase())
                                            .size(18.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    );
                                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                                });
                            });
                        }
                        None => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                        }
                    }

                    ui.add_space(4.0);
                    let scores: Vec<String> = result.scores.iter().map(|s| s.to_string()).collect();
                    ui.label(RichText::new(scores.join(" - ")).size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            );
                            if ui.add(label.sense(egui::Sense::click())).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(CENTRAL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let turn = TurnView {
                    current_turn: self.state.current_turn,
                    last_move: self.state.last_move,
                    suggested_move: self.state.suggested_move,
                    interactive: self.state.is_human_turn() && !self.state.is_ai_thinking(),
                };

                if let Some(pos) = self.board_view.show(ui, &self.state.board, &turn) {
                    if let Err(msg) = self.state.try_place(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.state.request_suggestion();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for TrithelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
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
