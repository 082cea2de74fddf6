//! Main application for the SOS GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Symbol;
use crate::config::{GameMode, MatchSettings};
use crate::engine::Difficulty;
use crate::rules::{GameOutcome, Side};

use super::board_view::{BoardScene, BoardView};
use super::game_state::GameState;
use super::theme::*;

/// Main SOS application
pub struct SosApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl SosApp {
    /// Create the app for the given match settings
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: MatchSettings) -> Self {
        Self {
            state: GameState::new(settings),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn side_color(side: Side) -> egui::Color32 {
        match side {
            Side::First => FIRST_SIDE,
            Side::Second => SECOND_SIDE,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        GameMode::HumanVsHuman,
                        GameMode::HumanVsAi { difficulty: Difficulty::Easy },
                        GameMode::HumanVsAi { difficulty: Difficulty::Hard },
                        GameMode::AiVsAi,
                    ];
                    for mode in modes {
                        if ui.button(format!("New Game ({})", mode.label())).clicked() {
                            self.state.restart(mode);
                            ui.close_menu();
                        }
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
                    ui.label(self.state.mode().label());
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

                self.render_scores_card(ui);
                ui.add_space(10.0);

                if self.state.is_human_turn() && !self.state.game.is_over() {
                    self.render_symbol_card(ui);
                    ui.add_space(10.0);
                }

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("S O S").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.game.board().size();
            ui.label(RichText::new(format!("{size}x{size} board")).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.game.to_move();
            let name = &self.state.game.scores()[side].name;
            let accent = Self::side_color(side);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(36.0, 36.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 16.0, accent);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("AI to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_scores_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for side in [Side::First, Side::Second] {
                let player = &self.state.game.scores()[side];
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(16.0).color(Self::side_color(side)));
                    ui.label(RichText::new(&player.name).size(14.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(player.score.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                });
                ui.add_space(4.0);
            }

            if let Some(last) = self.state.game.last_move() {
                if last.points > 0 {
                    let name = &self.state.game.scores()[last.side].name;
                    ui.label(
                        RichText::new(format!("{} scores {} point(s)!", name, last.points))
                            .size(11.0)
                            .color(WIN_HIGHLIGHT),
                    );
                }
            }
        });
    }

    /// Symbol picker for the human side
    fn render_symbol_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SYMBOL (S / O)").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for symbol in Symbol::ALL {
                    let selected = self.state.selected_symbol == symbol;
                    let fill = if selected { BUTTON_SELECTED } else { BUTTON_BG };
                    Frame::new()
                        .fill(fill)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new(symbol.to_string()).size(20.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.state.selected_symbol = symbol;
                            }
                        });
                    ui.add_space(4.0);
                }
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
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
                    if ui.add(egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if self.state.mode() == GameMode::HumanVsHuman {
                    btn_frame.show(ui, |ui| {
                        if ui.add(egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).strong().color(TIMER_NORMAL));
                    ui.label(RichText::new(format!("{} tied", result.tied)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            if let (Some(pos), Some(symbol)) = (result.best_move, result.symbol) {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("→ {} at ({}, {})", symbol, pos.row, pos.col))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let headline = match outcome {
            GameOutcome::Winner(side) => format!("{} WINS!", self.state.game.scores()[side].name),
            GameOutcome::Draw => "IT'S A DRAW".to_string(),
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

                    let scores = self.state.game.scores();
                    ui.label(
                        RichText::new(format!("{} - {}", scores.score(Side::First), scores.score(Side::Second)))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let button = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                .sense(egui::Sense::click());
                            if ui.add(button).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let lines = self.state.scored_lines();
            let interactive = !self.state.game.is_over()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();
            let scene = BoardScene {
                board: self.state.game.board(),
                symbol: self.state.selected_symbol,
                last_move: self.state.game.last_move().map(|m| m.pos),
                suggestion: self.state.suggestion,
                lines: &lines,
                interactive,
            };

            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place(pos) {
                    tracing::debug!(%err, "move rejected");
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::S) {
                self.state.selected_symbol = Symbol::S;
            }
            if i.key_pressed(egui::Key::O) {
                self.state.selected_symbol = Symbol::O;
            }
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) && self.state.mode() == GameMode::HumanVsHuman {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for SosApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.game.is_over() {
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
