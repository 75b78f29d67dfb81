#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::path::PathBuf;

use cold_brew_calculator::{
    brew::{
        format_ratio,
        guide::{brewing_instructions, SERVING_TIPS},
        BrewModel, ConcentrateStrength, Dilution, InputMode, Phase, RoastLevel, ServingStrength,
    },
    config,
    quantity::UnitFormatter,
};
use eframe::{egui, App, Frame};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cold_brew_calculator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --config <path> 만 지원한다.
    let mut config_path = PathBuf::from(config::DEFAULT_CONFIG_FILE);
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        if let Some(val) = a.strip_prefix("--config=") {
            config_path = PathBuf::from(val);
        } else if a == "--config" || a == "-c" {
            if let Some(val) = args.next() {
                config_path = PathBuf::from(val);
            }
        }
    }

    let app_cfg = match config::load_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "config load failed, using defaults");
            config::Config::default()
        }
    };
    let model = match app_cfg.build_model() {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "invalid session defaults, using built-in values");
            BrewModel::default()
        }
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([780.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cold Brew Calculator",
        options,
        Box::new(move |_cc| {
            let fmt = UnitFormatter::from(&app_cfg.default_units);
            Box::new(GuiApp::new(model, fmt))
        }),
    )
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn summary_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(egui::RichText::new(value).strong());
    ui.end_row();
}

struct GuiApp {
    model: BrewModel,
    fmt: UnitFormatter,
    status: Option<String>,
}

impl GuiApp {
    fn new(model: BrewModel, fmt: UnitFormatter) -> Self {
        Self {
            model,
            fmt,
            status: None,
        }
    }

    fn report<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        self.status = result.err().map(|e| e.to_string());
    }

    /// 단계 전환 버튼.
    fn ui_phase_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (phase, label) in [
                (Phase::Prepare, "Prepare Extract"),
                (Phase::Serve, "Serve Brew"),
            ] {
                let selected = self.model.phase() == phase;
                let button = egui::Button::new(label)
                    .fill(if selected {
                        ui.visuals().selection.bg_fill
                    } else {
                        ui.visuals().extreme_bg_color
                    })
                    .min_size(egui::vec2(160.0, 32.0));
                if ui.add(button).clicked() {
                    self.model.set_phase(phase);
                }
            }
        });
    }

    fn ui_prepare(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            "Prepare Your Extract",
            "Pick which amount you control; the other is calculated.",
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            label_with_tip(ui, "What do you want to control?", "Driven input");
            let mode = self.model.brew.input_mode();
            if ui.selectable_label(mode == InputMode::Coffee, "Coffee Amount").clicked() {
                let r = self.model.brew.set_input_mode(InputMode::Coffee);
                self.report(r);
            }
            if ui.selectable_label(mode == InputMode::Water, "Water Amount").clicked() {
                let r = self.model.brew.set_input_mode(InputMode::Water);
                self.report(r);
            }
        });
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("Concentrate Strength");
            ui.horizontal_wrapped(|ui| {
                let current = self.model.brew.strength();
                for s in ConcentrateStrength::ALL {
                    let resp = ui
                        .selectable_label(current == s, s.preset().name)
                        .on_hover_text(format!("Dilute {}", s.preset().dilution));
                    if resp.clicked() {
                        let r = self.model.brew.select_strength(s);
                        self.report(r);
                    }
                }
            });
            ui.add_space(6.0);

            let mode = self.model.brew.input_mode();
            egui::Grid::new("amount_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let tag = |m: InputMode| if mode == m { "Control" } else { "Calculated" };
                    ui.label(format!("Coffee ({})", tag(InputMode::Coffee)));
                    let mut coffee = self.model.brew.coffee_amount();
                    let resp = ui.add_enabled(
                        mode == InputMode::Coffee,
                        egui::DragValue::new(&mut coffee)
                            .speed(1.0)
                            .clamp_range(1.0..=5000.0)
                            .suffix(" g"),
                    );
                    if resp.changed() {
                        let r = self.model.brew.set_coffee_amount(coffee);
                        self.report(r);
                    }
                    ui.end_row();

                    ui.label(format!("Water ({})", tag(InputMode::Water)));
                    let mut water = self.model.brew.water_amount();
                    let resp = ui.add_enabled(
                        mode == InputMode::Water,
                        egui::DragValue::new(&mut water)
                            .speed(5.0)
                            .clamp_range(1.0..=40000.0)
                            .suffix(" ml"),
                    );
                    if resp.changed() {
                        let r = self.model.brew.set_water_amount(water);
                        self.report(r);
                    }
                    ui.end_row();
                });
            ui.add_space(6.0);

            ui.label("Roast Level");
            ui.horizontal(|ui| {
                let current = self.model.brew.roast_level();
                for r in RoastLevel::ALL {
                    if ui.selectable_label(current == r, r.name()).clicked() {
                        let res = self.model.brew.set_roast_level(r);
                        self.report(res);
                    }
                }
            });
        });
        ui.add_space(8.0);

        let summary = self.model.concentrate();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Your Recipe");
            egui::Grid::new("recipe_grid").num_columns(2).show(ui, |ui| {
                summary_row(ui, "Coffee:", self.fmt.mass(summary.coffee_g));
                summary_row(ui, "Water:", self.fmt.volume(summary.water_ml));
                summary_row(ui, "Ratio:", format_ratio(summary.actual_ratio));
                summary_row(
                    ui,
                    "Estimated Yield:",
                    format!("{} concentrate", self.fmt.volume(summary.estimated_yield_ml)),
                );
            });
        });

        let guide = brewing_instructions(self.model.brew.roast_level());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Brewing Instructions");
            ui.label(format!("Grind: {}", guide.grind));
            ui.label(format!("Steep Time: {}", guide.steep_time));
            ui.label(format!("Method: {}", guide.method));
            ui.label(format!("Strain: {}", guide.strain));
            ui.label(egui::RichText::new(guide.roast_note).italics());
        });
        ui.add_space(8.0);

        if ui.button("✓ Done Brewing - Go to Serving →").clicked() {
            let r = self.model.finalize_concentrate().map(|_| ());
            self.report(r);
        }
    }

    fn ui_serve(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            "Serve Your Brew",
            "Mix concentrate with water to fill the dispenser.",
        );
        ui.add_space(8.0);

        match self.model.snapshot().copied() {
            Some(snap) => {
                ui.label(format!(
                    "You made: {} ({} ratio)",
                    snap.strength(),
                    format_ratio(Some(snap.ratio()))
                ));
            }
            None => {
                ui.label("What concentrate did you make?");
                ui.horizontal_wrapped(|ui| {
                    for s in ConcentrateStrength::ALL {
                        if ui.button(s.preset().name).clicked() {
                            self.model.choose_concentrate_preset(s);
                        }
                    }
                });
            }
        }
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("serve_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(ui, "Nitro Dispenser Capacity", "100 - 1000 ml");
                    let mut capacity = self.model.serving.dispenser_capacity();
                    let resp = ui.add(
                        egui::DragValue::new(&mut capacity)
                            .speed(10.0)
                            .clamp_range(100.0..=1000.0)
                            .fixed_decimals(0)
                            .suffix(" ml"),
                    );
                    if resp.changed() {
                        let r = self.model.serving.set_dispenser_capacity(capacity);
                        self.report(r);
                    }
                    ui.end_row();

                    ui.label("Desired Serving Strength");
                    ui.horizontal(|ui| {
                        let current = self.model.serving.desired_strength();
                        for s in ServingStrength::ALL {
                            if ui.selectable_label(current == s, s.name()).clicked() {
                                self.model.serving.set_desired_strength(s);
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Concentrate Amount");
                    let (lo, hi) = self.model.serving.concentrate_bounds();
                    let mut amount = self.model.serving.concentrate_amount();
                    let resp = ui.add(
                        egui::Slider::new(&mut amount, lo..=hi)
                            .integer()
                            .suffix(" ml"),
                    );
                    if resp.changed() {
                        let r = self.model.serving.set_concentrate_amount(amount);
                        self.report(r);
                    }
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        let mix = self.model.serving_mix();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(format!(
                    "Recommended for {} strength",
                    self.model.serving.desired_strength()
                ));
                if ui.small_button("Use").clicked() {
                    self.model.serving.apply_recommendation();
                }
            });
            ui.label(format!(
                "{} concentrate + {} water",
                self.fmt.volume(mix.recommended.concentrate_ml),
                self.fmt.volume(mix.recommended.water_ml)
            ));
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Your Mix");
            egui::Grid::new("mix_grid").num_columns(2).show(ui, |ui| {
                summary_row(ui, "Concentrate:", self.fmt.volume(mix.concentrate_ml));
                summary_row(ui, "Water:", self.fmt.volume(mix.water_needed_ml));
                summary_row(ui, "Total:", self.fmt.volume(mix.dispenser_capacity_ml));
            });
            match mix.dilution {
                Dilution::Parts(_) => {
                    ui.label(format!("Dilution Ratio: {}", mix.dilution));
                }
                _ => {
                    let warn = ui.visuals().warn_fg_color;
                    ui.colored_label(warn, format!("Dilution Ratio: {}", mix.dilution));
                }
            }
            ui.label(egui::RichText::new(mix.dilution.describe()).small());
            if mix.effective_strength > 0.0 {
                ui.label(
                    egui::RichText::new(format!(
                        "Overall strength vs. dry coffee: 1:{:.1}",
                        mix.effective_strength
                    ))
                    .small(),
                );
            }
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Serving Tips");
            for tip in SERVING_TIPS {
                ui.label(format!("• {tip}"));
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("phase_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.ui_phase_bar(ui);
            ui.add_space(4.0);
        });
        if let Some(msg) = self.status.clone() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            });
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.phase() {
                Phase::Prepare => self.ui_prepare(ui),
                Phase::Serve => self.ui_serve(ui),
            });
        });
    }
}
