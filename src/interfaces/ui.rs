//! egui rendering of the prediction form.
//!
//! The app never blocks on the network: validated payloads go out to the
//! worker thread over a crossbeam channel and terminal [`SubmitEvent`]s come
//! back the same way, drained at the top of every frame.

use crate::application::controller::{PredictionController, SubmitEvent};
use crate::domain::errors::SubmitError;
use crate::domain::form::field_label;
use crate::domain::prediction::{RequestPayload, format_metric, format_rate};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

pub struct FormApp {
    controller: PredictionController,
    submit_tx: Sender<RequestPayload>,
    event_rx: Receiver<SubmitEvent>,
}

impl FormApp {
    pub fn new(submit_tx: Sender<RequestPayload>, event_rx: Receiver<SubmitEvent>) -> Self {
        Self {
            controller: PredictionController::new(),
            submit_tx,
            event_rx,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.controller.apply(event);
        }
    }

    fn dispatch(&mut self, payload: RequestPayload) {
        if let Err(e) = self.submit_tx.send(payload) {
            // Worker gone; terminate the cycle so loading cannot stick.
            self.controller.apply(SubmitEvent::Failed(SubmitError::Network {
                detail: format!("submission worker unavailable: {}", e),
            }));
        }
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 1. Fold in outcomes from the network worker ---
        self.drain_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Mortgage Rate Predictor 💰🏡");
            ui.add_space(10.0);

            // --- 2. Input form ---
            egui::Grid::new("feature_inputs")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for (key, value) in self.controller.form.fields_mut() {
                        ui.label(field_label(key));
                        ui.add(egui::TextEdit::singleline(value).desired_width(120.0));
                        ui.end_row();
                    }

                    ui.label("Date");
                    ui.add(
                        egui::TextEdit::singleline(self.controller.form.date_mut())
                            .hint_text("YYYY-MM-DD")
                            .desired_width(120.0),
                    );
                    ui.end_row();
                });

            ui.add_space(10.0);

            let loading = self.controller.state().loading;
            let caption = if loading { "Predicting..." } else { "Predict" };
            if ui
                .add_enabled(!loading, egui::Button::new(caption))
                .clicked()
            {
                if let Some(payload) = self.controller.begin_submit() {
                    self.dispatch(payload);
                }
            }

            // --- 3. Status region ---
            if let Some(error) = self.controller.state().error.clone() {
                ui.add_space(10.0);
                ui.colored_label(egui::Color32::from_rgb(255, 80, 80), error);
            }

            // --- 4. Results region ---
            if let Some(result) = self.controller.state().prediction.clone() {
                ui.add_space(10.0);
                ui.separator();
                ui.heading("Prediction Results 📊");
                ui.add_space(5.0);

                egui::Grid::new("prediction_results")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Decision Tree Prediction").strong());
                        ui.label(format_rate(result.tree_prediction));
                        ui.end_row();

                        ui.label(egui::RichText::new("Prophet Prediction").strong());
                        ui.label(format_rate(result.prophet_prediction));
                        ui.end_row();

                        ui.label(egui::RichText::new("Combined Rate").strong());
                        ui.label(format_rate(result.combined_rate));
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.heading("📈 Decision Tree Model Metrics");
                ui.add_space(5.0);

                egui::Grid::new("tree_metrics")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("MSE").strong());
                        ui.label(format_metric(result.tree_metrics.mse));
                        ui.end_row();

                        ui.label(egui::RichText::new("MAE").strong());
                        ui.label(format_metric(result.tree_metrics.mae));
                        ui.end_row();

                        ui.label(egui::RichText::new("R² Score").strong());
                        ui.label(format_metric(result.tree_metrics.r2));
                        ui.end_row();
                    });
            }
        });

        // Keep repainting so worker events are picked up promptly
        ctx.request_repaint();
    }
}
