use std::{sync::Arc, time::Duration};

use client_core::view::{
    ActivityCard, FeedbackKind, ListContent, ParticipantsSection, NO_PARTICIPANTS_PLACEHOLDER,
};
use crossbeam_channel::Sender;
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::orchestration::dispatch_backend_command, ui::page::PortalPage,
};

const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(198, 40, 40);

pub struct PortalApp {
    page: Arc<PortalPage>,
    cmd_tx: Sender<BackendCommand>,
}

impl PortalApp {
    pub fn new(page: Arc<PortalPage>, cmd_tx: Sender<BackendCommand>) -> Self {
        Self { page, cmd_tx }
    }

    fn dispatch(&self, cmd: BackendCommand) {
        let mut status = None;
        dispatch_backend_command(&self.cmd_tx, cmd, &mut status);
        if let Some(status) = status {
            self.page.set_status(status);
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("portal_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Extracurricular Activities");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Refresh").clicked() {
                        self.dispatch(BackendCommand::Refresh);
                    }
                });
            });
            let status = self.page.lock().status.clone();
            if let Some(status) = status {
                ui.small(egui::RichText::new(status).weak());
            }
        });
    }

    fn show_signup_form(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("signup_form").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Sign Up for an Activity").strong());

            let mut submit = None;
            {
                let mut state = self.page.lock();
                ui.horizontal(|ui| {
                    ui.label("Student Email:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.email)
                            .id_salt("signup_email")
                            .hint_text("your-email@mergington.edu")
                            .desired_width(260.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Select Activity:");
                    let selected_text = state.selected_label().to_string();
                    let options = state.options.clone();
                    egui::ComboBox::from_id_salt("signup_activity")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for option in options {
                                ui.selectable_value(
                                    &mut state.selected_activity,
                                    option.value,
                                    option.label,
                                );
                            }
                        });
                });

                if ui.button("Sign Up").clicked() {
                    submit = Some(BackendCommand::Submit {
                        email: state.email.clone(),
                        activity: state.selected_activity.clone(),
                    });
                }

                if let Some(feedback) = state.visible_feedback() {
                    let fill = match feedback.kind {
                        FeedbackKind::Success => SUCCESS_FILL,
                        FeedbackKind::Error => ERROR_FILL,
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&feedback.text).color(egui::Color32::WHITE),
                            );
                        });
                }
            }
            ui.add_space(6.0);

            if let Some(cmd) = submit {
                self.dispatch(cmd);
            }
        });
    }

    fn show_directory(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let list = self.page.lock().list.clone();
            let mut withdraw = None;
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &list {
                    ListContent::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading activities...");
                        });
                    }
                    ListContent::Failed(text) => {
                        ui.colored_label(ERROR_FILL, text);
                    }
                    ListContent::Cards(cards) => {
                        for card in cards {
                            if let Some(cmd) = show_card(ui, card) {
                                withdraw = Some(cmd);
                            }
                            ui.add_space(8.0);
                        }
                    }
                });
            if let Some(cmd) = withdraw {
                self.dispatch(cmd);
            }
        });
    }
}

/// Draws one activity card; returns a withdraw command when a roster entry's
/// remove button was clicked.
fn show_card(ui: &mut egui::Ui, card: &ActivityCard) -> Option<BackendCommand> {
    let mut withdraw = None;
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&card.name).strong().size(16.0));
            ui.label(&card.description);
            ui.label(format!("Schedule: {}", card.schedule));
            ui.label(format!("Availability: {}", card.availability_text()));
            ui.label(egui::RichText::new("Participants").strong());
            match &card.participants {
                ParticipantsSection::Roster(emails) => {
                    for email in emails {
                        ui.horizontal(|ui| {
                            ui.label(format!("• {email}"));
                            if ui.small_button("✕").on_hover_text("Unregister").clicked() {
                                withdraw = Some(BackendCommand::Withdraw {
                                    email: email.clone(),
                                    activity: card.name.clone(),
                                });
                            }
                        });
                    }
                }
                ParticipantsSection::Empty => {
                    ui.label(egui::RichText::new(NO_PARTICIPANTS_PLACEHOLDER).italics().weak());
                }
            }
        });
    withdraw
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_header(ctx);
        self.show_signup_form(ctx);
        self.show_directory(ctx);

        // Backend writes land in the shared page without waking egui.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
