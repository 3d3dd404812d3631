//! The multi-page survey application.
//!
//! Flow: one page per form section, then a review & declaration page, then
//! the submission outcome. All field state lives in the answer store, so
//! moving between pages never loses input.

use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui;
use survey_engine::{AnswerKey, AnswerStore, Engine, Namespace, ValidationFailure};
use survey_export::ExportBundle;
use survey_submit::{MailerConfig, SmtpMailer, SubmissionPipeline};

use crate::surface::EguiSurface;

const SECRETS_PATH: &str = "secrets.toml";
const EXPORT_DIR: &str = "exports";

enum Page {
    Survey(usize),
    Review,
    Done,
}

enum SubmitResult {
    Delivered(ExportBundle),
    DispatchFailed { bundle: ExportBundle, error: String },
}

pub struct SurveyorApp {
    engine: Engine,
    ns: Namespace,
    store: AnswerStore,
    page: Page,
    dev_mode: bool,
    failures: Vec<ValidationFailure>,
    inline_errors: HashMap<String, String>,
    pipeline: Result<SubmissionPipeline<SmtpMailer>, String>,
    result: Option<SubmitResult>,
    submit_error: Option<String>,
    save_note: Option<String>,
}

impl SurveyorApp {
    pub fn new(engine: Engine) -> Self {
        let ns = Namespace::new(engine.spec().id());
        let pipeline = MailerConfig::load(SECRETS_PATH)
            .map(|config| SubmissionPipeline::new(config, SmtpMailer))
            .map_err(|err| err.to_string());
        if let Err(err) = &pipeline {
            tracing::warn!(error = %err, "email not configured, submissions will be kept locally");
        }

        Self {
            engine,
            ns,
            store: AnswerStore::new(),
            page: Page::Survey(0),
            dev_mode: false,
            failures: Vec::new(),
            inline_errors: HashMap::new(),
            pipeline,
            result: None,
            submit_error: None,
            save_note: None,
        }
    }

    fn accept_key(&self) -> AnswerKey {
        AnswerKey::field(&self.ns, "accept")
    }

    fn signer_key(&self) -> AnswerKey {
        AnswerKey::field(&self.ns, "consent_signer")
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.engine.spec().title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .checkbox(&mut self.dev_mode, "Development mode")
                    .on_hover_text("Bypasses validation for pipeline testing. Never use for real submissions.")
                    .changed()
                {
                    self.engine.set_development_mode(self.dev_mode);
                }
            });
        });
        if self.dev_mode {
            ui.colored_label(
                egui::Color32::from_rgb(0xb4, 0x6a, 0x00),
                "Development mode active - form validation is disabled.",
            );
        }
        ui.separator();
    }

    fn survey_page(&mut self, ui: &mut egui::Ui, index: usize) {
        let section_count = self.engine.spec().len();
        ui.label(format!("Page {} of {section_count}", index + 1));

        {
            let mut surface = EguiSurface::new(ui, &self.inline_errors);
            self.engine
                .render_section(index, &mut surface, &mut self.store, &self.ns);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if index > 0 && ui.button("Back").clicked() {
                self.page = Page::Survey(index - 1);
            }
            if index + 1 < section_count {
                if ui.button("Next").clicked() {
                    self.page = Page::Survey(index + 1);
                }
            } else if ui.button("Continue to Review").clicked() {
                self.page = Page::Review;
            }
        });
    }

    fn review_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Review & Submit");
        ui.label("Please review your responses and confirm that the information provided is accurate.");
        ui.add_space(8.0);

        let signer_key = self.signer_key();
        ui.label("Informed consent signed by:");
        let mut signer = self.store.text(&signer_key).to_string();
        if ui
            .add(egui::TextEdit::singleline(&mut signer).desired_width(f32::INFINITY))
            .changed()
        {
            self.store.insert(signer_key, signer);
        }
        ui.add_space(4.0);

        let accept_key = self.accept_key();
        let mut accept = self.store.flag(&accept_key);
        if ui
            .checkbox(
                &mut accept,
                "I confirm that all information provided in this survey is accurate and complete to the best of my knowledge.",
            )
            .changed()
        {
            self.store.insert(accept_key.clone(), accept);
        }

        if !self.failures.is_empty() {
            ui.add_space(8.0);
            ui.colored_label(
                egui::Color32::RED,
                format!("{} validation error(s) - please resolve them before submitting:", self.failures.len()),
            );
            for failure in &self.failures {
                ui.colored_label(egui::Color32::RED, format!("\u{2022} {failure}"));
            }
        }
        if let Some(error) = &self.submit_error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Back to Survey").clicked() {
                self.page = Page::Survey(self.engine.spec().len().saturating_sub(1));
            }
            if ui
                .add_enabled(accept, egui::Button::new("Submit Survey"))
                .on_disabled_hover_text("Please accept the declaration before submitting.")
                .clicked()
            {
                self.try_submit();
            }
        });
    }

    fn try_submit(&mut self) {
        self.submit_error = None;
        self.failures.clear();
        self.inline_errors.clear();

        if let Err(failures) = self.engine.validate(&self.store, &self.ns) {
            for failure in &failures {
                self.inline_errors
                    .insert(failure.field_key.clone(), failure.to_string());
            }
            self.failures = failures;
            return;
        }

        let record = self.engine.serialize_answers(&self.store, &self.ns);
        let signer = self.store.text(&self.signer_key()).to_string();

        match &self.pipeline {
            Ok(pipeline) => match pipeline.submit(&record, &signer) {
                Ok(outcome) => {
                    self.result = Some(match outcome.dispatch {
                        Ok(()) => SubmitResult::Delivered(outcome.bundle),
                        Err(err) => SubmitResult::DispatchFailed {
                            bundle: outcome.bundle,
                            error: err.to_string(),
                        },
                    });
                    self.page = Page::Done;
                }
                Err(err) => {
                    // Export generation failed; nothing to keep, allow retry.
                    self.submit_error = Some(format!("Could not generate exports: {err}"));
                }
            },
            Err(config_error) => {
                // No mailer - still generate the exports for manual download.
                match ExportBundle::build(&record) {
                    Ok(bundle) => {
                        self.result = Some(SubmitResult::DispatchFailed {
                            bundle,
                            error: format!("email is not configured ({config_error})"),
                        });
                        self.page = Page::Done;
                    }
                    Err(err) => {
                        self.submit_error = Some(format!("Could not generate exports: {err}"));
                    }
                }
            }
        }
    }

    fn done_page(&mut self, ui: &mut egui::Ui) {
        let mut dispatch_failed = false;
        match &self.result {
            None => {
                self.page = Page::Review;
                return;
            }
            Some(SubmitResult::Delivered(bundle)) => {
                ui.heading("Survey submitted");
                ui.label("Thank you - your responses have been sent for review.");
                ui.label(format!("Reference: {}", bundle.stamp.reference));
            }
            Some(SubmitResult::DispatchFailed { bundle, error }) => {
                dispatch_failed = true;
                ui.heading("Submission not sent");
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Sending the submission email failed: {error}"),
                );
                ui.label("Your exports were generated and are still available below; you can also retry.");
                ui.label(format!("Reference: {}", bundle.stamp.reference));
            }
        }

        ui.add_space(8.0);
        let mut save_requested = false;
        let mut retry_requested = false;
        ui.horizontal(|ui| {
            if ui.button("Save exports to disk").clicked() {
                save_requested = true;
            }
            if dispatch_failed && ui.button("Back to Review (retry)").clicked() {
                retry_requested = true;
            }
        });
        if save_requested {
            self.save_note = Some(self.save_exports());
        }
        if retry_requested {
            self.page = Page::Review;
        }
        if let Some(note) = &self.save_note {
            ui.label(note.clone());
        }
    }

    fn save_exports(&self) -> String {
        let bundle = match &self.result {
            Some(SubmitResult::Delivered(bundle))
            | Some(SubmitResult::DispatchFailed { bundle, .. }) => bundle,
            None => return "Nothing to save yet.".to_string(),
        };

        let dir = PathBuf::from(EXPORT_DIR);
        let write = || -> std::io::Result<(PathBuf, PathBuf)> {
            std::fs::create_dir_all(&dir)?;
            let pdf_path = dir.join(bundle.pdf_filename());
            let csv_path = dir.join(bundle.csv_filename());
            std::fs::write(&pdf_path, &bundle.pdf)?;
            std::fs::write(&csv_path, bundle.csv.as_bytes())?;
            Ok((pdf_path, csv_path))
        };
        match write() {
            Ok((pdf_path, csv_path)) => {
                format!("Saved {} and {}", pdf_path.display(), csv_path.display())
            }
            Err(err) => format!("Could not save exports: {err}"),
        }
    }
}

impl eframe::App for SurveyorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.header(ui);
            egui::ScrollArea::vertical().show(ui, |ui| match self.page {
                Page::Survey(index) => self.survey_page(ui, index),
                Page::Review => self.review_page(ui),
                Page::Done => self.done_page(ui),
            });
        });
    }
}
