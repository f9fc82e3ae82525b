use crate::views::{FormView, RecordsView, show_notice};
use egui_file_dialog::FileDialog;
use kyc_app::{Notice, SETTINGS_FILE, Session, Settings, SystemOpener};
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = "kyc_data.csv";

pub struct KycApp {
    session: Session,
    settings_path: PathBuf,
    file_dialog: FileDialog,
    form_view: FormView,
    records_view: RecordsView,
    opener: SystemOpener,
    notice: Option<Notice>,
}

impl KycApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = PathBuf::from(SETTINGS_FILE);
        let settings = Settings::load_or_default(&settings_path);

        let mut session = Session::new(settings.csv_path.display().to_string());
        // Show whatever is already saved at the remembered path.
        let notice = session.refresh();

        Self {
            session,
            settings_path,
            file_dialog: FileDialog::new(),
            form_view: FormView::default(),
            records_view: RecordsView,
            opener: SystemOpener,
            notice,
        }
    }

    fn remember_path(&self) {
        let settings = Settings {
            csv_path: PathBuf::from(self.session.csv_path.trim()),
        };
        if let Err(err) = settings.save(&self.settings_path) {
            tracing::warn!(error = %err, "could not save settings");
        }
    }

    fn browse(&mut self) {
        let current = Path::new(self.session.csv_path.trim());
        let file_name = current
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);

        let mut dialog = FileDialog::new()
            .title("Select / Create CSV file")
            .default_file_name(file_name);
        if let Some(dir) = current.parent().filter(|dir| dir.is_dir()) {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        self.file_dialog = dialog;
        self.file_dialog.save_file();
    }

    fn save_record(&mut self) {
        let notice = self.session.save();
        if self.session.form.is_empty() {
            self.form_view.refocus();
        }
        self.notice = Some(notice);
    }
}

impl eframe::App for KycApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let idle = self.notice.is_none();

        egui::TopBottomPanel::top("file_bar").show(ctx, |ui| {
            ui.add_enabled_ui(idle, |ui| {
                ui.horizontal(|ui| {
                    ui.label("CSV file:");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.session.csv_path)
                            .desired_width(440.0),
                    );
                    if response.lost_focus() {
                        self.remember_path();
                    }
                    if ui.button("Browse...").clicked() {
                        self.browse();
                    }
                });
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.notice = self.session.select_path(&path);
            self.remember_path();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(idle, |ui| {
                self.form_view.show(ui, &mut self.session.form);

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Save Record").clicked() {
                        self.save_record();
                    }
                    if ui.button("Clear Fields").clicked() {
                        self.session.clear_fields();
                        self.form_view.refocus();
                    }
                    if ui.button("View Records").clicked() {
                        self.notice = self.session.refresh();
                    }
                    if ui.button("Open Folder").clicked() {
                        self.notice = self.session.open_folder(&self.opener);
                    }
                    if ui.button("Exit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.add_space(6.0);

                self.records_view.show(ui, self.session.rows());
            });
        });

        show_notice(ctx, &mut self.notice);
    }
}
