use kyc_app::{Notice, NoticeLevel};

/// Draws the pending notice as a centered dialog. Clears it on "OK".
pub fn show_notice(ctx: &egui::Context, notice: &mut Option<Notice>) {
    let Some(current) = notice.as_ref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(&current.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let text = egui::RichText::new(&current.message);
            match current.level {
                NoticeLevel::Info => ui.label(text),
                NoticeLevel::Warning => ui.colored_label(egui::Color32::YELLOW, text),
                NoticeLevel::Error => ui.colored_label(egui::Color32::RED, text),
            };
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        *notice = None;
    }
}
