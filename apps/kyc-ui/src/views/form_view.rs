use kyc_app::{Column, FormState};

#[derive(Default)]
pub struct FormView {
    focus_first: bool,
}

impl FormView {
    /// Put the cursor back in the first field on the next frame.
    pub fn refocus(&mut self) {
        self.focus_first = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, form: &mut FormState) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Customer Details").strong());
            ui.add_space(4.0);

            egui::Grid::new("customer_details")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for column in Column::ALL {
                        ui.label(format!("{}:", column.label()));
                        let width = if column.is_numeric() { 140.0 } else { 280.0 };
                        let response = ui.add(
                            egui::TextEdit::singleline(form.field_mut(column))
                                .desired_width(width),
                        );
                        if column == Column::CustomerId && self.focus_first {
                            response.request_focus();
                            self.focus_first = false;
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
