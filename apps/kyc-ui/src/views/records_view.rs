use egui_extras::{Column as TableColumn, TableBuilder};
use kyc_app::{Column, Record};

const ROW_HEIGHT: f32 = 18.0;

#[derive(Default)]
pub struct RecordsView;

impl RecordsView {
    pub fn show(&self, ui: &mut egui::Ui, rows: &[Record]) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Saved Records").strong());
                ui.separator();
                ui.label(format!("{} record(s)", rows.len()));
            });
            ui.separator();

            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::centered_and_justified(
                    egui::Direction::LeftToRight,
                ))
                .columns(TableColumn::remainder().at_least(80.0), Column::ALL.len())
                .header(20.0, |mut header| {
                    for column in Column::ALL {
                        header.col(|ui| {
                            ui.strong(column.heading());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let record = &rows[row.index()];
                        for value in record.fields() {
                            row.col(|ui| {
                                ui.label(value);
                            });
                        }
                    });
                });
        });
    }
}
