use super::EguiApp;
use crate::egui_app::view_model::{embarked_choice_label, pclass_choice_label};
use crate::ml::Classifier;
use crate::passenger::{Embarked, MAX_AGE, MIN_AGE, MIN_FARE, PassengerClass, Sex};
use eframe::egui::{self, ComboBox, DragValue, Ui};

impl<C: Classifier> EguiApp<C> {
    pub(super) fn render_form(&mut self, ui: &mut Ui) {
        let form = &mut self.controller.ui.form;
        egui::Grid::new("passenger_form")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                ui.label("Passenger Class (1 = 1st, 2 = 2nd, 3 = 3rd)");
                ComboBox::from_id_salt("pclass")
                    .selected_text(pclass_choice_label(form.pclass))
                    .show_ui(ui, |ui| {
                        for pclass in PassengerClass::ALL {
                            ui.selectable_value(&mut form.pclass, pclass, pclass_choice_label(pclass));
                        }
                    });
                ui.end_row();

                ui.label("Sex");
                ComboBox::from_id_salt("sex")
                    .selected_text(form.sex.label())
                    .show_ui(ui, |ui| {
                        for sex in Sex::ALL {
                            ui.selectable_value(&mut form.sex, sex, sex.label());
                        }
                    });
                ui.end_row();

                ui.label("Age");
                ui.add(DragValue::new(&mut form.age).range(MIN_AGE..=MAX_AGE).speed(1.0));
                ui.end_row();

                ui.label("Fare");
                ui.add(
                    DragValue::new(&mut form.fare)
                        .range(MIN_FARE..=f32::MAX)
                        .speed(0.5)
                        .fixed_decimals(2),
                );
                ui.end_row();

                ui.label("Siblings/Spouses Aboard");
                ui.add(DragValue::new(&mut form.sibsp).range(0..=u32::MAX));
                ui.end_row();

                ui.label("Parents/Children Aboard");
                ui.add(DragValue::new(&mut form.parch).range(0..=u32::MAX));
                ui.end_row();

                ui.label("Port of Embarkation");
                ComboBox::from_id_salt("embarked")
                    .selected_text(embarked_choice_label(form.embarked))
                    .show_ui(ui, |ui| {
                        for port in Embarked::ALL {
                            ui.selectable_value(&mut form.embarked, port, embarked_choice_label(port));
                        }
                    });
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button(egui::RichText::new("Predict Survival").strong()).clicked() {
                self.controller.predict();
            }
            if ui.button("Reset").clicked() {
                self.controller.reset_form();
            }
        });
    }
}
