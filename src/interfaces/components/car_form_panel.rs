use crate::domain::car::{FuelType, PreviousOwners, SellerType, Transmission};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::car_form::{AGE_RANGE, CarForm, KMS_DRIVEN_STEP, PRESENT_PRICE_STEP};
use eframe::egui;
use std::fmt::Display;

fn combo<T: Copy + PartialEq + Display>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    options: &[T],
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.to_string())
        .width(180.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, option.to_string());
            }
        });
}

/// Renders the input grid. Returns true when "Predict Price" was clicked.
pub fn render_car_form(ui: &mut egui::Ui, form: &mut CarForm) -> bool {
    egui::Grid::new("car_form_grid")
        .num_columns(2)
        .spacing([DesignSystem::SPACING_MEDIUM, DesignSystem::SPACING_SMALL])
        .show(ui, |ui| {
            ui.label("Present Price (in lakhs)");
            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut form.present_price)
                        .range(0.0..=f64::INFINITY)
                        .speed(PRESENT_PRICE_STEP)
                        .fixed_decimals(2),
                );
                if ui.small_button("−").clicked() {
                    form.step_present_price(-1);
                }
                if ui.small_button("+").clicked() {
                    form.step_present_price(1);
                }
            });
            ui.end_row();

            ui.label("Kms Driven");
            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut form.kms_driven)
                        .range(0..=u64::MAX)
                        .speed(KMS_DRIVEN_STEP as f64),
                );
                if ui.small_button("−").clicked() {
                    form.step_kms_driven(-1);
                }
                if ui.small_button("+").clicked() {
                    form.step_kms_driven(1);
                }
            });
            ui.end_row();

            ui.label("Number of Previous Owners");
            combo(ui, "owners", &mut form.owners, &PreviousOwners::ALL);
            ui.end_row();

            ui.label("Age of the Car (in years)");
            ui.add(egui::DragValue::new(&mut form.age_years).range(AGE_RANGE));
            ui.end_row();

            ui.label("Fuel Type");
            combo(ui, "fuel_type", &mut form.fuel_type, &FuelType::ALL);
            ui.end_row();

            ui.label("Seller Type");
            combo(ui, "seller_type", &mut form.seller_type, &SellerType::ALL);
            ui.end_row();

            ui.label("Transmission Type");
            combo(ui, "transmission", &mut form.transmission, &Transmission::ALL);
            ui.end_row();
        });

    form.clamp();

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.add(
        egui::Button::new(
            egui::RichText::new("🔮 Predict Price")
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY)
        .min_size(egui::vec2(160.0, 32.0)),
    )
    .clicked()
}
