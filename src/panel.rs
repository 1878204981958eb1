use egui::{Color32, CornerRadius, Sense};

use crate::core::{CalibrationMethod, Calibrator, Event};
use crate::report::{ResultReport, SystemReport};
use crate::types::{LengthUnit, CREDIT_CARD_WIDTH_MM};

/// Corner radius of an ID-1 card in millimeters
const CARD_CORNER_MM: f64 = 3.18;

const CARD_COLOR: Color32 = Color32::from_rgb(74, 158, 255);

/// Draw the calibrator and collect the events the user produced this frame
///
/// The panel only reads calibrator state; changes go back as events.
pub fn show(ctx: &egui::Context, calibrator: &Calibrator, system: &SystemReport) -> Vec<Event> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Screen DPI & Physical Size Checker");
            ui.add_space(8.0);

            system_section(ui, system);
            ui.separator();

            let mut method = calibrator.method();
            ui.horizontal(|ui| {
                ui.radio_value(&mut method, CalibrationMethod::ReferenceObject, "Credit card");
                ui.radio_value(&mut method, CalibrationMethod::ManualDiagonal, "Known diagonal");
            });
            if method != calibrator.method() {
                events.push(Event::MethodSelected(method));
            }
            ui.add_space(8.0);

            match method {
                CalibrationMethod::ReferenceObject => card_section(ui, calibrator, &mut events),
                CalibrationMethod::ManualDiagonal => diagonal_section(ui, calibrator, &mut events),
            }

            if let Some(result) = calibrator.result() {
                ui.separator();
                results_section(ui, &ResultReport::new(result));
            }
        });
    });

    if let Some(notice) = calibrator.notice() {
        let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
            ui.label(notice.to_string());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                events.push(Event::DismissNotice);
            }
        });
        if modal.should_close() {
            events.push(Event::DismissNotice);
        }
    }

    events
}

fn system_section(ui: &mut egui::Ui, system: &SystemReport) {
    egui::Grid::new("system").num_columns(2).show(ui, |ui| {
        for (label, value) in [
            ("Resolution", &system.resolution),
            ("Pixel ratio", &system.pixel_ratio),
            ("Browser", &system.browser),
            ("Operating system", &system.os),
        ] {
            ui.label(label);
            ui.strong(value);
            ui.end_row();
        }
    });
}

fn card_section(ui: &mut egui::Ui, calibrator: &Calibrator, events: &mut Vec<Event>) {
    ui.label("Hold a credit card against the screen and drag the slider until the rectangle matches its width.");
    ui.add_space(8.0);

    // the card is sized in physical pixels, egui lays out in points
    let pixels_per_point = ui.ctx().pixels_per_point() as f64;
    let (width_px, height_px) = calibrator.card_size();
    let size = egui::vec2(
        (width_px / pixels_per_point) as f32,
        (height_px / pixels_per_point) as f32,
    );
    let corner = (size.x as f64 * CARD_CORNER_MM / CREDIT_CARD_WIDTH_MM).round() as u8;

    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter()
        .rect_filled(rect, CornerRadius::same(corner), CARD_COLOR);
    ui.add_space(8.0);

    let config = calibrator.config();
    let mut width = calibrator.card_width();
    ui.add(
        egui::Slider::new(&mut width, config.card_min_width..=config.card_max_width)
            .step_by(1.0)
            .suffix(" px"),
    );
    if width != calibrator.card_width() {
        events.push(Event::CardWidthChanged(width));
    }

    if ui.button("Calibrate").clicked() {
        events.push(Event::Calibrate);
    }
}

fn diagonal_section(ui: &mut egui::Ui, calibrator: &Calibrator, events: &mut Vec<Event>) {
    ui.label("Enter the diagonal size from your display's specifications.");
    ui.add_space(8.0);

    let mut text = calibrator.diagonal_text().to_string();
    let mut unit = calibrator.unit();
    let mut submitted = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("e.g. 24")
                .desired_width(80.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }

        egui::ComboBox::from_id_salt("unit")
            .selected_text(unit.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut unit, LengthUnit::Inch, LengthUnit::Inch.label());
                ui.selectable_value(&mut unit, LengthUnit::Centimeter, LengthUnit::Centimeter.label());
            });

        if ui.button("Calculate").clicked() {
            submitted = true;
        }
    });

    if text != calibrator.diagonal_text() {
        events.push(Event::DiagonalEdited(text));
    }
    if unit != calibrator.unit() {
        events.push(Event::UnitSelected(unit));
    }
    if submitted {
        events.push(Event::Calculate);
    }
}

fn results_section(ui: &mut egui::Ui, report: &ResultReport) {
    ui.heading(&report.dpi);
    ui.label(&report.density_class);
    ui.add_space(8.0);

    egui::Grid::new("results").num_columns(2).show(ui, |ui| {
        for (label, value) in report.rows().into_iter().skip(2) {
            ui.label(label);
            ui.strong(value);
            ui.end_row();
        }
    });
}
