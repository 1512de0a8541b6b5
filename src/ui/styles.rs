use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "**Label:** value$" KPI row. Blank values keep the row in place.
    fn kpi_row(&mut self, label: &str, value: &str);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn kpi_row(&mut self, label: &str, value: &str) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(
                RichText::new(format!("{label}:"))
                    .strong()
                    .color(UI_CONFIG.colors.label),
            );
            ui.label(
                RichText::new(format!("{value}{}", UI_TEXT.currency_suffix))
                    .color(UI_CONFIG.colors.value),
            );
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(
            RichText::new(text.into())
                .color(UI_CONFIG.colors.heading)
                .underline(),
        );
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .heading()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }
}
