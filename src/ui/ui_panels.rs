use eframe::egui::{ComboBox, Ui};
use strum::IntoEnumIterator;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Month, Selection, Year};
use crate::ui::config::UI_TEXT;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Year(Year),
    Month(Month),
}

/// Year and month pickers for the historic chart
pub struct SelectionPanel {
    selection: Selection,
}

impl SelectionPanel {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    fn render_year_selector(&mut self, ui: &mut Ui) -> Option<Year> {
        let mut year = self.selection.year;
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.year_label);
            ComboBox::from_id_salt("year_selector")
                .selected_text(year.to_string())
                .show_ui(ui, |ui| {
                    for option in Year::all() {
                        ui.selectable_value(&mut year, option, option.to_string());
                    }
                });
        });
        (year != self.selection.year).then_some(year)
    }

    fn render_month_selector(&mut self, ui: &mut Ui) -> Option<Month> {
        let mut month = self.selection.month;
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.month_label);
            ComboBox::from_id_salt("month_selector")
                .selected_text(month.code())
                .show_ui(ui, |ui| {
                    for option in Month::iter() {
                        ui.selectable_value(&mut month, option, option.code());
                    }
                });
        });
        (month != self.selection.month).then_some(month)
    }
}

impl Panel for SelectionPanel {
    type Event = SelectionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<SelectionEvent> {
        let mut events = Vec::new();

        if let Some(year) = self.render_year_selector(ui) {
            self.selection = self.selection.with_year(year);
            events.push(SelectionEvent::Year(year));
        }
        if let Some(month) = self.render_month_selector(ui) {
            self.selection = self.selection.with_month(month);
            events.push(SelectionEvent::Month(month));
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Selection changed: {:?}", events);
        }

        events
    }
}

impl SelectionEvent {
    /// The selection after this event is applied to `current`.
    pub fn apply_to(self, current: Selection) -> Selection {
        match self {
            SelectionEvent::Year(year) => current.with_year(year),
            SelectionEvent::Month(month) => current.with_month(month),
        }
    }
}
