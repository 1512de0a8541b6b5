use eframe::egui::{CentralPanel, Context, Frame, Margin, ScrollArea, TopBottomPanel};

use crate::models::{DashboardView, KpiField};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, SelectionEvent, SelectionPanel};
use crate::ui::ui_plot_view::{show_bar_chart, show_line_chart};
use crate::ui::utils::spaced_separator;

use super::app::BitcoinDashboardApp;

fn kpi_label(field: KpiField) -> &'static str {
    match field {
        KpiField::CurrentPrice => UI_TEXT.current_price,
        KpiField::AveragePrice => UI_TEXT.average_price,
        KpiField::MaxPrice => UI_TEXT.max_price,
        KpiField::MinPrice => UI_TEXT.min_price,
        KpiField::Volatility => UI_TEXT.volatility,
    }
}

impl BitcoinDashboardApp {
    pub(super) fn render_status_panel(&self, ctx: &Context, view: &DashboardView) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.status_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(format!(
                        "{} {}",
                        UI_TEXT.status_selection, view.selection
                    ));
                    ui.separator();
                    ui.label_subdued(format!(
                        "{}: {}",
                        UI_TEXT.status_in_flight,
                        self.engine.in_flight_count()
                    ));
                });
            });
    }

    /// Draws the dashboard body and returns any selector changes.
    pub(super) fn render_central_panel(
        &self,
        ctx: &Context,
        view: &DashboardView,
    ) -> Vec<SelectionEvent> {
        let mut events = Vec::new();

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label_header(UI_TEXT.dashboard_title);
                });

                spaced_separator(ui);
                for line in &view.kpi_lines {
                    ui.kpi_row(kpi_label(line.field), &line.value);
                }
                spaced_separator(ui);

                ui.columns(2, |columns| {
                    columns[0].label_subheader(UI_TEXT.line_chart_heading);
                    show_line_chart(&mut columns[0], view.line.as_ref());
                    columns[0].add_space(8.0);
                    events = SelectionPanel::new(view.selection).render(&mut columns[0]);

                    columns[1].label_subheader(UI_TEXT.bar_chart_heading);
                    if let Some(bars) = view.bars {
                        show_bar_chart(&mut columns[1], bars);
                    }
                });
            });
        });

        events
    }
}
