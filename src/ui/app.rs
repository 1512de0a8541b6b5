use std::time::Duration;

use eframe::{Frame, egui};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::DashboardEngine;
use crate::models::DashboardView;
use crate::ui::config::UI_CONFIG;
use crate::ui::ui_panels::SelectionEvent;
use crate::ui::utils::setup_custom_visuals;

pub struct BitcoinDashboardApp {
    pub(super) engine: DashboardEngine,
}

impl BitcoinDashboardApp {
    /// Builds the window and fires the initial fetches.
    pub fn new(cc: &eframe::CreationContext<'_>, mut engine: DashboardEngine) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        engine.mount();
        Self { engine }
    }

    fn handle_selection_events(&mut self, events: Vec<SelectionEvent>) {
        for event in events {
            let next = event.apply_to(self.engine.state().selection);
            self.engine.select(next);
        }
    }
}

impl eframe::App for BitcoinDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Shutting down with {} fetches in flight ({} dispatched)",
                self.engine.in_flight_count(),
                self.engine.dispatched_count()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let busy = self.engine.update();

        let view = DashboardView::from_state(self.engine.state());

        self.render_status_panel(ctx, &view);
        let events = self.render_central_panel(ctx, &view);
        self.handle_selection_events(events);

        // Keep waking up until every outstanding response has been applied
        if busy || self.engine.in_flight_count() > 0 {
            ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.poll_interval_ms));
        }
    }
}
