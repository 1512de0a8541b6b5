use eframe::egui::Ui;
use egui_plot::{AxisHints, Bar, BarChart, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::config::PLOT_CONFIG;
use crate::models::{BarRange, LineSeries};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_price;

/// Monthly price line. The Y domain is fixed, so prices outside it are clipped.
/// The frame is drawn even before the first series arrives.
pub fn show_line_chart(ui: &mut Ui, line: Option<&LineSeries>) {
    let (y_min, y_max) = PLOT_CONFIG.line_y_domain;
    let point_count = line.map_or(0, |l| l.points.len());
    let hover_labels = line.cloned();

    Plot::new("historic_line_chart")
        .width(PLOT_CONFIG.chart_width)
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default())
        .custom_x_axes(vec![create_day_axis(line.cloned())])
        .custom_y_axes(vec![create_price_axis()])
        .label_formatter(move |_name, value| {
            let day = hover_labels
                .as_ref()
                .and_then(|l| l.label_at(value.x))
                .unwrap_or_default();
            format!("day {}\n{}", day, format_price(value.y))
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_y(y_min..=y_max);
            if point_count > 0 {
                plot_ui.set_plot_bounds_x(-0.5..=(point_count as f64 - 0.5));
            }

            let Some(line) = line else {
                return;
            };

            // Only the first run carries the legend name so the legend has one entry
            for (i, segment) in line.segments().into_iter().enumerate() {
                let name = if i == 0 { UI_TEXT.line_legend } else { "" };
                plot_ui.line(
                    Line::new(name, PlotPoints::from(segment))
                        .color(PLOT_CONFIG.line_color)
                        .width(PLOT_CONFIG.line_width),
                );
            }
        });
}

/// Secondary min/max as two bars over a single category.
pub fn show_bar_chart(ui: &mut Ui, bars: BarRange) {
    let (y_min, y_max) = PLOT_CONFIG.bar_y_domain;
    let offset = PLOT_CONFIG.bar_width / 2.0;

    Plot::new("secondary_range_bar_chart")
        .width(PLOT_CONFIG.chart_width)
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default())
        .custom_x_axes(vec![create_category_axis()])
        .custom_y_axes(vec![create_price_axis()])
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}: {}", name, format_price(value.y))
            }
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_y(y_min..=y_max);
            plot_ui.set_plot_bounds_x(-1.0..=1.0);

            let series = [
                (UI_TEXT.bar_min_legend, bars.min, -offset, PLOT_CONFIG.bar_min_color),
                (UI_TEXT.bar_max_legend, bars.max, offset, PLOT_CONFIG.bar_max_color),
            ];
            for (name, value, x, color) in series {
                if !value.is_finite() {
                    log::debug!("Skipping non-numeric {name} bar");
                    continue;
                }
                let bar = Bar::new(x, value)
                    .width(PLOT_CONFIG.bar_width)
                    .name(name)
                    .fill(color);
                plot_ui.bar_chart(BarChart::new(name, vec![bar]).color(color));
            }
        });
}

/// Categorical day axis: grid mark `i` shows the i-th day label.
fn create_day_axis(line: Option<LineSeries>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label("day")
        .formatter(move |grid_mark, _range| {
            line.as_ref()
                .and_then(|l| l.label_at(grid_mark.value))
                .unwrap_or_default()
                .to_string()
        })
}

fn create_category_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| {
        if grid_mark.value.abs() < 1e-6 {
            PLOT_CONFIG.bar_category_label.to_string()
        } else {
            String::new()
        }
    })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
        .placement(HPlacement::Left)
}
