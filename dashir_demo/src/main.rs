// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard demos for the dashir crates.
mod svg;

use std::fmt::Write as _;

use dashir_charts::{BarChartView, ChartMode, ChartSession, ChartSpec, ChartView, LineChartView, ModeSelector, PieChartView};
use dashir_core::format::format_number;
use dashir_core::{DataPoint, KpiTile, Row, Status, Trend, Value};
use dashir_table::{Align, Collation, Column, SortOrder, TableBody, TableSession, TableSpec, TableView};
use kurbo::Rect;
use peniko::color::palette::css;

use crate::svg::{SvgCanvas, color_hex};

struct Section {
    title: &'static str,
    body: String,
}

fn main() {
    let sections = vec![
        kpi_section(),
        table_section(),
        chart_section(),
        badge_section(),
    ];

    let html = render_report("dashir demo", &sections);
    std::fs::write("dashir_demo.html", html).expect("write dashir_demo.html");
    println!("wrote dashir_demo.html");
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>body{{font-family:sans-serif;max-width:960px;margin:2em auto}}\
         table{{border-collapse:collapse;width:100%}}\
         th,td{{padding:6px 12px;border-bottom:1px solid #ddd}}\
         .tiles{{display:flex;gap:16px}}\
         .tile{{border:1px solid #ddd;border-radius:8px;padding:12px;flex:1}}</style>\
         </head><body><h1>{title}</h1>"
    );
    for section in sections {
        let _ = write!(out, "<h2>{}</h2>\n{}", section.title, section.body);
    }
    out.push_str("</body></html>\n");
    out
}

fn sample_rows() -> Vec<Row> {
    vec![
        Row::new()
            .with("region", "Region 2")
            .with("status", "active")
            .with("revenue", 1_280_000),
        Row::new()
            .with("region", "Region 10")
            .with("status", "delayed")
            .with("revenue", 310_500),
        Row::new()
            .with("region", "Region 1")
            .with("status", "active")
            .with("revenue", 905_200),
        Row::new().with("region", "Region 7").with("status", "paused"),
    ]
}

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 120.0).with_value2(100.0),
        DataPoint::new("Feb", 90.0).with_value2(110.0),
        DataPoint::new("Mar", 150.0).with_value2(120.0),
        DataPoint::new("Apr", 180.0),
        DataPoint::new("May", 140.0).with_value2(150.0),
    ]
}

fn kpi_section() -> Section {
    let tiles = [
        KpiTile::new("Daily visits", 48_230.0).with_change(12.5, Trend::Up),
        KpiTile::new("Error rate", 0.8)
            .with_suffix("%")
            .with_change(3.1, Trend::Down),
        KpiTile::new("Open tickets", 42.0),
    ];

    let mut body = String::from("<div class=\"tiles\">");
    for tile in &tiles {
        let _ = write!(
            body,
            "<div class=\"tile\"><div>{}</div><strong>{}{}</strong>",
            tile.label,
            tile.value_text(),
            tile.suffix.as_deref().unwrap_or(""),
        );
        if let Some(change) = tile.change_text() {
            let _ = write!(
                body,
                " <span style=\"color:{}\">{} {change}</span>",
                color_hex(tile.trend.color()),
                tile.trend.arrow(),
            );
        }
        body.push_str("</div>");
    }
    body.push_str("</div>\n");
    Section {
        title: "KPI tiles",
        body,
    }
}

fn table_section() -> Section {
    let spec = TableSpec::new(vec![
        Column::new("region", "Region"),
        Column::new("status", "Status").with_sortable(false),
        Column::new("revenue", "Revenue")
            .with_align(Align::Right)
            .with_render(|value, _row| {
                value
                    .and_then(Value::as_f64)
                    .map(format_number)
                    .unwrap_or_default()
            }),
    ])
    .with_empty_message("No regions reporting");

    let collation = Collation::try_root().expect("root collation data is compiled in");
    let mut session = TableSession::new(spec, collation);
    // One activation: revenue ascending.
    session.activate("revenue");

    Section {
        title: "Regional revenue (sorted by revenue)",
        body: table_html(&session.view(&sample_rows())),
    }
}

fn table_html(view: &TableView) -> String {
    let align_attr = |align: Align| match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    };

    let mut out = String::from("<table><thead><tr>");
    for cell in &view.header {
        let indicator = match cell.sort {
            Some(SortOrder::Asc) => " \u{25b2}",
            Some(SortOrder::Desc) => " \u{25bc}",
            None => "",
        };
        let _ = write!(
            out,
            "<th style=\"text-align:{}\">{}{indicator}</th>",
            align_attr(cell.align),
            cell.text,
        );
    }
    out.push_str("</tr></thead><tbody>");

    match &view.body {
        TableBody::Empty { message, span } => {
            let _ = write!(
                out,
                "<tr><td colspan=\"{span}\" style=\"text-align:center\">{message}</td></tr>"
            );
        }
        TableBody::Rows(rows) => {
            for row in rows {
                out.push_str("<tr>");
                for cell in &row.cells {
                    let _ = write!(
                        out,
                        "<td style=\"text-align:{}\">{}</td>",
                        align_attr(cell.align),
                        cell.text,
                    );
                }
                out.push_str("</tr>");
            }
        }
    }
    out.push_str("</tbody></table>\n");
    out
}

fn chart_section() -> Section {
    let spec = ChartSpec::new()
        .with_value_label("Revenue")
        .with_value2_label("Target");
    let plot = spec.plot(420.0);
    let mut session = ChartSession::new(spec, ModeSelector::new(ChartMode::Bar));

    let mut body = String::new();
    for mode in ChartMode::ALL {
        session.select(mode);
        let view = session.view(&sample_points(), plot);
        let _ = write!(
            body,
            "<h3>{}</h3>\n{}\n{}",
            mode.label(),
            chart_svg(&view, plot),
            legend_html(&view),
        );
    }
    Section {
        title: "Monthly revenue vs target",
        body,
    }
}

fn chart_svg(view: &ChartView, plot: Rect) -> String {
    let mut canvas = SvgCanvas::new(plot);
    match view {
        ChartView::Bar(bar) => bar_svg(&mut canvas, bar),
        ChartView::Line(line) => line_svg(&mut canvas, line),
        ChartView::Pie(pie) => pie_svg(&mut canvas, pie),
    }
    canvas.finish()
}

fn bar_svg(canvas: &mut SvgCanvas, view: &BarChartView) {
    for bar in &view.bars {
        canvas.fill_rect(bar.rect, bar.color);
    }
}

fn line_svg(canvas: &mut SvgCanvas, view: &LineChartView) {
    for series in &view.series {
        canvas.stroke_path(&series.path, series.color, 2.0);
        for &marker in &series.markers {
            canvas.marker(marker, 3.0, series.color);
        }
    }
}

fn pie_svg(canvas: &mut SvgCanvas, view: &PieChartView) {
    for wedge in &view.wedges {
        canvas.fill_path(&wedge.path, wedge.color);
    }
    for wedge in &view.wedges {
        if wedge.fraction == 0.0 {
            continue;
        }
        let mid = (wedge.start_angle + wedge.end_angle) * 0.5;
        let at = kurbo::Point::new(
            view.center.x + mid.cos() * view.radius * 1.15,
            view.center.y + mid.sin() * view.radius * 1.15,
        );
        canvas.text(at, 11.0, css::BLACK, &wedge.percent_label());
    }
}

fn legend_html(view: &ChartView) -> String {
    let mut out = String::from("<p>");
    for entry in view.legend() {
        let _ = write!(
            out,
            "<span style=\"color:{}\">\u{25a0}</span> {} &nbsp;",
            color_hex(entry.color),
            entry.label,
        );
    }
    out.push_str("</p>\n");
    out
}

fn badge_section() -> Section {
    let mut body = String::new();
    for status in Status::ALL {
        let badge = status.badge();
        let rgba = badge.fill().to_rgba8();
        let _ = write!(
            body,
            "<span style=\"background:rgba({},{},{},0.1);color:{};\
             border-radius:999px;padding:2px 10px;margin-right:6px\">{}{}</span>",
            rgba.r,
            rgba.g,
            rgba.b,
            color_hex(badge.color),
            if badge.show_dot { "\u{25cf} " } else { "" },
            badge.label,
        );
    }
    body.push('\n');
    Section {
        title: "Status badges",
        body,
    }
}
