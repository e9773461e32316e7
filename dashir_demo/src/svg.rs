// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `dashir_demo`.

use std::fmt::Write as _;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

/// Accumulates SVG elements over a fixed view box.
#[derive(Debug)]
pub(crate) struct SvgCanvas {
    view_box: Rect,
    body: String,
}

pub(crate) fn color_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn opacity(color: Color) -> f32 {
    f32::from(color.to_rgba8().a) / 255.0
}

impl SvgCanvas {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, fill: Color) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            color_hex(fill),
            opacity(fill),
        );
        self.body.push('\n');
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, fill: Color) {
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}" stroke="white" stroke-width="1"/>"#,
            path.to_svg(),
            color_hex(fill),
        );
        self.body.push('\n');
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, stroke: Color, width: f64) {
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{width}"/>"#,
            path.to_svg(),
            color_hex(stroke),
        );
        self.body.push('\n');
    }

    pub(crate) fn marker(&mut self, at: Point, radius: f64, fill: Color) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{radius}" fill="{}"/>"#,
            at.x,
            at.y,
            color_hex(fill),
        );
        self.body.push('\n');
    }

    pub(crate) fn text(&mut self, at: Point, font_size: f64, fill: Color, text: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{font_size}" fill="{}">{text}</text>"#,
            at.x,
            at.y,
            color_hex(fill),
        );
        self.body.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
                "\n{}</svg>"
            ),
            self.view_box.x0,
            self.view_box.y0,
            self.view_box.width(),
            self.view_box.height(),
            self.view_box.width(),
            self.view_box.height(),
            self.body,
        )
    }
}
