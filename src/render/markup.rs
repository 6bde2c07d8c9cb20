//! HTML markup for a rendered sheet.
//!
//! The grid is a CSS grid whose template comes straight from the geometry;
//! each visible cell is placed with `grid-column`/`grid-row` spans. Header
//! labels are separate fragments so the client can pin them while scrolling.

use std::fmt::Write;

use crate::layout::GridGeometry;
use crate::types::{HAlign, RenderCell, RenderStyle, SheetMarkup, VAlign};

/// Inline CSS declarations for a cell's style, in emission order.
fn style_css(style: &RenderStyle) -> Vec<String> {
    let mut css = Vec::with_capacity(8);
    if style.bold {
        css.push("font-weight:bold".to_string());
    }
    if style.italic {
        css.push("font-style:italic".to_string());
    }
    if let Some(color) = &style.color {
        css.push(format!("color:{color}"));
    }
    css.push(
        match style.align_h {
            HAlign::Center => "text-align:center;justify-content:center",
            HAlign::Right => "text-align:right;justify-content:flex-end",
            HAlign::Left => "text-align:left;justify-content:flex-start",
        }
        .to_string(),
    );
    css.push(
        match style.align_v {
            VAlign::Top => "align-items:flex-start;vertical-align:top",
            VAlign::Bottom => "align-items:flex-end;vertical-align:bottom",
            VAlign::Middle => "align-items:center;vertical-align:middle",
        }
        .to_string(),
    );
    if let Some(background) = &style.background {
        css.push(format!("background-color:{background}"));
    }
    css
}

/// One `<div class="cell">` element.
pub fn cell_html(cell: &RenderCell) -> String {
    let mut classes = String::from("cell");
    if cell.style.wrap {
        classes.push_str(" word-wrap");
    }
    if cell.is_merged_primary {
        classes.push_str(" merged-root");
    }

    let mut css = style_css(&cell.style);
    css.push(format!("grid-column: {} / span {}", cell.col, cell.col_span));
    css.push(format!("grid-row: {} / span {}", cell.row, cell.row_span));

    format!(
        r#"<div class="{classes}" data-row="{}" data-col="{}" style="{}"><span class="cell-content">{}</span></div>"#,
        cell.row,
        cell.col,
        css.join(";"),
        cell.text
    )
}

/// The grid container with every visible cell.
pub fn grid_html(cells: &[RenderCell], geometry: &GridGeometry) -> String {
    let mut html = String::with_capacity(64 + cells.len() * 160);
    let _ = write!(
        html,
        r#"<div class="grid-inner" style="grid-template-columns: {}; grid-auto-rows: min-content; grid-template-rows: {};">"#,
        geometry.template_columns(),
        geometry.template_rows()
    );
    for cell in cells {
        html.push_str(&cell_html(cell));
    }
    html.push_str("</div>");
    html
}

/// Column header strip; each label is as wide as its column.
pub fn col_labels_html(labels: &[String], geometry: &GridGeometry) -> String {
    let mut html = String::from(r#"<div class="col-labels-inner">"#);
    for (label, width) in labels.iter().zip(&geometry.col_widths) {
        let _ = write!(
            html,
            r#"<div class="col-label" style="width:{width}px;">{label}</div>"#
        );
    }
    html.push_str("</div>");
    html
}

/// Row header strip; each label is as tall as its row.
pub fn row_labels_html(labels: &[String], geometry: &GridGeometry) -> String {
    let mut html = String::from(r#"<div class="row-labels-inner">"#);
    for (label, height) in labels.iter().zip(&geometry.row_heights) {
        let _ = write!(
            html,
            r#"<div class="row-label" data-row="{label}" style="height:{height}px;">{label}</div>"#
        );
    }
    html.push_str("</div>");
    html
}

pub fn sheet_markup(
    cells: &[RenderCell],
    geometry: &GridGeometry,
    col_labels: &[String],
    row_labels: &[String],
) -> SheetMarkup {
    SheetMarkup {
        grid: grid_html(cells, geometry),
        col_labels: col_labels_html(col_labels, geometry),
        row_labels: row_labels_html(row_labels, geometry),
    }
}
