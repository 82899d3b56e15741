use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::model::{Dataset, Element, Group, Ratios};

/// Shared table styling, passed explicitly into every render call rather
/// than living in a process-wide global.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub preset: &'static str,
    pub modifier: Option<&'static str>,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle {
            preset: UTF8_FULL,
            modifier: Some(UTF8_ROUND_CORNERS),
        }
    }
}

fn styled_table(style: &ReportStyle) -> Table {
    let mut table = Table::new();
    table.load_preset(style.preset);
    if let Some(modifier) = style.modifier {
        table.apply_modifier(modifier);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn titled(title: &str, table: &Table) -> String {
    format!("{title}\n{table}")
}

/// Raw dataset grid, one row per sample, concentrations to 2 decimals.
pub fn render_dataset(dataset: &Dataset, style: &ReportStyle) -> String {
    let mut table = styled_table(style);
    let mut header = vec!["group", "sample", "x_utm", "y_utm"];
    header.extend(Element::ALL.iter().map(|e| e.column()));
    table.set_header(header);

    for group in Group::ALL {
        for sample in &dataset.samples[group] {
            let mut row = vec![
                group.label().to_string(),
                sample.code.clone(),
                sample.x_utm.clone(),
                sample.y_utm.clone(),
            ];
            row.extend(Element::ALL.iter().map(|&e| format!("{:.2}", sample.ppm[e])));
            table.add_row(row);
        }
    }

    titled("DATASET", &table)
}

/// Variance grid, one row per group with computed variances, 3 decimals.
pub fn render_variances(dataset: &Dataset, style: &ReportStyle) -> String {
    let mut table = styled_table(style);
    let mut header = vec!["group"];
    header.extend(Element::ALL.iter().map(|e| e.symbol()));
    table.set_header(header);

    for group in Group::ALL {
        if let Some(variances) = dataset.variances[group] {
            let mut row = vec![group.label().to_string()];
            row.extend(Element::ALL.iter().map(|&e| format!("{:.3}", variances[e])));
            table.add_row(row);
        }
    }

    titled("VARIANCE", &table)
}

/// Single-row F-distribution grid, 3 decimals.
pub fn render_ratios(ratios: Ratios, style: &ReportStyle) -> String {
    let mut table = styled_table(style);
    table.set_header(Element::ALL.iter().map(|e| e.symbol()).collect::<Vec<_>>());
    table.add_row(
        Element::ALL
            .iter()
            .map(|&e| format!("{:.3}", ratios[e]))
            .collect::<Vec<_>>(),
    );

    titled("F-DISTRIBUTION", &table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
