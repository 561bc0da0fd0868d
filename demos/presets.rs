//! Print every symbol preset at a few progress levels.

use comfy_table::Table;
use text_progress::bar::render;
use text_progress::parser::parse_block;
use text_progress::progress::{BarDisplay, StylePreset};

fn main() {
    let ratios = ["0/8", "3/8", "4.5/8", "8/8"];

    let mut table = Table::new();
    table.set_header(std::iter::once("preset").chain(ratios));

    for preset in StylePreset::ALL {
        let defaults = preset.to_defaults();
        let mut row = vec![preset.name.to_string()];
        for ratio in ratios {
            let outcome = parse_block(&format!("bar: {ratio}\nlabelHide:true"), &defaults);
            row.push(BarDisplay::plain().format(&render(&outcome.config)));
        }
        table.add_row(row);
    }

    println!("{table}");
}
