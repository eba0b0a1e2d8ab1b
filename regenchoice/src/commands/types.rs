// regenchoice/src/commands/types.rs

use comfy_table::Table;

use regenchoice_core::domain::question::{ITEM_COUNT_MAX, ITEM_COUNT_MIN, QuestionType};

pub fn execute() -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Type", "Items", "Default", "Description"]);

    for t in QuestionType::ALL {
        let range = if t.is_itemized() {
            format!("{}-{}", ITEM_COUNT_MIN, ITEM_COUNT_MAX)
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            t.as_str().to_string(),
            range,
            t.default_item_count().to_string(),
            t.description().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
