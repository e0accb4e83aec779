//! Table and confirmation rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use rsvp_model::{ConfirmationSummary, Household, HouseholdIndex, MealOption};

pub fn print_households(index: &HouseholdIndex) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Household"),
        header_cell("Name"),
        header_cell("Members"),
    ]);
    apply_table_style(&mut table);
    for household in index.households() {
        let members: Vec<String> = household.members.iter().map(|m| m.full_name()).collect();
        table.add_row(vec![
            Cell::new(&household.id).fg(Color::Blue),
            Cell::new(&household.name),
            Cell::new(members.join(", ")),
        ]);
    }
    println!("{table}");
    println!(
        "{} household(s), {} guest(s)",
        index.len(),
        index.records().len()
    );
}

pub fn print_household(household: &Household) {
    println!("Household: {} ({})", household.name, household.id);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Guest"),
        header_cell("Name"),
        header_cell("Plus one"),
    ]);
    apply_table_style(&mut table);
    for member in &household.members {
        table.add_row(vec![
            Cell::new(&member.guest_id),
            Cell::new(member.full_name()),
            plus_one_cell(member.has_plus_one, member.plus_one_name.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn print_meals(options: &[MealOption]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value"), header_cell("Label")]);
    apply_table_style(&mut table);
    for option in options {
        table.add_row(vec![Cell::new(&option.value), Cell::new(&option.label)]);
    }
    println!("{table}");
}

pub fn print_confirmation(summary: &ConfirmationSummary) {
    let message = match summary {
        ConfirmationSummary::AllAttending { .. } => {
            "We're thrilled you'll be joining us! We can't wait to celebrate with you.".to_string()
        }
        ConfirmationSummary::AllDeclining { .. } => {
            "We're sorry you can't make it, but thank you for letting us know. You'll be missed!"
                .to_string()
        }
        ConfirmationSummary::Mixed {
            attending_first_names,
        } => format!(
            "Thank you for your response. We're excited to celebrate with {}!",
            attending_first_names.join(", ")
        ),
    };
    println!("{message}");
}

fn plus_one_cell(has_plus_one: bool, plus_one_name: Option<&str>) -> Cell {
    if has_plus_one {
        Cell::new(plus_one_name.unwrap_or("yes")).fg(Color::Green)
    } else {
        Cell::new("-").fg(Color::DarkGrey)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
