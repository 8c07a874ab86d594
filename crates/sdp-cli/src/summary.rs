use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sdp_artifact::ArtifactSummary;
use sdp_core::PredictionOutcome;
use sdp_model::{
    Age, Cgpa, DietaryHabits, Field, Gender, Rating, RiskLabel, SleepDuration, StudyHours, YesNo,
};
use sdp_normalization::CategoryMapping;
use sdp_transform::FeatureSchema;

use crate::batch::BatchReport;

/// Headline and advice for one prediction.
pub fn render_headline(outcome: &PredictionOutcome) -> String {
    let result = &outcome.result;
    let mut text = String::new();
    let _ = writeln!(text, "Prediction Result");
    let _ = writeln!(text, "{}", result.label.headline());
    let _ = writeln!(text, "{}", result.label.advice());
    let _ = write!(
        text,
        "Probability of elevated risk: {:.1}%",
        result.probability * 100.0
    );
    text
}

/// The submitted values, as entered.
pub fn input_table(outcome: &PredictionOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (label, value) in outcome.result.input.display_rows() {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

/// Submitted values the model has no column for.
pub fn dropped_table(outcome: &PredictionOutcome) -> Option<Table> {
    if !outcome.has_dropped_columns() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Unseen column")]);
    apply_table_style(&mut table);
    for column in &outcome.dropped {
        table.add_row(vec![
            Cell::new(column.field.display_label()),
            Cell::new(&column.column).fg(Color::Yellow),
        ]);
    }
    Some(table)
}

pub fn print_prediction(outcome: &PredictionOutcome, explain: bool) {
    println!("{}", render_headline(outcome));
    println!();
    println!("Student Data Used for Prediction:");
    println!("{}", input_table(outcome));
    if explain {
        println!();
        match dropped_table(outcome) {
            Some(table) => {
                println!("Values never seen in training (encoded as all-zero):");
                println!("{table}");
            }
            None => println!("Every submitted value matched a model column."),
        }
    }
}

pub fn batch_table(report: &BatchReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Label"),
        header_cell("Probability"),
        header_cell("Unseen"),
        header_cell("Result"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for record in &report.records {
        match (&record.outcome, &record.error) {
            (Some(outcome), _) => {
                let label = outcome.result.label;
                table.add_row(vec![
                    Cell::new(record.row),
                    label_cell(label),
                    Cell::new(format!("{:.3}", outcome.result.probability)),
                    count_cell(outcome.dropped.len()),
                    Cell::new(label.headline()),
                ]);
            }
            (None, error) => {
                table.add_row(vec![
                    Cell::new(record.row),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(error.as_deref().unwrap_or("unknown error")).fg(Color::Red),
                ]);
            }
        }
    }
    table
}

pub fn print_batch(report: &BatchReport) {
    println!("{}", batch_table(report));
    let failed = report.failed_count();
    println!(
        "{} rows, {} predicted, {} failed",
        report.records.len(),
        report.records.len() - failed,
        failed
    );
}

/// Allowed values for every form field.
pub fn options_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Allowed values"),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        table.add_row(vec![
            Cell::new(field.display_label()),
            Cell::new(field.column_name()).fg(Color::Blue),
            Cell::new(allowed_values(field)),
        ]);
    }
    table
}

pub fn degree_table(degrees: &CategoryMapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Degree"), header_cell("Token")]);
    apply_table_style(&mut table);
    for entry in degrees.entries() {
        table.add_row(vec![
            Cell::new(&entry.display),
            Cell::new(&entry.token).fg(Color::Blue),
        ]);
    }
    table
}

fn allowed_values(field: Field) -> String {
    let join = |values: &[&str]| values.join(", ");
    match field {
        Field::Gender => join(&Gender::ALL.map(|value| value.as_str())),
        Field::Age => format!("{}-{}", Age::MIN, Age::MAX),
        Field::FamilyHistory => join(&YesNo::FAMILY_HISTORY_OPTIONS.map(|value| value.as_str())),
        Field::AcademicPressure | Field::StudySatisfaction | Field::FinancialStress => {
            format!("{}-{}", Rating::MIN, Rating::MAX)
        }
        Field::Cgpa => format!(
            "0.0-{}.{} in steps of 0.1",
            Cgpa::MAX_TENTHS / 10,
            Cgpa::MAX_TENTHS % 10
        ),
        Field::StudyHours => format!("{}-{}", StudyHours::MIN, StudyHours::MAX),
        Field::SleepDuration => join(&SleepDuration::ALL.map(|value| value.as_str())),
        Field::DietaryHabits => join(&DietaryHabits::ALL.map(|value| value.as_str())),
        Field::Degree => "see degree table".to_string(),
        Field::SuicidalThoughts => {
            join(&YesNo::SUICIDAL_THOUGHTS_OPTIONS.map(|value| value.as_str()))
        }
    }
}

pub fn schema_table(schema: &FeatureSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in schema.columns().iter().enumerate() {
        let field = match Field::for_column(column) {
            Some(field) => Cell::new(field.display_label()),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(index), Cell::new(column), field]);
    }
    table
}

pub fn print_schema(summary: &ArtifactSummary, schema: &FeatureSchema) {
    println!("Model: {}", summary.path.display());
    println!("SHA-256: {}", summary.sha256);
    println!("Trees: {}", summary.tree_count);
    println!(
        "Features: {} (fingerprint {})",
        summary.feature_count, summary.schema_fingerprint
    );
    println!("{}", schema_table(schema));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn label_cell(label: RiskLabel) -> Cell {
    match label {
        RiskLabel::ElevatedRisk => Cell::new(label)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        RiskLabel::NoElevatedRisk => Cell::new(label).fg(Color::Green),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
