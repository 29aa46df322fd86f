use std::io::Write;

use crate::error::Result;
use crate::models::Day;

/// Write one CSV row per meal.
pub fn write_plan_csv<W: Write>(days: &[Day], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "day",
        "day_title",
        "meal_type",
        "title",
        "nutrition",
        "timings",
        "ingredients",
        "instructions",
    ])?;

    for day in days {
        for meal in &day.meals {
            wtr.write_record([
                day.day_number.to_string(),
                day.title.clone(),
                meal.meal_type.to_string(),
                meal.title.clone(),
                meal.nutrition.clone(),
                meal.timings.join(" | "),
                meal.ingredients.join("; "),
                meal.instructions.join(" "),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the parsed plan as pretty JSON.
pub fn write_plan_json<W: Write>(days: &[Day], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, days)?;
    writeln!(writer)?;
    Ok(())
}
