use anyhow::Result;

pub fn report_filters() -> Result<()> {
    let filters = serde_json::to_string_pretty(&common::report_filters())?;
    println!("{}", filters);
    Ok(())
}
