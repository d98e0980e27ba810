use crate::results::ResultTable;

pub(crate) fn export_to_json_impl(
    table: &ResultTable,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, table)?;
    Ok(())
}
