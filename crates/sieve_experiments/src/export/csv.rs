use crate::results::{ResultTable, COLUMNS};

pub(crate) fn export_to_csv_impl(
    table: &ResultTable,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(COLUMNS)?;

    for row in table {
        wtr.write_record([
            row.algorithm.as_str(),
            &row.n.to_string(),
            &row.time_ms.map(|t| t.to_string()).unwrap_or_default(),
            &row.peak_ram_mb.map(|m| m.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
