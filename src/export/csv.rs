use crate::models::episode::Episode;
use csv::Writer;

/// Write the episode log as CSV, one row per episode in log order.
/// Embedded quotes in notes are doubled and the field quoted.
pub fn write_csv(path: &str, episodes: &[Episode]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["ID", "Fecha", "Hora", "Intervalo(min)", "Notas"])?;

    for ep in episodes {
        wtr.write_record(&[
            ep.id.clone(),
            ep.date.clone(),
            ep.time.clone(),
            ep.interval.map(|m| m.to_string()).unwrap_or_default(),
            ep.notes.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
