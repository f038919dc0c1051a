use brightday_core::{Config, EntryStore};

pub fn run(
    config: &Config,
    limit: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = EntryStore::open()?;
    let entries = store.list_entries()?;
    let limit = limit.unwrap_or(config.display.recent_entries as usize);
    let shown: Vec<_> = entries.iter().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries yet. Start logging today!");
        return Ok(());
    }

    for entry in shown {
        let marker = match entry.status {
            brightday_core::Status::Success => "✅",
            brightday_core::Status::Slip => "💭",
        };
        let note = entry
            .gratitude
            .as_deref()
            .or(entry.note.as_deref())
            .unwrap_or("");
        println!("{} {} {}", entry.date, marker, note);
    }
    Ok(())
}
