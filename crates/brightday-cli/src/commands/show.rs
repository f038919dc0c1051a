use brightday_core::{parse_date, EntryStore, Status};

pub fn run(date: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let date = parse_date(date)?;
    let store = EntryStore::open()?;
    let entry = store.get_entry(date)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    match entry {
        Some(entry) => {
            let marker = match entry.status {
                Status::Success => "✅ on track",
                Status::Slip => "💭 slipped",
            };
            println!("{} {}", entry.date, marker);
            if let Some(gratitude) = &entry.gratitude {
                println!("One good thing: {gratitude}");
            }
            if let Some(note) = &entry.note {
                println!("Note: {note}");
            }
        }
        None => println!("No entry logged for {date}."),
    }
    Ok(())
}
