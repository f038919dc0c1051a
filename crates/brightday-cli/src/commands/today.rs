use brightday_core::{EntryStore, Status};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = EntryStore::open()?;
    let entry = store.today_entry()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    match entry {
        Some(entry) => {
            match entry.status {
                Status::Success => println!("✅ You stayed on track today!"),
                Status::Slip => println!("💭 You logged a slip today"),
            }
            if let Some(gratitude) = &entry.gratitude {
                println!("One good thing: {gratitude}");
            }
        }
        None => println!("No entry logged for today yet."),
    }
    Ok(())
}
