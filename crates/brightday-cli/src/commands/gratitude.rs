use brightday_core::EntryStore;

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = EntryStore::open()?;
    let entry = store.set_gratitude(text)?;
    println!("Gratitude saved for {}.", entry.date);
    Ok(())
}
