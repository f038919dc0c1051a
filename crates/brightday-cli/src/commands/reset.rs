use brightday_core::EntryStore;

pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err(
            "this deletes all your entries and cannot be undone; pass --yes to confirm".into(),
        );
    }
    let store = EntryStore::open()?;
    store.clear_all()?;
    println!("All data has been cleared.");
    Ok(())
}
