use brightday_core::{messages, Config, EntryStore};

pub fn run(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = EntryStore::open()?;
    let streak = store.streak_state()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&streak)?);
        return Ok(());
    }

    if config.display.show_quote {
        println!("{}\n", messages::random_quote());
    }
    println!("Current streak: {}", streak.current_streak);
    println!("Longest streak: {}", streak.longest_streak);
    if let Some(date) = streak.last_slip_date {
        println!("Last slip: {date}");
    }
    Ok(())
}
