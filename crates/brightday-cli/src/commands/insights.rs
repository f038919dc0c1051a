use brightday_core::{build_report, encouragement, today_local, EntryStore};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = EntryStore::open()?;
    let entries = store.list_entries()?;
    let report = build_report(&entries, today_local());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", encouragement(&report));
    println!("Total days logged: {}", report.total_entries);
    println!("Success rate:      {}%", report.success_rate);
    println!("On track days:     {}", report.success_count);
    println!("Slip days:         {}", report.slip_count);
    println!("Last 7 days:       {} on track", report.last_7_days_successes);
    println!("Last 30 days:      {} on track", report.last_30_days_successes);
    Ok(())
}
