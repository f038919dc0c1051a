use brightday_core::{month_grid, today_local, EntryStore, Status};
use chrono::Datelike;

/// Parse a `YYYY-MM` month argument.
fn parse_month(input: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let parsed = input
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)));
    match parsed {
        Some((year, month)) if (1..=12).contains(&month) => Ok((year, month)),
        _ => Err(format!("invalid month '{input}': expected YYYY-MM").into()),
    }
}

pub fn run(month: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let today = today_local();
    let (year, month) = match month {
        Some(input) => parse_month(input)?,
        None => (today.year(), today.month()),
    };

    let store = EntryStore::open()?;
    let entries = store.list_entries()?;
    let grid = month_grid(year, month, &entries, today)?;

    if let Some(first) = grid.days.iter().find(|d| d.in_month) {
        println!("{:^28}", first.date.format("%B %Y").to_string());
    }
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| {
                if !cell.in_month {
                    "  · ".to_string()
                } else {
                    let marker = match cell.status {
                        Some(Status::Success) => '✓',
                        Some(Status::Slip) => '✗',
                        None => ' ',
                    };
                    format!("{:>3}{}", cell.date.day(), marker)
                }
            })
            .collect();
        println!("{row}");
    }
    println!("\n✓ on track   ✗ slipped   (today: {today})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_month_accepts_year_dash_month() {
        assert_eq!(parse_month("2024-06").unwrap(), (2024, 6));
        assert_eq!(parse_month("2024-6").unwrap(), (2024, 6));
        assert!(parse_month("2024").is_err());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("june").is_err());
    }
}
