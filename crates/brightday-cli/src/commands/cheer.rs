use brightday_core::messages;

pub fn run_cheer() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", messages::random_cheer());
    Ok(())
}

pub fn run_quote() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", messages::random_quote());
    Ok(())
}
