use anyhow::Result;

use expatise_core::{countdown, AppConfig, Countdown};

pub fn run(config: &AppConfig, date: Option<&str>) -> Result<()> {
    let input = date.unwrap_or(&config.exam.test_date);
    let countdown = Countdown::parse(input, countdown::today())?;

    println!("Test date: {}", countdown.formatted);
    println!("{} left", countdown.days_label());
    Ok(())
}
