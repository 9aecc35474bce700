use crate::cli::ShowArgs;
use crate::command::{Command, load_items};
use jiff::{Timestamp, tz::TimeZone};
use libtempo::{Item, evaluate, format_age, format_percent, status_message};

impl Command for ShowArgs {
    fn execute(self) -> anyhow::Result<()> {
        let items = load_items(&self.items)?;
        let now = self.now.map_or_else(Timestamp::now, |at| at.0);
        for item in &items {
            print_item(item, now)?;
        }
        Ok(())
    }
}

fn print_item(item: &Item, now: Timestamp) -> anyhow::Result<()> {
    let progress = evaluate(item, now);
    match item {
        Item::TimeBased(timer) => {
            println!("{}", timer.title);
            if timer.display_options.progress_bar {
                println!(
                    "  Status: {} ({})",
                    progress.status,
                    format_percent(progress.percent, timer.decimal_places)
                );
            } else {
                println!("  Status: {}", progress.status);
            }
            println!("  {}", status_message(timer, &progress));
            if timer.display_options.start_time || timer.display_options.end_time {
                // validated upstream, so the zone always resolves
                let zone = timer.display_zone()?;
                if timer.display_options.start_time {
                    println!("  Start: {}", in_zone(timer.start_time, &zone));
                }
                if timer.display_options.end_time {
                    println!("  End:   {}", in_zone(timer.end_time, &zone));
                }
            }
        }
        Item::Age(age) => {
            println!("{}", age.title);
            println!("  {}", format_age(progress.details.elapsed));
        }
    }
    Ok(())
}

fn in_zone(at: Timestamp, zone: &TimeZone) -> String {
    at.to_zoned(zone.clone())
        .strftime("%Y-%m-%d %I:%M:%S %p %Z")
        .to_string()
}
