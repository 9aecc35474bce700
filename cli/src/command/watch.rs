use crate::cli::WatchArgs;
use crate::command::{Command, load_items};
use libtempo::{Item, Ticker, evaluate, format_age, format_percent, status_message};
use std::time::Duration;

impl Command for WatchArgs {
    fn execute(self) -> anyhow::Result<()> {
        let items = load_items(&self.items)?;
        let (ticker, ticks) = Ticker::start(Duration::from_secs(self.interval));
        log::info!(
            "watching {} items every {}s",
            items.len(),
            self.interval
        );
        let mut delivered = 0u64;
        for now in &ticks {
            for item in &items {
                let progress = evaluate(item, now);
                match item {
                    Item::TimeBased(timer) => println!(
                        "[{now}] {}: {} ({}) | {}",
                        timer.title,
                        progress.status,
                        format_percent(progress.percent, timer.decimal_places),
                        status_message(timer, &progress),
                    ),
                    Item::Age(age) => println!(
                        "[{now}] {}: {}",
                        age.title,
                        format_age(progress.details.elapsed),
                    ),
                }
            }
            delivered += 1;
            if self.ticks.is_some_and(|limit| delivered >= limit) {
                break;
            }
        }
        ticker.stop();
        Ok(())
    }
}
