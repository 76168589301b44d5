use chrono::FixedOffset;
use local_temporal::{Interval, LocalDate, LocalDateTime, LocalTime};

fn main() -> Result<(), local_temporal::Error> {
    let today = LocalDate::now()?;
    let opening = LocalTime::from_format("g:i A", "9:30 AM")?;
    let meeting = LocalDateTime::from_date_and_time(today, opening)?;

    println!("today: {today}");
    println!("opening: {}", opening.format("H:i"));
    println!("meeting: {}", meeting.format("l, F jS Y \\a\\t g:i a"));
    println!("next week: {}", meeting.modify("+1 week")?);

    let tokyo = FixedOffset::east_opt(9 * 3600).expect("offset within a day");
    let tokyo = LocalTime::now_in(tokyo)?;
    println!("Tokyo wall clock: {tokyo}");

    let lunch = opening.checked_add(&Interval::new().with_hours(3))?;
    println!("lunch: {lunch}, {} after opening", opening.diff(&lunch, false));
    Ok(())
}
