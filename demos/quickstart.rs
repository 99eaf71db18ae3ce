use chrono::Utc;
use imperial_calendar::{
    convert::{current_imperial, gregorian_to_solar_longitude, imperial_to_gregorian},
    GregorianDateTime, Timezone, Zoned,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let now = Utc::now();
    let imperial = current_imperial(now, Timezone::AsiaTokyo);
    let gregorian = imperial_to_gregorian(&imperial, Timezone::Utc);
    let ls = gregorian_to_solar_longitude(&GregorianDateTime::from_chrono(&now.naive_utc()));

    println!("UTC: {}", now.format("%Y-%m-%dT%H:%M:%S%:z"));
    println!("Imperial: {imperial} ({})", imperial.local().month_name());
    println!("Back to Gregorian: {gregorian}");
    println!("Ls: {ls:.2}°");
    if let Some(holiday) = imperial.local().holiday() {
        println!("Holiday: {}", holiday.names().join(", "));
    }
}
