//! `bell exchanges` and `bell catalog-hash`.

use bell_calendar::ExchangeDirectory;
use bell_config::ExchangeCatalog;

pub fn list_exchanges(catalog: &ExchangeCatalog) {
    for s in catalog.schedules() {
        println!(
            "{:<8} {:<20} {}-{}  {}",
            s.acronym(),
            s.time_zone().name(),
            s.opening_time(),
            s.closing_time(),
            s.name()
        );
    }
}

pub fn print_catalog_hash(catalog: &ExchangeCatalog) {
    println!("catalog_hash={}", catalog.catalog_hash());
    println!("{}", catalog.canonical_json());
}
