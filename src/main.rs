mod domain;
mod app_system;


use tracing::info;
use crate::domain::Person;
use crate::app_system::setup_tracing;

fn main() {
    setup_tracing();

    info!("Starting person demo");

    let span = tracing::info_span!("person_setup");
    let person = span.in_scope(|| {
        let mut person = Person::new();
        info!(name = %person.name(), id = person.id(), "Person constructed with defaults");

        person.set_name("John Doe");
        person.set_id(123);
        person
    });

    info!(name = %person.name(), id = person.id(), "Person configured");
    info!("Application completed successfully");
}
