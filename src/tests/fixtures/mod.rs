pub mod events {
    pub mod account_event_builder;
}

pub mod repositories {
    pub mod stub_account_repository;
}
