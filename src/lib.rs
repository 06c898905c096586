pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod codec;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod ports;
            pub mod state;
        }
        pub mod application {
            pub mod account;
            pub mod account_service;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod open_account {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_account {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_active_accounts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod deposit_money {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod withdraw_money {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_limit {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_account {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod event_store_repository;
            }
        }
    }
}

pub mod shell;
