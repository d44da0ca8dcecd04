pub mod shared {
    pub mod http;
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod id_allocator;
        }
        pub mod use_cases {
            pub mod welcome {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store;
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
