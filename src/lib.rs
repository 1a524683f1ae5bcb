// Crate root: module tree only.
//
// - `modules::logbook::core` holds the entry model and the pure rules
//   (validation, filtering, the text format, the session operator).
// - `modules::logbook::use_cases` holds one folder per operation, each with
//   its handler and its HTTP and GraphQL inbound adapters.
// - `shell` wires everything into a single-session service.

pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod entry_store;
    }
}

pub mod modules {
    pub mod logbook {
        pub mod core {
            pub mod codec;
            pub mod decision;
            pub mod entry;
            pub mod filter;
            pub mod session;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod record_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_shift_change {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod query;
            }
            pub mod export_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod import_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
