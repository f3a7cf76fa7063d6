pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod config;
    }
}

pub mod modules {
    pub mod books {
        pub mod core {
            pub mod book;
            pub mod filter;
            pub mod ports;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod add_book {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_books {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_book {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_book {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_book {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod envelope;
            }
            pub mod outbound {
                pub mod books_in_memory;
            }
        }
    }
}

pub mod shell;
