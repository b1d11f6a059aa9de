pub mod shared {
    pub mod core {
        pub mod pagination;
        pub mod retry;
    }
    pub mod infrastructure {
        pub mod cache;
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod errors;
            pub mod product;
        }
        pub mod use_cases {
            pub mod create_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod adjust_stock {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_products {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_low_stock_products {
                pub mod handler;
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
                pub mod product_cache;
                pub mod product_store;
                pub mod product_store_in_memory;
            }
        }
        pub mod service;
    }
}

pub mod shell;
