pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod key_value_storage;
        pub mod storefront_api;
    }
}

pub mod modules {
    pub mod catalog {
        pub mod core {
            pub mod product;
            pub mod query;
            pub mod snapshot;
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
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_product {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_products {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod product_repository;
                pub mod product_repository_in_memory;
                pub mod seed;
            }
        }
    }

    pub mod orders {
        pub mod core {
            pub mod coupon;
            pub mod order;
        }
        pub mod use_cases {
            pub mod confirm_order {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod order_repository;
                pub mod order_repository_in_memory;
            }
        }
    }

    pub mod cart {
        pub mod core {
            pub mod cart;
            pub mod reconcile;
            pub mod view;
        }
        pub mod use_cases {
            pub mod decision;
            pub mod add_item {
                pub mod decide;
            }
            pub mod set_quantity {
                pub mod decide;
            }
            pub mod remove_item {
                pub mod decide;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod catalog_provider;
                pub mod catalog_provider_http;
                pub mod catalog_provider_in_memory;
                pub mod checkout_gateway;
                pub mod checkout_gateway_http;
                pub mod checkout_gateway_in_memory;
                pub mod product_admin;
                pub mod product_admin_http;
            }
        }
        pub mod store;
    }
}

pub mod shell;
