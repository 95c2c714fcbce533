pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod order_id;
        pub mod place_order;
    }
    pub mod favorite {
        pub mod add;
        pub mod get_all;
        pub mod remove;
        pub mod toggle;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod user {
        pub mod check_email;
        pub mod current;
        pub mod dashboard;
        pub mod login;
        pub mod logout;
        pub mod register;
        pub mod update_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod shared {
        pub mod locale;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
            pub mod toggle;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod password;
        pub mod repository;
        pub mod session;
        pub mod use_cases {
            pub mod check_email;
            pub mod current;
            pub mod dashboard;
            pub mod login;
            pub mod logout;
            pub mod register;
            pub mod update_profile;
        }
    }
}
