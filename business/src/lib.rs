pub mod application {
    pub mod receipt {
        pub mod extract;
    }
    pub mod tip {
        pub mod calculate;
    }
}

pub mod domain {
    pub mod logger;
    pub mod receipt {
        pub mod errors;
        pub mod instruction;
        pub mod model;
        pub mod response;
        pub mod services;
        pub mod use_cases {
            pub mod extract;
        }
    }
    pub mod tip {
        pub mod breakdown;
        pub mod engine;
        pub mod errors;
        pub mod selection;
        pub mod use_cases {
            pub mod calculate;
        }
    }
}
