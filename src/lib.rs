pub mod service {
    pub mod config_service;
    pub mod file_service;
    pub mod process_service;
    pub mod report_service;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod error;
    pub mod file;
    pub mod process;
}

pub mod utils {
    pub mod utils;
}
