use std::{path::PathBuf, sync::LazyLock};

pub const HTTP_DEFAULT_PORT: u16 = 3000;
pub const HTTP_DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DATA_FILE_DEFAULT_PATH: &str = "customers-100000.csv";

// Pagination defaults applied when a query parameter is omitted
pub const DEFAULT_START: &str = "0";
pub const DEFAULT_LIMIT: &str = "10";

pub static HTTP_PORT: LazyLock<u16> = LazyLock::new(|| {
    std::env::var("PORT")
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(HTTP_DEFAULT_PORT)
});

pub static HTTP_BIND_ADDR: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CUSTOMERS_BIND_ADDR").unwrap_or_else(|_| HTTP_DEFAULT_BIND_ADDR.to_string())
});

pub static DATA_FILE_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    let path =
        std::env::var("CUSTOMERS_DATA_FILE").unwrap_or_else(|_| DATA_FILE_DEFAULT_PATH.to_string());
    PathBuf::from(path)
});
