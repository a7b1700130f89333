// src/lib.rs

use services::statistics::StatisticsService;

#[derive(Clone)]
pub struct AppState {
    pub service: StatisticsService,
}

pub mod entities {
    pub mod prelude;
    pub mod order_books;
    pub mod order_history;
}

pub mod models {
    pub mod order_book;
    pub mod order_history;
}

pub mod services {
    pub mod statistics;
}

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod repository;
