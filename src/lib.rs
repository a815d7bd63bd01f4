//! Sold-listing scraper: pulls completed sales for a search, cleans and
//! de-duplicates them, and summarises the going price.

pub mod config;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scrapers;
