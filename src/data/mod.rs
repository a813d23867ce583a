//! Data module - raw data cleaning and sample generation

mod processor;

pub use processor::DataProcessor;
