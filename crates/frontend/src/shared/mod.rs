pub mod config;
pub mod dom;
pub mod intl_collator;
pub mod table_sort;
