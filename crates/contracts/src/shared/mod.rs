pub mod category_filter;
pub mod confirmation;
pub mod loan_selection;
pub mod page_config;
pub mod table_sort;
