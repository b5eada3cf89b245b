pub mod day_summary;
pub mod page;
pub mod rendered;
pub mod work_entry;
