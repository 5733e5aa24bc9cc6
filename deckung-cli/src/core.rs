pub mod cost_table;
pub mod job;
pub mod model;
pub mod palette;
pub mod report;
pub mod waterfall;
