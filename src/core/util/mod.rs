pub mod metric_util;
pub mod time_util;
