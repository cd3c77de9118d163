mod list_statuses;

pub use list_statuses::{__path_list_statuses_handler, list_statuses_handler, StatusDto, StatusListResponseBody};
