mod get_section;
mod put_section;

pub use get_section::{__path_get_section_handler, get_section_handler, SectionResponseBody};
pub use put_section::{__path_put_section_handler, put_section_handler, PutSectionRequestDto, PutSectionResponseBody};
