mod save_section;

pub use save_section::{
    __path_save_section_handler, save_section_handler, SaveFileDto, SaveSectionRequestDto, SaveSectionResponseBody,
};
