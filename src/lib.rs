pub mod options;
pub mod register_info;
pub mod target_xml;
