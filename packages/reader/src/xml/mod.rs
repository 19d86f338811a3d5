//! XML utilities: DOM navigation and tolerant attribute coercion.

mod utils;

pub use utils::{
    element_children, get_boolean, get_datetime, get_string, get_tag_name, parse_boolean,
    parse_datetime, text_content,
};
