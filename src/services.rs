pub mod short_code;
pub mod url_validation;

pub use short_code::ShortCodeGenerator;
