pub mod aggregate;

pub use aggregate::{Template, TemplateDto, TemplateId};
