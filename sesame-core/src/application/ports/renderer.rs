use crate::error::SesameError;

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str) -> Result<String, SesameError>;
}
