use crate::{domain::RecordError, helpers::error_chain_fmt};

#[derive(thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    InvalidRecord(#[from] RecordError),
    #[error("Failed to render the card mail template.")]
    TemplateError(#[source] tera::Error),
}

impl std::fmt::Debug for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::TemplateError(e)
    }
}
