/// The single normalized representation handed to the remote analyzer,
/// independent of the original file format: UTF-8 text, or a base64 data URI
/// for photos.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedPayload {
    Text(String),
    Image(String),
}

impl NormalizedPayload {
    pub fn content(&self) -> &str {
        match self {
            Self::Text(value) | Self::Image(value) => value,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}
