use serde::{Deserialize, Serialize};

/// A blog post as returned by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    /// Creates a new Post.
    ///
    /// # Arguments
    /// * `title` - Headline shown in the `<h1>`
    /// * `body` - Text shown in the `<p>`
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Default for Post {
    /// The post the simulated endpoint serves.
    fn default() -> Self {
        Self::new("Hello World", "This is a test post")
    }
}
