/// How one page section renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    /// Nothing to show; the section is left out entirely.
    Hidden,
    /// No content yet: render the "add some in the CMS admin" prompt.
    Empty { admin_url: String },
    Shown(T),
}

impl<T> Section<T> {
    /// Hide the section when `value` is `None`.
    pub fn or_hidden(value: Option<T>) -> Self {
        value.map_or(Self::Hidden, Self::Shown)
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn shown(&self) -> Option<&T> {
        match self {
            Self::Shown(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Section<Vec<T>> {
    /// Show a non-empty list, hide an empty one.
    pub fn list_or_hidden(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Hidden
        } else {
            Self::Shown(items)
        }
    }

    /// Show a non-empty list, otherwise point editors at the admin panel.
    pub fn list_or_empty(items: Vec<T>, admin_url: &str) -> Self {
        if items.is_empty() {
            Self::Empty {
                admin_url: admin_url.to_string(),
            }
        } else {
            Self::Shown(items)
        }
    }
}
