//! Client-side routes the navbar can send the user to.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page; shown when the user has no forms left.
    Home,
    Edit(String),
    View(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Edit(id) => format!("/{id}/edit"),
            Self::View(id) => format!("/{id}/viewform"),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Edit("f1".into()).path(), "/f1/edit");
        assert_eq!(Route::View("f1".into()).path(), "/f1/viewform");
    }
}
