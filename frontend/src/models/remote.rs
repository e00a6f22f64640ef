/// State of data delivered asynchronously by a collaborator hook.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Remote::Loaded(value),
            Err(reason) => Remote::Failed(reason),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_maps_onto_loaded_or_failed() {
        assert_eq!(Remote::from_result(Ok::<_, String>(3)), Remote::Loaded(3));
        assert_eq!(
            Remote::<u8>::from_result(Err("HTTP 500".to_string())),
            Remote::Failed("HTTP 500".to_string())
        );
    }

    #[test]
    fn only_loaded_exposes_a_value() {
        assert_eq!(Remote::Loaded("x").loaded(), Some(&"x"));
        assert_eq!(Remote::<&str>::Loading.loaded(), None);
        assert_eq!(Remote::<&str>::Failed("down".into()).loaded(), None);
        assert_eq!(Remote::<()>::default(), Remote::Loading);
    }
}
