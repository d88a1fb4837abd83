//! Process-wide element registry
//!
//! Maps tag names to constructors. A tag can be defined once per process;
//! a second definition is rejected, so re-running module setup is harmless
//! when it goes through [`crate::register`].

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::error::{Result, TextareaError};
use crate::textarea::PrettyTextarea;

/// Constructor stored for a tag
pub type Constructor = fn() -> PrettyTextarea;

fn definitions() -> &'static Mutex<HashMap<String, Constructor>> {
    static DEFINITIONS: OnceLock<Mutex<HashMap<String, Constructor>>> = OnceLock::new();
    DEFINITIONS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Define `tag`; fails if it is already defined
pub fn define(tag: &str, constructor: Constructor) -> Result<()> {
    let mut defs = definitions()
        .lock()
        .map_err(|_| TextareaError::Message("element registry poisoned".to_string()))?;
    if defs.contains_key(tag) {
        return Err(TextareaError::AlreadyDefined(tag.to_string()));
    }
    log::debug!("defined element <{}>", tag);
    defs.insert(tag.to_string(), constructor);
    Ok(())
}

/// Check if `tag` is defined
pub fn is_defined(tag: &str) -> bool {
    definitions()
        .lock()
        .map(|defs| defs.contains_key(tag))
        .unwrap_or(false)
}

/// Construct a new, detached element for `tag`
pub fn create(tag: &str) -> Result<PrettyTextarea> {
    let constructor = definitions()
        .lock()
        .map_err(|_| TextareaError::Message("element registry poisoned".to_string()))?
        .get(tag)
        .copied()
        .ok_or_else(|| TextareaError::UnknownElement(tag.to_string()))?;
    Ok(constructor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textarea::Lifecycle;

    #[test]
    fn test_define_once() {
        assert!(!is_defined("test-define-once"));
        define("test-define-once", PrettyTextarea::new).unwrap();
        assert!(is_defined("test-define-once"));
        assert!(matches!(
            define("test-define-once", PrettyTextarea::new),
            Err(TextareaError::AlreadyDefined(_))
        ));
    }

    #[test]
    fn test_create() {
        define("test-create", PrettyTextarea::new).unwrap();
        let element = create("test-create").unwrap();
        assert_eq!(element.lifecycle(), Lifecycle::Detached);
        assert!(matches!(
            create("test-missing"),
            Err(TextareaError::UnknownElement(_))
        ));
    }
}
