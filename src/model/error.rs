use thiserror::Error;

/// Problems with the scene description. These only come up while the scene is
/// being built, and there is no recovering from them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("a body named {0:?} is already registered")]
    DuplicateName(String),

    #[error("{body:?} orbits {primary:?}, which has not been registered")]
    UnknownPrimary { body: String, primary: String },
}
