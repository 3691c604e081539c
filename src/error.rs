use thiserror::Error;

use crate::graphs::graph::Shape;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot derive {requested} line graph from {base} base graph")]
    UnsupportedDerivation { base: Shape, requested: Shape },
}
