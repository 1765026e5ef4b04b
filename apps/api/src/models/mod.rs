pub mod verse;

pub use verse::{RetrievalResult, Verse};
