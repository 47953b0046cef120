//! Rule-based field extraction for French contract text.
//!
//! Each extractor is a pure function over the raw OCR text: keyword
//! categories, regex-matched date and amount, and a leading-sentence excerpt.

pub mod category;
pub mod fields;
pub mod passages;

pub use category::classify;
pub use fields::{find_amount, find_date};
pub use passages::leading_excerpt;
