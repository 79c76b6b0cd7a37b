pub mod formats;
pub mod parse;
pub mod run;
