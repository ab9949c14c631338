pub mod detect;
pub mod run;
