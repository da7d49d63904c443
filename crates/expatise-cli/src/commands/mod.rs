pub mod countdown;
pub mod run;
pub mod theme;
