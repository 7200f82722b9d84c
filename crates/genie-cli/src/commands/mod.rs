pub mod analyze;
pub mod clear;
pub mod demo;
pub mod dispatch;
pub mod export;
pub mod results;
pub mod schema;
pub mod serve;
pub mod shared;
