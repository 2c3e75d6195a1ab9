pub mod audit;
pub mod cloud;
pub mod local;
