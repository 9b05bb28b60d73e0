pub mod catalog;
pub mod chef_network;
pub mod dashboard;
pub mod limits;
pub mod menu;
pub mod nutrition;
pub mod orders;
pub mod pricing;
pub mod schedule;
pub mod types;
